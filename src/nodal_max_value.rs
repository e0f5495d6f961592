use crate::NodeId;

/// Defines the trait for reductions driven by the host's node loop
///
/// The host visits every node of every partition (possibly split across
/// threads or processes), calls [`NodalReduction::execute`] with the sampled
/// value, and finally combines the partial results with
/// [`NodalReduction::join`]. The join operation must be associative and
/// commutative so that the final answer does not depend on how the mesh was
/// partitioned.
pub trait NodalReduction {
    /// Resets the internal state at the beginning of an evaluation pass
    fn initialize(&mut self);

    /// Accounts for the value sampled at a node
    fn execute(&mut self, node: NodeId, value: f64);

    /// Combines the partial result of another partition into this one
    fn join(&mut self, other: &Self);

    /// Returns the reduced value
    fn value(&self) -> f64;
}

/// Records the maximum nodal value and the node where it occurred
pub struct NodalMaxValue {
    /// Current maximum
    value: f64,

    /// Node where the current maximum was sampled (None before any execute)
    node: Option<NodeId>,
}

impl NodalMaxValue {
    /// Allocates a new instance
    pub fn new() -> Self {
        NodalMaxValue {
            value: f64::MIN,
            node: None,
        }
    }

    /// Returns the node where the maximum was sampled
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }
}

impl NodalReduction for NodalMaxValue {
    fn initialize(&mut self) {
        self.value = f64::MIN;
        self.node = None;
    }

    fn execute(&mut self, node: NodeId, value: f64) {
        if value > self.value {
            self.value = value;
            self.node = Some(node);
        }
    }

    fn join(&mut self, other: &Self) {
        if other.value > self.value {
            self.value = other.value;
            self.node = other.node;
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
