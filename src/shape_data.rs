use russell_lab::Vector;

/// Holds the test/trial shape function data for the current evaluation
///
/// The host framework fills this structure while looping over the local
/// test index `i`, the local trial index `j`, and the integration points.
#[derive(Clone, Debug)]
pub struct ShapeData {
    /// Local index of the test function (node)
    pub i: usize,

    /// Local index of the trial function (node)
    pub j: usize,

    /// Test function value at the integration point
    pub test: f64,

    /// Gradient of the trial function at the integration point
    pub grad_trial: Vector,

    /// Gradient of the trial function sampled at the test node
    ///
    /// Needed because some properties (e.g. porosity) are stored at nodes
    /// while their gradient-coupled derivatives are contracted there.
    pub grad_trial_at_node: Vector,
}

impl ShapeData {
    /// Allocates a zero-filled instance
    pub fn new(ndim: usize) -> Self {
        ShapeData {
            i: 0,
            j: 0,
            test: 0.0,
            grad_trial: Vector::new(ndim),
            grad_trial_at_node: Vector::new(ndim),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ShapeData;

    #[test]
    fn new_works() {
        let shape = ShapeData::new(3);
        assert_eq!(shape.i, 0);
        assert_eq!(shape.j, 0);
        assert_eq!(shape.test, 0.0);
        assert_eq!(shape.grad_trial.dim(), 3);
        assert_eq!(shape.grad_trial_at_node.dim(), 3);
    }
}
