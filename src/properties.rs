use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds a snapshot of the material properties at the current evaluation point
///
/// The host framework owns the material property storage and refreshes it for
/// every (node, integration point) pair it visits. Kernels receive the data
/// as an immutable snapshot valid only for the current evaluation call; they
/// never keep or mutate it.
///
/// The shapes below use `np` for the number of fluid phases, `nc` for the
/// number of fluid components, and `nv` for the number of porous-flow
/// variables (the dense indices handed out by the dictator).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PropertiesSnapshot {
    /// Porosity φ
    pub porosity: f64,

    /// Derivative ∂φ/∂vⱼ -- (nv)
    pub dporosity_dvar: Vec<f64>,

    /// Derivative ∂φ/∂(∇vⱼ) -- (nv) spatial gradients
    pub dporosity_dgradvar: Vec<Vector>,

    /// Fluid density ρ per phase -- (np)
    pub density: Vec<f64>,

    /// Derivative ∂ρ/∂vⱼ -- (np, nv)
    pub ddensity_dvar: Vec<Vec<f64>>,

    /// Fluid saturation sl per phase -- (np)
    pub saturation: Vec<f64>,

    /// Derivative ∂sl/∂vⱼ -- (np, nv)
    pub dsaturation_dvar: Vec<Vec<f64>>,

    /// Mass fraction χ per phase and component -- (np, nc)
    pub mass_frac: Vec<Vec<f64>>,

    /// Derivative ∂χ/∂vⱼ -- (np, nc, nv)
    pub dmass_frac_dvar: Vec<Vec<Vec<f64>>>,

    /// Volumetric strain rate dεᵥ/dt of the porous skeleton
    pub strain_rate: f64,

    /// Derivative ∂(dεᵥ/dt)/∂(∇vⱼ) -- (nv) spatial gradients
    pub dstrain_rate_dvar: Vec<Vector>,
}

impl PropertiesSnapshot {
    /// Allocates a zero-filled snapshot with consistent shapes
    pub fn new(ndim: usize, n_phases: usize, n_components: usize, n_variables: usize) -> Self {
        PropertiesSnapshot {
            porosity: 0.0,
            dporosity_dvar: vec![0.0; n_variables],
            dporosity_dgradvar: vec![Vector::new(ndim); n_variables],
            density: vec![0.0; n_phases],
            ddensity_dvar: vec![vec![0.0; n_variables]; n_phases],
            saturation: vec![0.0; n_phases],
            dsaturation_dvar: vec![vec![0.0; n_variables]; n_phases],
            mass_frac: vec![vec![0.0; n_components]; n_phases],
            dmass_frac_dvar: vec![vec![vec![0.0; n_variables]; n_components]; n_phases],
            strain_rate: 0.0,
            dstrain_rate_dvar: vec![Vector::new(ndim); n_variables],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
