use crate::{Dictator, ParamMassVolumetricExpansion, PropertiesSnapshot, ShapeData, StrError};
use russell_lab::vec_inner;

/// Implements the mass source due to the volumetric expansion of the skeleton
///
/// For a chosen fluid component `c`, the residual at an integration point is
///
/// ```text
/// R = W · M · φ · ε̇ᵥ
///
/// M = Σ_p ρ_p · sl_p · χ_p[c]    (sum over fluid phases)
/// ```
///
/// where `W` is the test function value, `φ` is the porosity, and `ε̇ᵥ` is
/// the volumetric strain rate of the porous skeleton.
///
/// The Jacobian with respect to an unknown `v` collects two contributions:
/// the derivative through the strain rate (which depends on `v` through its
/// gradient) and the product-rule derivative of `M · φ`, the latter only
/// when the test and trial indices coincide. Unknowns outside the dense set
/// managed by the dictator contribute exactly zero.
pub struct MassVolumetricExpansion<'a> {
    /// Index of the fluid component carried by this kernel
    fluid_component: usize,

    /// Global number of the variable this kernel acts on
    variable: usize,

    /// Read-only bookkeeper of porous-flow variables
    dictator: &'a Dictator,
}

impl<'a> MassVolumetricExpansion<'a> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `param` -- kernel parameters (fluid component index)
    /// * `variable` -- the global number of the variable this kernel acts on
    /// * `dictator` -- the bookkeeper of porous-flow variables
    pub fn new(
        param: &ParamMassVolumetricExpansion,
        variable: usize,
        dictator: &'a Dictator,
    ) -> Result<Self, StrError> {
        if param.fluid_component >= dictator.n_components() {
            return Err("fluid component index must be smaller than the number of fluid components");
        }
        Ok(MassVolumetricExpansion {
            fluid_component: param.fluid_component,
            variable,
            dictator,
        })
    }

    /// Calculates the residual contribution at the current evaluation point
    pub fn residual(&self, shape: &ShapeData, props: &PropertiesSnapshot) -> Result<f64, StrError> {
        let mass = self.mass(props)?;
        Ok(shape.test * mass * props.porosity * props.strain_rate)
    }

    /// Calculates the diagonal Jacobian contribution (own variable)
    pub fn jacobian(&self, shape: &ShapeData, props: &PropertiesSnapshot) -> Result<f64, StrError> {
        Ok(self.d_mass(self.variable, shape, props)? + self.d_vol(self.variable, shape, props)?)
    }

    /// Calculates the Jacobian contribution with respect to the unknown `jvar`
    pub fn off_diag_jacobian(
        &self,
        jvar: usize,
        shape: &ShapeData,
        props: &PropertiesSnapshot,
    ) -> Result<f64, StrError> {
        Ok(self.d_mass(jvar, shape, props)? + self.d_vol(jvar, shape, props)?)
    }

    /// Sums ρ·sl·χ over phases (component mass per unit pore volume)
    fn mass(&self, props: &PropertiesSnapshot) -> Result<f64, StrError> {
        let n_phases = self.check_phases(props)?;
        let c = self.fluid_component;
        let mut mass = 0.0;
        for p in 0..n_phases {
            mass += props.density[p] * props.saturation[p] * props.mass_frac[p][c];
        }
        Ok(mass)
    }

    /// Calculates the derivative through the strain rate term
    fn d_vol(
        &self,
        jvar: usize,
        shape: &ShapeData,
        props: &PropertiesSnapshot,
    ) -> Result<f64, StrError> {
        let pvar = match self.dictator.variable_index(jvar) {
            Some(pvar) => pvar,
            None => return Ok(0.0),
        };
        let mass = self.mass(props)?;
        self.check_derivatives(props)?;
        let d_strain_rate = vec_inner(&props.dstrain_rate_dvar[pvar], &shape.grad_trial);
        Ok(shape.test * mass * props.porosity * d_strain_rate)
    }

    /// Calculates the product-rule derivative of the (mass × porosity) term
    fn d_mass(
        &self,
        jvar: usize,
        shape: &ShapeData,
        props: &PropertiesSnapshot,
    ) -> Result<f64, StrError> {
        let pvar = match self.dictator.variable_index(jvar) {
            Some(pvar) => pvar,
            None => return Ok(0.0),
        };
        let n_phases = self.check_phases(props)?;
        self.check_derivatives(props)?;
        let c = self.fluid_component;

        // contribution of the gradient-coupled porosity derivative; the
        // trial gradient is sampled at the test node because the porosity
        // is stored nodally
        let d_porosity = vec_inner(&props.dporosity_dgradvar[pvar], &shape.grad_trial_at_node);
        let mut d_mass = 0.0;
        for p in 0..n_phases {
            d_mass += props.density[p] * props.saturation[p] * props.mass_frac[p][c] * d_porosity;
        }

        if shape.i != shape.j {
            return Ok(shape.test * d_mass * props.strain_rate);
        }

        for p in 0..n_phases {
            let (rho, sl, chi) = (props.density[p], props.saturation[p], props.mass_frac[p][c]);
            d_mass += props.ddensity_dvar[p][pvar] * sl * chi * props.porosity;
            d_mass += rho * props.dsaturation_dvar[p][pvar] * chi * props.porosity;
            d_mass += rho * sl * props.dmass_frac_dvar[p][c][pvar] * props.porosity;
            d_mass += rho * sl * chi * props.dporosity_dvar[pvar];
        }
        Ok(shape.test * d_mass * props.strain_rate)
    }

    /// Checks the phase/component consistency of a snapshot
    fn check_phases(&self, props: &PropertiesSnapshot) -> Result<usize, StrError> {
        let n_phases = props.density.len();
        if props.saturation.len() != n_phases {
            return Err("density and saturation must have the same number of phases");
        }
        for p in 0..n_phases {
            if self.fluid_component >= props.mass_frac[p].len() {
                return Err(
                    "fluid component index must be smaller than the number of mass fractions per phase",
                );
            }
        }
        Ok(n_phases)
    }

    /// Checks that the derivative arrays cover the dense set of porous-flow variables
    fn check_derivatives(&self, props: &PropertiesSnapshot) -> Result<(), StrError> {
        let n_phases = props.density.len();
        let n_variables = self.dictator.n_variables();
        let c = self.fluid_component;
        if props.dporosity_dvar.len() < n_variables
            || props.dporosity_dgradvar.len() < n_variables
            || props.dstrain_rate_dvar.len() < n_variables
        {
            return Err("derivative arrays must cover all porous-flow variables");
        }
        if props.ddensity_dvar.len() != n_phases
            || props.dsaturation_dvar.len() != n_phases
            || props.dmass_frac_dvar.len() != n_phases
        {
            return Err("derivative arrays must have one entry per phase");
        }
        for p in 0..n_phases {
            if props.ddensity_dvar[p].len() < n_variables
                || props.dsaturation_dvar[p].len() < n_variables
                || props.dmass_frac_dvar[p].len() <= c
                || props.dmass_frac_dvar[p][c].len() < n_variables
            {
                return Err("derivative arrays must cover all porous-flow variables");
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
