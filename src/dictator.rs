use crate::{ParamDictator, StrError};
use std::fmt;

/// Maps global unknown numbers to the dense set of porous-flow variables
///
/// Many kernels need to know whether a perturbed unknown belongs to the
/// porous-flow problem and, if so, which column of the derivative arrays
/// corresponds to it. The dictator holds this mapping together with the
/// number of fluid phases and components. It is allocated once, shared by
/// reference with every kernel, and only ever queried.
pub struct Dictator {
    /// Number of fluid phases
    n_phases: usize,

    /// Number of fluid components
    n_components: usize,

    /// Global numbers of the porous-flow variables; the position in this
    /// list is the dense (local) index used by the derivative arrays
    variables: Vec<usize>,
}

impl Dictator {
    /// Allocates a new instance
    pub fn new(param: &ParamDictator) -> Result<Self, StrError> {
        if param.n_phases < 1 {
            return Err("number of fluid phases must be at least one");
        }
        if param.n_components < 1 {
            return Err("number of fluid components must be at least one");
        }
        for (i, var) in param.variables.iter().enumerate() {
            if param.variables[..i].contains(var) {
                return Err("porous-flow variable numbers must be unique");
            }
        }
        Ok(Dictator {
            n_phases: param.n_phases,
            n_components: param.n_components,
            variables: param.variables.clone(),
        })
    }

    /// Returns the number of fluid phases
    pub fn n_phases(&self) -> usize {
        self.n_phases
    }

    /// Returns the number of fluid components
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Returns the number of porous-flow variables
    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    /// Tells whether a global unknown number belongs to the porous-flow problem
    pub fn is_porous_flow_variable(&self, var: usize) -> bool {
        self.variables.contains(&var)
    }

    /// Returns the dense index of a global unknown number, if it is a porous-flow variable
    pub fn variable_index(&self, var: usize) -> Option<usize> {
        self.variables.iter().position(|&v| v == var)
    }
}

impl fmt::Display for Dictator {
    /// Generates a string with the variable mapping
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "phases = {}, components = {}",
            self.n_phases, self.n_components
        )?;
        for (index, var) in self.variables.iter().enumerate() {
            writeln!(f, "variable {} → {}", var, index)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Dictator;
    use crate::{ParamDictator, StrError};

    #[test]
    fn captures_wrong_input() {
        assert_eq!(
            Dictator::new(&ParamDictator {
                n_phases: 0,
                n_components: 1,
                variables: vec![0],
            })
            .err(),
            Some("number of fluid phases must be at least one")
        );
        assert_eq!(
            Dictator::new(&ParamDictator {
                n_phases: 1,
                n_components: 0,
                variables: vec![0],
            })
            .err(),
            Some("number of fluid components must be at least one")
        );
        assert_eq!(
            Dictator::new(&ParamDictator {
                n_phases: 1,
                n_components: 1,
                variables: vec![3, 5, 3],
            })
            .err(),
            Some("porous-flow variable numbers must be unique")
        );
    }

    #[test]
    fn queries_work() -> Result<(), StrError> {
        let dictator = Dictator::new(&ParamDictator {
            n_phases: 2,
            n_components: 3,
            variables: vec![4, 7, 2],
        })?;
        assert_eq!(dictator.n_phases(), 2);
        assert_eq!(dictator.n_components(), 3);
        assert_eq!(dictator.n_variables(), 3);
        assert_eq!(dictator.is_porous_flow_variable(7), true);
        assert_eq!(dictator.is_porous_flow_variable(5), false);
        assert_eq!(dictator.variable_index(4), Some(0));
        assert_eq!(dictator.variable_index(7), Some(1));
        assert_eq!(dictator.variable_index(2), Some(2));
        assert_eq!(dictator.variable_index(0), None);
        Ok(())
    }

    #[test]
    fn display_works() -> Result<(), StrError> {
        let dictator = Dictator::new(&ParamDictator {
            n_phases: 1,
            n_components: 2,
            variables: vec![9, 1],
        })?;
        assert_eq!(
            format!("{}", dictator),
            "phases = 1, components = 2\n\
             variable 9 → 0\n\
             variable 1 → 1\n"
        );
        Ok(())
    }
}
