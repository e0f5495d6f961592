use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Parameters for the dictator (bookkeeper of porous-flow variables)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamDictator {
    pub n_phases: usize,       // number of fluid phases
    pub n_components: usize,   // number of fluid components
    pub variables: Vec<usize>, // global numbers of the porous-flow variables (dense order)
}

/// Parameters for the mass volumetric expansion kernel
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamMassVolumetricExpansion {
    /// Index of the fluid component carried by this kernel
    #[serde(default)]
    pub fluid_component: usize,
}

/// Holds all parameters needed to allocate the porous-flow objects
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamPorousFlow {
    pub dictator: ParamDictator,
    pub mass_volumetric_expansion: ParamMassVolumetricExpansion,
}

impl ParamPorousFlow {
    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let param = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
