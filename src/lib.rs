//! Pflow implements porous-flow physics objects that plug into a host finite
//! element framework. The host owns the mesh, the integration loops, and the
//! assembly of global vectors and matrices; the objects here only evaluate
//! local contributions (residuals, Jacobians, nodal reductions) when called.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Identifies a mesh node
pub type NodeId = usize;

mod dictator;
mod mass_volumetric_expansion;
mod nodal_max_value;
mod parameters;
mod properties;
mod shape_data;
pub use crate::dictator::*;
pub use crate::mass_volumetric_expansion::*;
pub use crate::nodal_max_value::*;
pub use crate::parameters::*;
pub use crate::properties::*;
pub use crate::shape_data::*;
