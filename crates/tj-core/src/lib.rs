//! tj-core: shared foundation for the turbojet workspace.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float guards)

pub mod numeric;
pub mod units;

pub use numeric::*;
pub use units::*;
