//! tj-atmosphere: standard atmosphere for ambient-condition lookup.
//!
//! Maps an altitude to ambient temperature, pressure, density and speed of
//! sound. Independent of any engine state; callers typically feed the result
//! into an operating point as T₀/P₀.
//!
//! # Example
//!
//! ```
//! use tj_atmosphere::{AtmosphereModel, StandardAtmosphere};
//!
//! let sample = StandardAtmosphere::new().sample(11.0).unwrap();
//! assert!((sample.temperature_k - 216.7).abs() < 1.0);
//! ```

pub mod error;
pub mod standard;

pub use error::{AtmosphereError, AtmosphereResult};
pub use standard::{
    AtmosphereLayer, AtmosphereModel, AtmosphereSample, StandardAtmosphere,
    geometric_to_geopotential_ft, geopotential_to_geometric_ft, MAX_ALTITUDE_KM, TROPOPAUSE_FT,
};
