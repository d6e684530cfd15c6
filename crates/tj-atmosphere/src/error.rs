//! Atmosphere lookup errors.

use thiserror::Error;

pub type AtmosphereResult<T> = Result<T, AtmosphereError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    /// Altitudes below sea level are outside the model.
    #[error("Altitude must be >= 0 km, got {altitude_km}")]
    NegativeAltitude { altitude_km: f64 },

    #[error("Non-finite altitude: {altitude_km}")]
    NonFinite { altitude_km: f64 },

    /// Above the top of the isothermal layer.
    #[error("Altitude {altitude_km} km is above the model ceiling of 20 km")]
    OutOfRange { altitude_km: f64 },
}
