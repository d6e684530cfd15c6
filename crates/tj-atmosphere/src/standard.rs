//! Two-layer standard atmosphere (troposphere + isothermal lower stratosphere).
//!
//! ## Model
//!
//! The lookup runs in English units and converts back to SI at the end:
//!
//! ```text
//! h  = altitude [ft] (geopotential)
//! z  = r0·h / (r0 − h)                     geometric altitude
//!
//! z <  36 000 ft:  T = T0 + a1·z
//!                  P = P0·(T/T0)^(−g0/(R·a1))
//!                  ρ = ρ0·(T/T0)^(−(g0/(R·a1) + 1))
//!
//! z >= 36 000 ft:  T = 389.99 °R
//!                  P = Pb·exp(−g0·(z − zb)/(R·T))
//!                  ρ = ρb·exp(−g0·(z − zb)/(R·T))
//!
//! a = sqrt(1.4·P/ρ)
//! ```
//!
//! `Pb`, `ρb` are the troposphere relations evaluated at the boundary, so P and
//! ρ are continuous there and T steps by under 0.2 °R.
//!
//! Valid from sea level to [`MAX_ALTITUDE_KM`]; anything outside is an error.

use crate::error::{AtmosphereError, AtmosphereResult};
use serde::Serialize;
use tj_core::units::{Density, Length, Pressure, Temperature, Velocity, kg_per_m3, km, kpa, k, mps};
use tj_units::convert;

/// Sea-level temperature (°R)
const T0_R: f64 = 518.69;
/// Sea-level pressure (lbf/ft²)
const P0_PSF: f64 = 2116.22;
/// Sea-level density (slug/ft³)
const RHO0_SLUG_FT3: f64 = 2.3769e-3;
/// Troposphere lapse rate (°R/ft)
const LAPSE_R_PER_FT: f64 = -3.57e-3;
/// Isothermal layer temperature (°R)
const STRATOSPHERE_T_R: f64 = 389.99;
/// Standard gravity (ft/s²)
const G0_FT_S2: f64 = 32.174;
/// Gas constant for air (ft·lbf/(slug·°R))
const R_AIR: f64 = 1716.56;
/// Ratio of specific heats for air
const GAMMA_AIR: f64 = 1.4;
/// Earth radius used for the geometric correction (ft)
const EARTH_RADIUS_FT: f64 = 20_855_531.0;

/// Tropopause, as a geometric altitude (ft).
pub const TROPOPAUSE_FT: f64 = 36_000.0;

/// Top of the isothermal layer (geopotential km). Above it the two-layer
/// model no longer describes the real atmosphere.
pub const MAX_ALTITUDE_KM: f64 = 20.0;

/// Which branch of the model produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AtmosphereLayer {
    /// Linear lapse, geometric altitude strictly below the tropopause.
    Troposphere,
    /// Isothermal, geometric altitude at or above the tropopause.
    Stratosphere,
}

/// Ambient state at one altitude, in SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphereSample {
    pub geopotential_altitude_km: f64,
    pub geometric_altitude_km: f64,
    pub temperature_k: f64,
    pub pressure_kpa: f64,
    pub density_kg_m3: f64,
    pub speed_of_sound_m_s: f64,
    pub layer: AtmosphereLayer,
}

impl AtmosphereSample {
    pub fn temperature(&self) -> Temperature {
        k(self.temperature_k)
    }

    pub fn pressure(&self) -> Pressure {
        kpa(self.pressure_kpa)
    }

    pub fn density(&self) -> Density {
        kg_per_m3(self.density_kg_m3)
    }

    pub fn speed_of_sound(&self) -> Velocity {
        mps(self.speed_of_sound_m_s)
    }

    pub fn geometric_altitude(&self) -> Length {
        km(self.geometric_altitude_km)
    }
}

/// Altitude → ambient conditions.
pub trait AtmosphereModel: Send + Sync {
    /// Sample the atmosphere at a geopotential altitude in km (must be >= 0).
    fn sample(&self, altitude_km: f64) -> AtmosphereResult<AtmosphereSample>;
}

/// The two-layer standard atmosphere described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAtmosphere;

impl StandardAtmosphere {
    pub fn new() -> Self {
        Self
    }
}

pub fn geopotential_to_geometric_ft(h_ft: f64) -> f64 {
    EARTH_RADIUS_FT * h_ft / (EARTH_RADIUS_FT - h_ft)
}

pub fn geometric_to_geopotential_ft(z_ft: f64) -> f64 {
    EARTH_RADIUS_FT * z_ft / (EARTH_RADIUS_FT + z_ft)
}

/// Temperature (°R), pressure (psf) and density (slug/ft³) at geometric altitude `z_ft`.
fn layer_state(z_ft: f64) -> (AtmosphereLayer, f64, f64, f64) {
    let exponent = -G0_FT_S2 / (R_AIR * LAPSE_R_PER_FT);
    let troposphere = |z: f64| {
        let t = T0_R + LAPSE_R_PER_FT * z;
        let theta = t / T0_R;
        (t, P0_PSF * theta.powf(exponent), RHO0_SLUG_FT3 * theta.powf(exponent - 1.0))
    };

    if z_ft < TROPOPAUSE_FT {
        let (t, p, rho) = troposphere(z_ft);
        (AtmosphereLayer::Troposphere, t, p, rho)
    } else {
        let (_, p_b, rho_b) = troposphere(TROPOPAUSE_FT);
        let decay = (-G0_FT_S2 * (z_ft - TROPOPAUSE_FT) / (R_AIR * STRATOSPHERE_T_R)).exp();
        (
            AtmosphereLayer::Stratosphere,
            STRATOSPHERE_T_R,
            p_b * decay,
            rho_b * decay,
        )
    }
}

impl AtmosphereModel for StandardAtmosphere {
    fn sample(&self, altitude_km: f64) -> AtmosphereResult<AtmosphereSample> {
        if !altitude_km.is_finite() {
            return Err(AtmosphereError::NonFinite { altitude_km });
        }
        if altitude_km < 0.0 {
            return Err(AtmosphereError::NegativeAltitude { altitude_km });
        }

        if altitude_km > MAX_ALTITUDE_KM {
            return Err(AtmosphereError::OutOfRange { altitude_km });
        }

        let h_ft = convert::km_to_feet(altitude_km);
        let z_ft = geopotential_to_geometric_ft(h_ft);

        let (layer, t_r, p_psf, rho_slug) = layer_state(z_ft);
        let a_fps = (GAMMA_AIR * p_psf / rho_slug).sqrt();

        Ok(AtmosphereSample {
            geopotential_altitude_km: altitude_km,
            geometric_altitude_km: convert::feet_to_km(z_ft),
            temperature_k: convert::r_to_k(t_r),
            pressure_kpa: convert::psf_to_kpa(p_psf),
            density_kg_m3: convert::slug_per_ft3_to_kg_per_m3(rho_slug),
            speed_of_sound_m_s: convert::fps_to_mps(a_fps),
            layer,
        })
    }
}
