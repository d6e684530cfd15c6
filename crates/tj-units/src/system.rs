//! Display unit systems for results leaving the core.

use crate::convert;
use crate::quantity::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system a caller wants results rendered in. The core always computes in SI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// K, kPa, km, N, kg/s, mg/(N·s)
    #[default]
    Si,
    /// °R, psia, ft, lbf, lbm/hr, lbm/(lbf·hr)
    Imperial,
}

impl UnitSystem {
    pub fn temperature(self, kelvin: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (kelvin, "K"),
            Self::Imperial => (convert::k_to_r(kelvin), "°R"),
        }
    }

    pub fn pressure(self, kpa: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (kpa, "kPa"),
            Self::Imperial => (convert::pa_to_psia(kpa * 1e3), "psia"),
        }
    }

    pub fn altitude(self, km: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (km, "km"),
            Self::Imperial => (convert::km_to_feet(km), "ft"),
        }
    }

    pub fn force(self, newtons: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (newtons, "N"),
            Self::Imperial => (convert::n_to_lbf(newtons), "lbf"),
        }
    }

    pub fn mass_rate(self, kg_s: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (kg_s, "kg/s"),
            Self::Imperial => (convert::kgs_to_lbhr(kg_s), "lbm/hr"),
        }
    }

    pub fn density(self, kg_m3: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (kg_m3, "kg/m³"),
            Self::Imperial => (kg_m3 / convert::KG_PER_M3_PER_SLUG_PER_FT3, "slug/ft³"),
        }
    }

    pub fn speed(self, m_s: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (m_s, "m/s"),
            Self::Imperial => (convert::meters_to_feet(m_s), "ft/s"),
        }
    }

    /// TSFC given in kg/(N·s).
    pub fn tsfc(self, kg_per_n_s: f64) -> (f64, &'static str) {
        match self {
            Self::Si => (kg_per_n_s * 1e6, "mg/(N·s)"),
            Self::Imperial => (convert::tsfc_si_to_imperial(kg_per_n_s), "lbm/(lbf·hr)"),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => write!(f, "si"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "si" | "metric" => Ok(Self::Si),
            "imperial" | "english" | "us" => Ok(Self::Imperial),
            other => Err(UnitError::ParseError(format!(
                "Unknown unit system '{}' (expected 'si' or 'imperial')",
                other
            ))),
        }
    }
}
