//! Calorically perfect gas streams.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};
use tj_core::units::constants::GC_SI;

/// Constant-property gas for one side of the engine (cold: inlet/compressor,
/// hot: burner/turbine/nozzle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasStream {
    /// Ratio of specific heats γ
    pub gamma: f64,
    /// Specific heat at constant pressure c_p (J/(kg·K))
    pub cp: f64,
}

impl GasStream {
    pub const COLD_AIR: GasStream = GasStream {
        gamma: 1.4,
        cp: 1004.0,
    };

    pub const HOT_PRODUCTS: GasStream = GasStream {
        gamma: 1.3,
        cp: 1239.0,
    };

    /// R = ((γ − 1)/γ)·c_p
    pub fn gas_constant(&self) -> f64 {
        (self.gamma - 1.0) / self.gamma * self.cp
    }

    /// Isentropic exponent γ/(γ − 1) linking pressure and temperature ratios.
    pub fn pressure_exponent(&self) -> f64 {
        self.gamma / (self.gamma - 1.0)
    }

    /// a = sqrt(γ·R·g_c·T)
    pub fn speed_of_sound(&self, temperature_k: f64) -> f64 {
        (self.gamma * self.gas_constant() * GC_SI * temperature_k).sqrt()
    }

    pub(crate) fn validate(&self, what: &str) -> CycleResult<()> {
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(CycleError::config(format!(
                "{what}: gamma must be > 1, got {}",
                self.gamma
            )));
        }
        if !(self.cp.is_finite() && self.cp > 0.0) {
            return Err(CycleError::config(format!(
                "{what}: cp must be > 0, got {}",
                self.cp
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_properties() {
        let air = GasStream::COLD_AIR;
        assert!((air.gas_constant() - 286.857).abs() < 1e-3);
        assert!((air.pressure_exponent() - 3.5).abs() < 1e-12);
        assert!((air.speed_of_sound(288.15) - 340.2).abs() < 0.1);
    }

    #[test]
    fn validate_rejects_bad_gamma_and_cp() {
        assert!(GasStream { gamma: 1.0, cp: 1004.0 }.validate("cold").is_err());
        assert!(GasStream { gamma: 1.4, cp: -1.0 }.validate("cold").is_err());
        assert!(GasStream::HOT_PRODUCTS.validate("hot").is_ok());
    }
}
