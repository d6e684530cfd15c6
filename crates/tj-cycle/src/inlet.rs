//! Free-stream ram recovery and the inlet pressure-recovery policy.

use crate::gas::GasStream;
use serde::Serialize;

/// Mach regime that selected the recovery branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecoveryRegime {
    /// M₀ <= 1
    Subsonic,
    /// 1 < M₀ < 5
    Supersonic,
    /// M₀ >= 5
    Hypersonic,
}

/// Ram recovery efficiency η_r together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InletRecovery {
    pub regime: RecoveryRegime,
    pub eta_r: f64,
}

/// Inlet pressure recovery η_r(M₀) (MIL-E-5008B shape).
///
/// ```text
/// M₀ <= 1      η_r = 1
/// 1 < M₀ < 5   η_r = 1 − 0.075·(M₀ − 1)^1.35
/// M₀ >= 5      η_r = 800/(M₀⁴ + 935)
/// ```
pub fn recovery(mach: f64) -> InletRecovery {
    if mach <= 1.0 {
        InletRecovery {
            regime: RecoveryRegime::Subsonic,
            eta_r: 1.0,
        }
    } else if mach < 5.0 {
        InletRecovery {
            regime: RecoveryRegime::Supersonic,
            eta_r: 1.0 - 0.075 * (mach - 1.0).powf(1.35),
        }
    } else {
        InletRecovery {
            regime: RecoveryRegime::Hypersonic,
            eta_r: 800.0 / (mach.powi(4) + 935.0),
        }
    }
}

/// Total-to-static ratios of the free stream: (τ_r, π_r).
pub fn ram_ratios(gas: &GasStream, mach: f64) -> (f64, f64) {
    let tau_r = 1.0 + 0.5 * (gas.gamma - 1.0) * mach * mach;
    let pi_r = tau_r.powf(gas.pressure_exponent());
    (tau_r, pi_r)
}

/// π_d = π_d,max · η_r(M₀)
pub fn diffuser_pressure_ratio(pi_d_max: f64, mach: f64) -> (InletRecovery, f64) {
    let rec = recovery(mach);
    (rec, pi_d_max * rec.eta_r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_core::relative_difference;

    #[test]
    fn regimes_are_selected_by_mach() {
        assert_eq!(recovery(0.0).regime, RecoveryRegime::Subsonic);
        assert_eq!(recovery(1.0).regime, RecoveryRegime::Subsonic);
        assert_eq!(recovery(1.0 + 1e-12).regime, RecoveryRegime::Supersonic);
        assert_eq!(recovery(4.999).regime, RecoveryRegime::Supersonic);
        assert_eq!(recovery(5.0).regime, RecoveryRegime::Hypersonic);
    }

    #[test]
    fn continuous_at_mach_one() {
        let below = recovery(1.0).eta_r;
        let above = recovery(1.0 + 1e-9).eta_r;
        assert!(relative_difference(below, above) < 1e-6);
    }

    #[test]
    fn branches_meet_at_mach_five() {
        // The two published curves meet to ~3.3e-4, not exactly.
        let below = recovery(5.0 - 1e-9).eta_r;
        let above = recovery(5.0).eta_r;
        assert!(relative_difference(below, above) < 5e-4);
    }

    #[test]
    fn ram_ratios_at_mach_two() {
        let (tau_r, pi_r) = ram_ratios(&GasStream::COLD_AIR, 2.0);
        assert!((tau_r - 1.8).abs() < 1e-12);
        assert!((pi_r - 7.824_449).abs() < 1e-5);
    }

    #[test]
    fn static_inlet_has_unit_ram_ratios() {
        let (tau_r, pi_r) = ram_ratios(&GasStream::COLD_AIR, 0.0);
        assert_eq!(tau_r, 1.0);
        assert_eq!(pi_r, 1.0);
        let (_, pi_d) = diffuser_pressure_ratio(0.95, 0.0);
        assert_eq!(pi_d, 0.95);
    }
}
