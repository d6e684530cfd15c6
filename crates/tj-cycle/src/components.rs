//! Per-component relations used along the gas path.
//!
//! Each function is one station-to-station relation. The cycle pipeline and
//! the reference derivation call the same functions so the reference point
//! reproduces itself exactly.

use crate::error::DomainError;
use crate::gas::GasStream;
use tj_core::numeric::DENOMINATOR_EPS;

/// π_c = (1 + η_c·(τ_c − 1))^(γ/(γ − 1))
pub fn compressor_pressure_ratio(gas: &GasStream, eta_c: f64, tau_c: f64) -> f64 {
    (1.0 + eta_c * (tau_c - 1.0)).powf(gas.pressure_exponent())
}

/// Compressor exit total enthalpy from the ideal (isentropic) exit enthalpy.
pub fn compressor_outlet_enthalpy(ht_in: f64, ht_out_ideal: f64, eta_c: f64) -> f64 {
    ht_in + (ht_out_ideal - ht_in) / eta_c
}

/// Burner energy balance solved for the fuel-air ratio.
///
/// ```text
/// f = (τ_λ − τ_r·τ_c) / (h_PR·η_b/(c_pc·T₀) − τ_λ)
/// ```
pub fn fuel_air_ratio(
    tau_lambda: f64,
    tau_r: f64,
    tau_c: f64,
    h_pr: f64,
    eta_b: f64,
    cold: &GasStream,
    t0_k: f64,
) -> Result<f64, DomainError> {
    let denominator = h_pr * eta_b / (cold.cp * t0_k) - tau_lambda;
    if !(denominator > DENOMINATOR_EPS) {
        return Err(DomainError::FuelAirDenominator { value: denominator });
    }

    let f = (tau_lambda - tau_r * tau_c) / denominator;
    if !f.is_finite() {
        return Err(DomainError::NonFinite {
            what: "fuel-air ratio",
        });
    }
    if f <= 0.0 {
        return Err(DomainError::NoHeatAddition { fuel_air_ratio: f });
    }
    Ok(f)
}

/// Burner exit total enthalpy from a mass-weighted energy balance.
pub fn burner_outlet_enthalpy(
    w_air: f64,
    ht_in: f64,
    w_fuel: f64,
    heating_value: f64,
    eta_b: f64,
    w_out: f64,
) -> f64 {
    (w_air * ht_in + w_fuel * heating_value * eta_b) / w_out
}

/// Turbine temperature ratio that balances compressor work on the shaft.
///
/// ```text
/// τ_t = 1 − τ_r·(τ_c − 1) / (η_m·(1 + f)·τ_λ)
/// ```
pub fn turbine_temperature_ratio(tau_r: f64, tau_c: f64, tau_lambda: f64, f: f64, eta_m: f64) -> f64 {
    1.0 - tau_r * (tau_c - 1.0) / (eta_m * (1.0 + f) * tau_lambda)
}

/// π_t = (1 − (1 − τ_t)/η_t)^(γ_t/(γ_t − 1))
pub fn turbine_pressure_ratio(hot: &GasStream, eta_t: f64, tau_t: f64) -> f64 {
    (1.0 - (1.0 - tau_t) / eta_t).powf(hot.pressure_exponent())
}

/// Turbine exit total enthalpy: the actual drop is η_t times the ideal drop.
pub fn turbine_outlet_enthalpy(ht_in: f64, ht_out_ideal: f64, eta_t: f64) -> f64 {
    ht_in - eta_t * (ht_in - ht_out_ideal)
}

/// Duct total pressure after a fractional loss `dp` (typically < 0.02).
pub fn duct_outlet_pressure(pt_in: f64, dp: f64) -> f64 {
    (1.0 - dp) * pt_in
}

/// Isentropic expansion to the exit plane.
///
/// ```text
/// M₉ = sqrt( 2/(γ_t − 1) · ((P_t9/P₉)^((γ_t − 1)/γ_t) − 1) )
/// ```
pub fn exit_mach(hot: &GasStream, pt9_over_p9: f64) -> Result<f64, DomainError> {
    let radicand =
        2.0 / (hot.gamma - 1.0) * (pt9_over_p9.powf(1.0 / hot.pressure_exponent()) - 1.0);
    if !(radicand > 0.0) {
        return Err(DomainError::ExitMachRadicand { radicand });
    }
    Ok(radicand.sqrt())
}

/// Gross thrust estimate F_g = C_fg·ṁ·V_ideal/g_c.
pub fn nozzle_gross_thrust(c_fg: f64, w_in: f64, v_out_ideal: f64, gc: f64) -> f64 {
    c_fg * w_in * v_out_ideal / gc
}

/// Diffuser isentropic efficiency by the ratio method.
///
/// ```text
/// η_d = (τ_r·π_d^((γ − 1)/γ) − 1) / (τ_r − 1)
/// ```
///
/// Undefined for a static inlet (τ_r = 1).
pub fn diffuser_isentropic_efficiency(cold: &GasStream, tau_r: f64, pi_d: f64) -> Option<f64> {
    let rise = tau_r - 1.0;
    if rise.abs() <= DENOMINATOR_EPS {
        return None;
    }
    Some((tau_r * pi_d.powf(1.0 / cold.pressure_exponent()) - 1.0) / rise)
}

/// Station reference ratio (δ = P/P_ref or θ = T/T_ref).
pub fn reference_ratio(value: f64, reference: f64) -> f64 {
    value / reference
}

/// ṁ_c = ṁ·sqrt(θ)/δ
pub fn corrected_mass_flow(mdot: f64, delta: f64, theta: f64) -> f64 {
    mdot * theta.sqrt() / delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_core::units::constants::{P_STD_KPA, T_STD_K};

    const COLD: GasStream = GasStream::COLD_AIR;
    const HOT: GasStream = GasStream::HOT_PRODUCTS;

    #[test]
    fn compressor_ratio_matches_textbook_point() {
        let pi_c = compressor_pressure_ratio(&COLD, 0.8641, 2.0771);
        assert!((pi_c - 10.0).abs() < 1e-2);
    }

    #[test]
    fn compressor_enthalpy_agrees_with_pressure_ratio() {
        // An ideal rise of τ_c,s − 1 divided by η_c gives the actual rise.
        let cp = COLD.cp;
        let t_in = 288.15;
        let tau_c = 1.8;
        let eta = 0.86;
        let pi_c = compressor_pressure_ratio(&COLD, eta, tau_c);
        let t_ideal = t_in * pi_c.powf(1.0 / COLD.pressure_exponent());
        let ht_out = compressor_outlet_enthalpy(cp * t_in, cp * t_ideal, eta);
        assert!((ht_out / (cp * t_in) - tau_c).abs() < 1e-12);
    }

    #[test]
    fn fuel_air_ratio_closes_burner_balance() {
        let t0 = 216.7;
        let (tau_r, tau_c) = (1.8, 2.0771);
        let tt4 = 1800.0;
        let tau_lambda = HOT.cp * tt4 / (COLD.cp * t0);
        let f = fuel_air_ratio(tau_lambda, tau_r, tau_c, 42.8e6, 0.98, &COLD, t0).unwrap();

        let ht3 = COLD.cp * t0 * tau_r * tau_c;
        let ht4 = burner_outlet_enthalpy(1.0, ht3, f, 42.8e6, 0.98, 1.0 + f);
        assert!((ht4 - HOT.cp * tt4).abs() / (HOT.cp * tt4) < 1e-12);
    }

    #[test]
    fn fuel_air_ratio_guards_denominator() {
        // τ_λ larger than the available heat release term
        let err = fuel_air_ratio(500.0, 1.0, 1.0, 42.8e6, 0.98, &COLD, 288.15).unwrap_err();
        assert!(matches!(err, DomainError::FuelAirDenominator { .. }));
    }

    #[test]
    fn fuel_air_ratio_rejects_cooling_burner() {
        let err = fuel_air_ratio(2.0, 1.5, 2.0, 42.8e6, 0.98, &COLD, 288.15).unwrap_err();
        assert!(matches!(err, DomainError::NoHeatAddition { .. }));
    }

    #[test]
    fn turbine_relations_are_consistent() {
        let tau_t = 0.8155;
        let eta_t = 0.8947;
        let pi_t = turbine_pressure_ratio(&HOT, eta_t, tau_t);
        assert!(pi_t > 0.0 && pi_t < tau_t);

        let ht_in = HOT.cp * 1800.0;
        let ht_ideal = ht_in * pi_t.powf(1.0 / HOT.pressure_exponent());
        let ht_out = turbine_outlet_enthalpy(ht_in, ht_ideal, eta_t);
        assert!((ht_out / ht_in - tau_t).abs() < 1e-12);
    }

    #[test]
    fn turbine_work_matches_compressor_work() {
        let (tau_r, tau_c, tau_lambda, f, eta_m) = (1.8, 2.0771, 10.28, 0.0357, 0.99);
        let tau_t = turbine_temperature_ratio(tau_r, tau_c, tau_lambda, f, eta_m);
        // η_m·(1 + f)·τ_λ·(1 − τ_t) = τ_r·(τ_c − 1)
        let lhs = eta_m * (1.0 + f) * tau_lambda * (1.0 - tau_t);
        assert!((lhs - tau_r * (tau_c - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn exit_mach_requires_expansion() {
        assert!(matches!(
            exit_mach(&HOT, 0.9),
            Err(DomainError::ExitMachRadicand { .. })
        ));
        assert!(exit_mach(&HOT, 1.0).is_err());

        // Choked throat: P_t/P = ((γ+1)/2)^(γ/(γ−1)) gives M = 1
        let critical = ((HOT.gamma + 1.0) / 2.0).powf(HOT.pressure_exponent());
        assert!((exit_mach(&HOT, critical).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn duct_and_nozzle_helpers() {
        assert!((duct_outlet_pressure(100.0, 0.02) - 98.0).abs() < 1e-12);
        assert!((nozzle_gross_thrust(0.98, 50.0, 600.0, 1.0) - 29_400.0).abs() < 1e-9);
    }

    #[test]
    fn diffuser_efficiency_bounds() {
        assert_eq!(diffuser_isentropic_efficiency(&COLD, 1.0, 0.95), None);

        // Lossless diffuser is isentropic
        let eta = diffuser_isentropic_efficiency(&COLD, 1.8, 1.0).unwrap();
        assert!((eta - 1.0).abs() < 1e-12);

        let eta = diffuser_isentropic_efficiency(&COLD, 1.8, 0.87875).unwrap();
        assert!(eta > 0.9 && eta < 1.0);
    }

    #[test]
    fn corrected_flow_at_standard_day_is_physical_flow() {
        let delta = reference_ratio(P_STD_KPA, P_STD_KPA);
        let theta = reference_ratio(T_STD_K, T_STD_K);
        assert_eq!(corrected_mass_flow(50.0, delta, theta), 50.0);

        // Half the pressure doubles the corrected flow
        let delta = reference_ratio(0.5 * P_STD_KPA, P_STD_KPA);
        assert!((corrected_mass_flow(50.0, delta, theta) - 100.0).abs() < 1e-12);
    }
}
