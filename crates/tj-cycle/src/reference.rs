//! Reference (design-point) engine state.
//!
//! Off-design evaluation scales every operating point from one calibrated
//! reference condition. [`ReferenceInputs`] holds the configured numbers;
//! [`ReferenceConstants::derive`] validates them once and precomputes the
//! reference-point ratios so every later evaluation can share the result
//! read-only.

use crate::components::{
    compressor_pressure_ratio, fuel_air_ratio, turbine_pressure_ratio, turbine_temperature_ratio,
};
use crate::error::{CycleError, CycleResult};
use crate::gas::GasStream;
use crate::inlet::{InletRecovery, diffuser_pressure_ratio, ram_ratios};
use crate::operating_point::OperatingPoint;
use serde::{Deserialize, Serialize};

/// Configured reference engine. Missing fields in a config file fall back to
/// the built-in engine returned by [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceInputs {
    pub mach: f64,
    pub ambient_temperature_k: f64,
    pub ambient_pressure_kpa: f64,
    pub turbine_inlet_temperature_k: f64,
    /// P₀/P₉ at the reference point
    pub exit_pressure_ratio: f64,

    /// τ_cR
    pub compressor_temperature_ratio: f64,
    pub compressor_efficiency: f64,
    /// π_d,max, multiplied by η_r(M₀) for the installed diffuser ratio
    pub diffuser_max_pressure_ratio: f64,
    pub burner_pressure_ratio: f64,
    pub nozzle_pressure_ratio: f64,
    pub burner_efficiency: f64,
    pub turbine_efficiency: f64,
    pub mechanical_efficiency: f64,

    pub cold_gas: GasStream,
    pub hot_gas: GasStream,
    /// h_PR (J/kg)
    pub fuel_heating_value_j_per_kg: f64,

    pub mass_flow_kg_s: f64,
    pub shaft_speed_rpm: f64,
}

impl Default for ReferenceInputs {
    fn default() -> Self {
        Self {
            mach: 2.0,
            ambient_temperature_k: 216.7,
            ambient_pressure_kpa: 19.4,
            turbine_inlet_temperature_k: 1800.0,
            exit_pressure_ratio: 0.955,
            compressor_temperature_ratio: 2.0771,
            compressor_efficiency: 0.8641,
            diffuser_max_pressure_ratio: 0.95,
            burner_pressure_ratio: 0.94,
            nozzle_pressure_ratio: 0.98,
            burner_efficiency: 0.98,
            turbine_efficiency: 0.8947,
            mechanical_efficiency: 0.99,
            cold_gas: GasStream::COLD_AIR,
            hot_gas: GasStream::HOT_PRODUCTS,
            fuel_heating_value_j_per_kg: 42.8e6,
            mass_flow_kg_s: 50.0,
            shaft_speed_rpm: 10_000.0,
        }
    }
}

/// Ratios computed once at the reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedReference {
    pub tau_r: f64,
    pub pi_r: f64,
    pub recovery: InletRecovery,
    pub pi_d: f64,
    pub pi_c: f64,
    pub tau_lambda: f64,
    pub fuel_air_ratio: f64,
    /// Turbine temperature ratio, held fixed off-design (choked nozzle/turbine)
    pub tau_t: f64,
    pub pi_t: f64,
    /// T_t2R (K)
    pub compressor_inlet_temperature_k: f64,
}

/// Validated, immutable reference engine shared by every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceConstants {
    inputs: ReferenceInputs,
    derived: DerivedReference,
}

impl ReferenceConstants {
    /// Validate the configured engine and derive the reference-point ratios.
    pub fn derive(inputs: ReferenceInputs) -> CycleResult<Self> {
        validate_inputs(&inputs)?;

        let cold = &inputs.cold_gas;
        let hot = &inputs.hot_gas;
        let t0 = inputs.ambient_temperature_k;

        let (tau_r, pi_r) = ram_ratios(cold, inputs.mach);
        let (recovery, pi_d) = diffuser_pressure_ratio(inputs.diffuser_max_pressure_ratio, inputs.mach);

        let tau_c = inputs.compressor_temperature_ratio;
        let pi_c = compressor_pressure_ratio(cold, inputs.compressor_efficiency, tau_c);
        if !(pi_c.is_finite() && pi_c > 1.0) {
            return Err(CycleError::config(format!(
                "reference compressor pressure ratio must be > 1, got {pi_c}"
            )));
        }

        let tau_lambda = hot.cp * inputs.turbine_inlet_temperature_k / (cold.cp * t0);
        let f = fuel_air_ratio(
            tau_lambda,
            tau_r,
            tau_c,
            inputs.fuel_heating_value_j_per_kg,
            inputs.burner_efficiency,
            cold,
            t0,
        )
        .map_err(|e| CycleError::config(format!("reference fuel-air ratio: {e}")))?;

        let tau_t = turbine_temperature_ratio(tau_r, tau_c, tau_lambda, f, inputs.mechanical_efficiency);
        if !(tau_t > 0.0 && tau_t < 1.0) {
            return Err(CycleError::config(format!(
                "turbine temperature ratio must lie in (0, 1), got {tau_t}"
            )));
        }

        // Base of the power must stay positive or π_t is NaN.
        let pi_t = turbine_pressure_ratio(hot, inputs.turbine_efficiency, tau_t);
        if !(pi_t > 0.0 && pi_t < 1.0) {
            return Err(CycleError::config(format!(
                "turbine pressure ratio must lie in (0, 1), got {pi_t}"
            )));
        }

        let derived = DerivedReference {
            tau_r,
            pi_r,
            recovery,
            pi_d,
            pi_c,
            tau_lambda,
            fuel_air_ratio: f,
            tau_t,
            pi_t,
            compressor_inlet_temperature_k: t0 * tau_r,
        };

        Ok(Self { inputs, derived })
    }

    pub fn inputs(&self) -> &ReferenceInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &DerivedReference {
        &self.derived
    }

    /// The reference condition as an operating point.
    pub fn reference_point(&self) -> OperatingPoint {
        OperatingPoint {
            mach: self.inputs.mach,
            ambient_temperature_k: self.inputs.ambient_temperature_k,
            ambient_pressure_kpa: self.inputs.ambient_pressure_kpa,
            turbine_inlet_temperature_k: self.inputs.turbine_inlet_temperature_k,
            exit_pressure_ratio: self.inputs.exit_pressure_ratio,
        }
    }
}

fn validate_inputs(inputs: &ReferenceInputs) -> CycleResult<()> {
    let finite = [
        ("mach", inputs.mach),
        ("ambient_temperature_k", inputs.ambient_temperature_k),
        ("ambient_pressure_kpa", inputs.ambient_pressure_kpa),
        ("turbine_inlet_temperature_k", inputs.turbine_inlet_temperature_k),
        ("exit_pressure_ratio", inputs.exit_pressure_ratio),
        ("compressor_temperature_ratio", inputs.compressor_temperature_ratio),
        ("diffuser_max_pressure_ratio", inputs.diffuser_max_pressure_ratio),
        ("burner_pressure_ratio", inputs.burner_pressure_ratio),
        ("nozzle_pressure_ratio", inputs.nozzle_pressure_ratio),
        ("fuel_heating_value_j_per_kg", inputs.fuel_heating_value_j_per_kg),
        ("mass_flow_kg_s", inputs.mass_flow_kg_s),
        ("shaft_speed_rpm", inputs.shaft_speed_rpm),
    ];
    for (name, value) in finite {
        if !value.is_finite() {
            return Err(CycleError::config(format!("{name} is not finite ({value})")));
        }
    }

    inputs.cold_gas.validate("cold_gas")?;
    inputs.hot_gas.validate("hot_gas")?;

    let efficiencies = [
        ("compressor_efficiency", inputs.compressor_efficiency),
        ("burner_efficiency", inputs.burner_efficiency),
        ("turbine_efficiency", inputs.turbine_efficiency),
        ("mechanical_efficiency", inputs.mechanical_efficiency),
    ];
    for (name, eta) in efficiencies {
        if !(eta > 0.0 && eta <= 1.0) {
            return Err(CycleError::config(format!("{name} must lie in (0, 1], got {eta}")));
        }
    }

    let pressure_ratios = [
        ("diffuser_max_pressure_ratio", inputs.diffuser_max_pressure_ratio),
        ("burner_pressure_ratio", inputs.burner_pressure_ratio),
        ("nozzle_pressure_ratio", inputs.nozzle_pressure_ratio),
        ("exit_pressure_ratio", inputs.exit_pressure_ratio),
    ];
    for (name, pi) in pressure_ratios {
        if !(pi > 0.0 && pi <= 1.0) {
            return Err(CycleError::config(format!("{name} must lie in (0, 1], got {pi}")));
        }
    }

    if inputs.mach < 0.0 {
        return Err(CycleError::config(format!("reference mach must be >= 0, got {}", inputs.mach)));
    }
    if inputs.ambient_temperature_k <= 0.0 || inputs.ambient_pressure_kpa <= 0.0 {
        return Err(CycleError::config("reference ambient temperature and pressure must be > 0"));
    }
    if inputs.turbine_inlet_temperature_k <= inputs.ambient_temperature_k {
        return Err(CycleError::config(format!(
            "reference turbine inlet temperature {} K must exceed ambient {} K",
            inputs.turbine_inlet_temperature_k, inputs.ambient_temperature_k
        )));
    }
    if inputs.compressor_temperature_ratio <= 1.0 {
        return Err(CycleError::config(format!(
            "compressor_temperature_ratio must be > 1, got {}",
            inputs.compressor_temperature_ratio
        )));
    }
    if inputs.fuel_heating_value_j_per_kg <= 0.0 {
        return Err(CycleError::config("fuel_heating_value_j_per_kg must be > 0"));
    }
    if inputs.mass_flow_kg_s <= 0.0 {
        return Err(CycleError::config("mass_flow_kg_s must be > 0"));
    }
    if inputs.shaft_speed_rpm <= 0.0 {
        return Err(CycleError::config("shaft_speed_rpm must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ReferenceConstants {
        ReferenceConstants::derive(ReferenceInputs::default()).unwrap()
    }

    #[test]
    fn default_engine_derives() {
        let r = builtin();
        let d = r.derived();
        assert!((d.tau_r - 1.8).abs() < 1e-12);
        assert!((d.pi_r - 7.8244).abs() < 1e-3);
        assert!((d.pi_d - 0.87875).abs() < 1e-4);
        assert!((d.pi_c - 10.0).abs() < 1e-2);
        assert!((d.fuel_air_ratio - 0.035674).abs() < 1e-5);
        assert!((d.tau_t - 0.81553).abs() < 1e-4);
        assert!((d.pi_t - 0.36768).abs() < 1e-4);
        assert!((d.compressor_inlet_temperature_k - 390.06).abs() < 1e-9);
    }

    #[test]
    fn reference_point_mirrors_inputs() {
        let r = builtin();
        let p = r.reference_point();
        assert_eq!(p.mach, 2.0);
        assert_eq!(p.turbine_inlet_temperature_k, 1800.0);
        assert_eq!(p.exit_pressure_ratio, 0.955);
    }

    #[test]
    fn rejects_efficiency_out_of_range() {
        let inputs = ReferenceInputs {
            turbine_efficiency: 1.2,
            ..Default::default()
        };
        let err = ReferenceConstants::derive(inputs).unwrap_err();
        assert!(matches!(err, CycleError::Configuration { .. }));
        assert!(err.to_string().contains("turbine_efficiency"));
    }

    #[test]
    fn rejects_compressor_without_rise() {
        let inputs = ReferenceInputs {
            compressor_temperature_ratio: 1.0,
            ..Default::default()
        };
        assert!(ReferenceConstants::derive(inputs).is_err());
    }

    #[test]
    fn rejects_cold_turbine_inlet() {
        let inputs = ReferenceInputs {
            turbine_inlet_temperature_k: 200.0,
            ..Default::default()
        };
        assert!(ReferenceConstants::derive(inputs).is_err());
    }

    #[test]
    fn rejects_burner_without_heat_addition() {
        // T_t4R below the compressor exit temperature
        let inputs = ReferenceInputs {
            turbine_inlet_temperature_k: 500.0,
            ..Default::default()
        };
        let err = ReferenceConstants::derive(inputs).unwrap_err();
        assert!(err.to_string().contains("fuel-air"));
    }

    #[test]
    fn rejects_turbine_that_cannot_expand() {
        let inputs = ReferenceInputs {
            turbine_efficiency: 0.15,
            ..Default::default()
        };
        let err = ReferenceConstants::derive(inputs).unwrap_err();
        assert!(err.to_string().contains("turbine pressure ratio"));
    }

    #[test]
    fn rejects_non_finite_and_bad_gas() {
        let inputs = ReferenceInputs {
            mass_flow_kg_s: f64::NAN,
            ..Default::default()
        };
        assert!(ReferenceConstants::derive(inputs).is_err());

        let inputs = ReferenceInputs {
            hot_gas: GasStream { gamma: 0.9, cp: 1239.0 },
            ..Default::default()
        };
        assert!(ReferenceConstants::derive(inputs).is_err());
    }
}
