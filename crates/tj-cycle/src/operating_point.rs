//! Flight condition and throttle setting for one evaluation.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};

/// One off-design operating point, in SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Free-stream Mach number M₀
    pub mach: f64,
    /// T₀ (K)
    pub ambient_temperature_k: f64,
    /// P₀ (kPa)
    pub ambient_pressure_kpa: f64,
    /// T_t4 (K)
    pub turbine_inlet_temperature_k: f64,
    /// P₀/P₉; 1.0 is a perfectly expanded nozzle
    pub exit_pressure_ratio: f64,
}

impl OperatingPoint {
    /// Build and validate an operating point.
    pub fn new(
        mach: f64,
        ambient_temperature_k: f64,
        ambient_pressure_kpa: f64,
        turbine_inlet_temperature_k: f64,
        exit_pressure_ratio: f64,
    ) -> CycleResult<Self> {
        let point = Self {
            mach,
            ambient_temperature_k,
            ambient_pressure_kpa,
            turbine_inlet_temperature_k,
            exit_pressure_ratio,
        };
        point.validate()?;
        Ok(point)
    }

    /// Same condition at another Mach number (unvalidated).
    pub fn with_mach(self, mach: f64) -> Self {
        Self { mach, ..self }
    }

    /// Check the input contract. Runs before any formula is evaluated.
    pub fn validate(&self) -> CycleResult<()> {
        let fields = [
            ("mach", self.mach),
            ("ambient_temperature_k", self.ambient_temperature_k),
            ("ambient_pressure_kpa", self.ambient_pressure_kpa),
            ("turbine_inlet_temperature_k", self.turbine_inlet_temperature_k),
            ("exit_pressure_ratio", self.exit_pressure_ratio),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(contract(field, value, "must be finite"));
            }
        }

        if self.mach < 0.0 {
            return Err(contract("mach", self.mach, "must be >= 0"));
        }
        if self.ambient_temperature_k <= 0.0 {
            return Err(contract("ambient_temperature_k", self.ambient_temperature_k, "must be > 0"));
        }
        if self.ambient_pressure_kpa <= 0.0 {
            return Err(contract("ambient_pressure_kpa", self.ambient_pressure_kpa, "must be > 0"));
        }
        if self.turbine_inlet_temperature_k <= self.ambient_temperature_k {
            return Err(contract(
                "turbine_inlet_temperature_k",
                self.turbine_inlet_temperature_k,
                "must exceed ambient temperature",
            ));
        }
        if !(self.exit_pressure_ratio > 0.0 && self.exit_pressure_ratio <= 1.0) {
            return Err(contract("exit_pressure_ratio", self.exit_pressure_ratio, "must lie in (0, 1]"));
        }
        Ok(())
    }
}

fn contract(field: &'static str, value: f64, reason: &'static str) -> CycleError {
    CycleError::InputContract { field, value, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_point() {
        let p = OperatingPoint::new(0.8, 229.8, 30.8, 1670.0, 0.955).unwrap();
        assert_eq!(p.with_mach(1.5).mach, 1.5);
        assert_eq!(p.with_mach(1.5).ambient_pressure_kpa, 30.8);
    }

    #[test]
    fn rejects_each_contract_violation() {
        let cases = [
            (OperatingPoint::new(-0.1, 229.8, 30.8, 1670.0, 0.955), "mach"),
            (OperatingPoint::new(0.8, 0.0, 30.8, 1670.0, 0.955), "ambient_temperature_k"),
            (OperatingPoint::new(0.8, 229.8, -1.0, 1670.0, 0.955), "ambient_pressure_kpa"),
            (OperatingPoint::new(0.8, 229.8, 30.8, 229.8, 0.955), "turbine_inlet_temperature_k"),
            (OperatingPoint::new(0.8, 229.8, 30.8, 1670.0, 0.0), "exit_pressure_ratio"),
            (OperatingPoint::new(0.8, 229.8, 30.8, 1670.0, 1.01), "exit_pressure_ratio"),
            (OperatingPoint::new(f64::NAN, 229.8, 30.8, 1670.0, 0.955), "mach"),
        ];
        for (result, expected) in cases {
            match result {
                Err(CycleError::InputContract { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected contract error on {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserializes_from_flow_mapping() {
        let json = r#"{
            "mach": 0.0,
            "ambient_temperature_k": 288.15,
            "ambient_pressure_kpa": 101.325,
            "turbine_inlet_temperature_k": 1400.0,
            "exit_pressure_ratio": 1.0
        }"#;
        let p: OperatingPoint = serde_yaml::from_str(json).unwrap();
        assert!(p.validate().is_ok());
    }
}
