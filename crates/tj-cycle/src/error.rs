//! Error types for cycle analysis.

use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

/// A derived quantity left the domain where its formula is defined.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// h_PR·η_b/(c_pc·T₀) − τ_λ is (near) zero or negative.
    #[error("fuel-air ratio denominator is not positive ({value})")]
    FuelAirDenominator { value: f64 },

    /// Burner exit enthalpy does not exceed compressor exit enthalpy.
    #[error("no heat addition: fuel-air ratio {fuel_air_ratio} is not positive")]
    NoHeatAddition { fuel_air_ratio: f64 },

    /// Nozzle total-to-static pressure ratio too small to expand the flow.
    #[error("exit Mach radicand is not positive ({radicand})")]
    ExitMachRadicand { radicand: f64 },

    /// Ram drag meets or exceeds gross thrust, so TSFC is undefined.
    #[error("specific thrust is not positive ({specific_thrust} N·s/kg)")]
    NonPositiveThrust { specific_thrust: f64 },

    /// Exhaust leaves with no more kinetic energy than the inflow brought in.
    #[error("no kinetic energy gain across the engine ({value})")]
    NoKineticEnergyGain { value: f64 },

    /// Burner outflow enthalpy disagrees with c_pt·T_t4 for the solved f.
    #[error("burner energy balance does not close (relative mismatch {relative})")]
    BurnerEnergyImbalance { relative: f64 },

    #[error("non-finite intermediate value for {what}")]
    NonFinite { what: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// An operating-point field is outside its valid domain.
    #[error("Invalid operating point: {field} = {value} ({reason})")]
    InputContract {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Reference constants are internally inconsistent.
    #[error("Invalid reference configuration: {what}")]
    Configuration { what: String },
}

impl CycleError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        CycleError::Configuration { what: what.into() }
    }
}
