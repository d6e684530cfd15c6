//! Off-design point evaluation.
//!
//! [`evaluate`] runs the whole station chain once (diffuser → compressor →
//! burner → turbine → nozzle) and returns one [`PointPerformance`] record.
//! Thrust, TSFC and the efficiencies are fields of that record, so nothing
//! re-derives the chain per metric.
//!
//! The turbine is held at its reference τ_t and π_t (choked turbine inlet and
//! nozzle throat); compressor temperature rise scales with T_t4/T_t2.

use crate::components::{
    burner_outlet_enthalpy, compressor_outlet_enthalpy, compressor_pressure_ratio,
    corrected_mass_flow, diffuser_isentropic_efficiency, exit_mach, fuel_air_ratio,
    reference_ratio,
};
use crate::gas::GasStream;
use crate::error::{CycleResult, DomainError};
use crate::inlet::{InletRecovery, diffuser_pressure_ratio, ram_ratios};
use crate::operating_point::OperatingPoint;
use crate::reference::ReferenceConstants;
use serde::Serialize;
use tj_core::numeric::{DENOMINATOR_EPS, checked_div, checked_sqrt, relative_difference};
use tj_core::units::constants::{GC_SI, P_STD_KPA, T_STD_K};
use tj_core::units::{Force, MassRate, Velocity, kgps, mps, newton};

/// Intermediate station quantities of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationState {
    pub tau_r: f64,
    pub pi_r: f64,
    pub recovery: InletRecovery,
    pub pi_d: f64,
    /// Diffuser isentropic efficiency; `None` for a static inlet
    pub diffuser_efficiency: Option<f64>,
    /// T_t2 (K)
    pub compressor_inlet_temperature_k: f64,
    pub tau_c: f64,
    pub pi_c: f64,
    pub tau_lambda: f64,
    /// Engine inlet air flow ṁ₀ (kg/s)
    pub mass_flow_kg_s: f64,
    /// ṁ₀·sqrt(θ₂)/δ₂ (kg/s)
    pub corrected_mass_flow_kg_s: f64,
    /// P_t9/P₉
    pub nozzle_pressure_ratio: f64,
    pub exit_mach: f64,
    /// T₉/T₀
    pub exit_temperature_ratio: f64,
    /// V₉/a₀
    pub exit_velocity_ratio: f64,
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointPerformance {
    pub point: OperatingPoint,
    pub stations: StationState,
    pub freestream_velocity_m_s: f64,
    pub exit_velocity_m_s: f64,
    pub fuel_air_ratio: f64,
    /// F/ṁ₀ (N·s/kg)
    pub specific_thrust_n_s_per_kg: f64,
    pub thrust_n: f64,
    /// S (kg/(N·s))
    pub tsfc_kg_per_n_s: f64,
    pub fuel_flow_kg_s: f64,
    pub thermal_efficiency: f64,
    pub propulsive_efficiency: f64,
    pub overall_efficiency: f64,
    pub shaft_speed_rpm: f64,
    /// N/sqrt(θ₂)
    pub corrected_shaft_speed_rpm: f64,
}

impl PointPerformance {
    pub fn thrust(&self) -> Force {
        newton(self.thrust_n)
    }

    pub fn mass_flow(&self) -> MassRate {
        kgps(self.stations.mass_flow_kg_s)
    }

    pub fn fuel_flow(&self) -> MassRate {
        kgps(self.fuel_flow_kg_s)
    }

    pub fn exit_velocity(&self) -> Velocity {
        mps(self.exit_velocity_m_s)
    }

    /// TSFC in mg/(N·s), the usual display unit.
    pub fn tsfc_mg_per_n_s(&self) -> f64 {
        self.tsfc_kg_per_n_s * 1e6
    }
}

/// Something that turns an operating point into performance.
///
/// The sweep driver is generic over this so alternative engine models can be
/// plugged in.
pub trait PointEvaluator: Send + Sync {
    fn evaluate(&self, point: &OperatingPoint) -> CycleResult<PointPerformance>;
}

impl PointEvaluator for ReferenceConstants {
    fn evaluate(&self, point: &OperatingPoint) -> CycleResult<PointPerformance> {
        evaluate(point, self)
    }
}

/// Largest relative mismatch tolerated between burner inflow and outflow enthalpy.
const ENERGY_BALANCE_TOL: f64 = 1e-9;

/// Close the burner energy balance per kg of air for the solved `f`.
///
/// The compressor exit enthalpy goes through the isentropic-efficiency
/// relation, so a π_c or f inconsistent with τ_c shows up here.
fn check_burner_balance(
    cold: &GasStream,
    hot: &GasStream,
    tt2: f64,
    pi_c: f64,
    tt4: f64,
    f: f64,
    reference: &ReferenceConstants,
) -> Result<(), DomainError> {
    let inputs = reference.inputs();
    let ht2 = cold.cp * tt2;
    let ht3_ideal = ht2 * pi_c.powf(1.0 / cold.pressure_exponent());
    let ht3 = compressor_outlet_enthalpy(ht2, ht3_ideal, inputs.compressor_efficiency);
    let ht4 = burner_outlet_enthalpy(
        1.0,
        ht3,
        f,
        inputs.fuel_heating_value_j_per_kg,
        inputs.burner_efficiency,
        1.0 + f,
    );

    let relative = relative_difference(ht4, hot.cp * tt4);
    if !(relative <= ENERGY_BALANCE_TOL) {
        return Err(DomainError::BurnerEnergyImbalance { relative });
    }
    Ok(())
}

/// Evaluate one operating point against the reference engine.
pub fn evaluate(point: &OperatingPoint, reference: &ReferenceConstants) -> CycleResult<PointPerformance> {
    point.validate()?;

    let inputs = reference.inputs();
    let design = reference.derived();
    let cold = &inputs.cold_gas;
    let hot = &inputs.hot_gas;

    let m0 = point.mach;
    let t0 = point.ambient_temperature_k;
    let p0 = point.ambient_pressure_kpa;
    let tt4 = point.turbine_inlet_temperature_k;
    let p0_over_p9 = point.exit_pressure_ratio;

    // 1-2: free stream
    let r_c = cold.gas_constant();
    let r_t = hot.gas_constant();
    let a0 = cold.speed_of_sound(t0);
    let v0 = a0 * m0;

    // 3-4: ram and diffuser
    let (tau_r, pi_r) = ram_ratios(cold, m0);
    let (recovery, pi_d) = diffuser_pressure_ratio(inputs.diffuser_max_pressure_ratio, m0);
    let diffuser_efficiency = diffuser_isentropic_efficiency(cold, tau_r, pi_d);

    // 5: compressor, scaled on T_t4/T_t2
    let tt2 = t0 * tau_r;
    let throttle = (tt4 / tt2) / (inputs.turbine_inlet_temperature_k / design.compressor_inlet_temperature_k);
    let tau_c = 1.0 + (inputs.compressor_temperature_ratio - 1.0) * throttle;
    let pi_c = compressor_pressure_ratio(cold, inputs.compressor_efficiency, tau_c);

    // 6: burner
    let tau_lambda = hot.cp * tt4 / (cold.cp * t0);
    let f = fuel_air_ratio(
        tau_lambda,
        tau_r,
        tau_c,
        inputs.fuel_heating_value_j_per_kg,
        inputs.burner_efficiency,
        cold,
        t0,
    )?;
    check_burner_balance(cold, hot, tt2, pi_c, tt4, f, reference)?;

    // 7: mass flow by similarity with the reference point
    let pressure_scale = (p0 * pi_r * pi_d * pi_c)
        / (inputs.ambient_pressure_kpa * design.pi_r * design.pi_d * design.pi_c);
    let mdot0 = inputs.mass_flow_kg_s * pressure_scale * (inputs.turbine_inlet_temperature_k / tt4).sqrt();

    let delta2 = reference_ratio(p0 * pi_r * pi_d, P_STD_KPA);
    let theta2 = reference_ratio(tt2, T_STD_K);
    let corrected_flow = corrected_mass_flow(mdot0, delta2, theta2);

    // 8-9: nozzle
    let pt9_over_p9 = p0_over_p9
        * pi_r
        * pi_d
        * pi_c
        * inputs.burner_pressure_ratio
        * design.pi_t
        * inputs.nozzle_pressure_ratio;
    let m9 = exit_mach(hot, pt9_over_p9)?;

    // 10: exit state
    let expansion = pt9_over_p9.powf(1.0 / hot.pressure_exponent());
    let t9_over_t0 = tau_lambda * design.tau_t * (cold.cp / hot.cp) / expansion;
    let v9_over_a0 = m9
        * checked_sqrt(hot.gamma * r_t * t9_over_t0 / (cold.gamma * r_c)).ok_or(DomainError::NonFinite {
            what: "exit velocity ratio",
        })?;
    let pressure_term = checked_div(t9_over_t0, v9_over_a0).ok_or(DomainError::NonFinite {
        what: "nozzle pressure thrust term",
    })?;

    let specific_thrust = a0 / GC_SI
        * ((1.0 + f) * v9_over_a0 - m0
            + (1.0 + f) * (r_t / r_c) * pressure_term * (1.0 - p0_over_p9) / cold.gamma);
    if !specific_thrust.is_finite() {
        return Err(DomainError::NonFinite {
            what: "specific thrust",
        }
        .into());
    }
    if specific_thrust <= DENOMINATOR_EPS {
        return Err(DomainError::NonPositiveThrust { specific_thrust }.into());
    }

    // 11: thrust, TSFC, efficiencies
    let thrust = specific_thrust * mdot0;
    let tsfc = f / specific_thrust;

    let kinetic_gain = a0 * a0 * ((1.0 + f) * v9_over_a0 * v9_over_a0 - m0 * m0);
    if kinetic_gain <= DENOMINATOR_EPS {
        return Err(DomainError::NoKineticEnergyGain { value: kinetic_gain }.into());
    }
    let thermal = kinetic_gain / (2.0 * GC_SI * f * inputs.fuel_heating_value_j_per_kg);
    let propulsive = 2.0 * GC_SI * v0 * specific_thrust / kinetic_gain;

    // Shaft speed from compressor work similarity
    let work_exponent = 1.0 / cold.pressure_exponent();
    let work_ratio = checked_div(
        pi_c.powf(work_exponent) - 1.0,
        design.pi_c.powf(work_exponent) - 1.0,
    )
    .ok_or(DomainError::NonFinite {
        what: "compressor work ratio",
    })?;
    let speed_ratio = (t0 * tau_r) / design.compressor_inlet_temperature_k * work_ratio;
    let shaft_speed = inputs.shaft_speed_rpm
        * checked_sqrt(speed_ratio).ok_or(DomainError::NonFinite { what: "shaft speed" })?;

    Ok(PointPerformance {
        point: *point,
        stations: StationState {
            tau_r,
            pi_r,
            recovery,
            pi_d,
            diffuser_efficiency,
            compressor_inlet_temperature_k: tt2,
            tau_c,
            pi_c,
            tau_lambda,
            mass_flow_kg_s: mdot0,
            corrected_mass_flow_kg_s: corrected_flow,
            nozzle_pressure_ratio: pt9_over_p9,
            exit_mach: m9,
            exit_temperature_ratio: t9_over_t0,
            exit_velocity_ratio: v9_over_a0,
        },
        freestream_velocity_m_s: v0,
        exit_velocity_m_s: v9_over_a0 * a0,
        fuel_air_ratio: f,
        specific_thrust_n_s_per_kg: specific_thrust,
        thrust_n: thrust,
        tsfc_kg_per_n_s: tsfc,
        fuel_flow_kg_s: f * mdot0,
        thermal_efficiency: thermal,
        propulsive_efficiency: propulsive,
        overall_efficiency: thermal * propulsive,
        shaft_speed_rpm: shaft_speed,
        corrected_shaft_speed_rpm: shaft_speed / theta2.sqrt(),
    })
}
