//! Rendering of results for the terminal and for export.

use serde::Serialize;
use std::fmt::Write as _;
use tj_atmosphere::AtmosphereSample;
use tj_cycle::{PointPerformance, ReferenceConstants};
use tj_sweep::PerformanceCurve;
use tj_units::UnitSystem;

pub fn point_text(perf: &PointPerformance, units: UnitSystem) -> String {
    let p = &perf.point;
    let st = &perf.stations;
    let (t0, t_unit) = units.temperature(p.ambient_temperature_k);
    let (p0, p_unit) = units.pressure(p.ambient_pressure_kpa);
    let (tt4, _) = units.temperature(p.turbine_inlet_temperature_k);
    let (thrust, f_unit) = units.force(perf.thrust_n);
    let (tsfc, s_unit) = units.tsfc(perf.tsfc_kg_per_n_s);
    let (mdot, m_unit) = units.mass_rate(st.mass_flow_kg_s);
    let (mdot_c, _) = units.mass_rate(st.corrected_mass_flow_kg_s);
    let (fuel, _) = units.mass_rate(perf.fuel_flow_kg_s);
    let (v9, v_unit) = units.speed(perf.exit_velocity_m_s);

    let mut out = String::new();
    let _ = writeln!(out, "Operating point:");
    let _ = writeln!(out, "  M0   = {:.3}", p.mach);
    let _ = writeln!(out, "  T0   = {t0:.2} {t_unit}");
    let _ = writeln!(out, "  P0   = {p0:.3} {p_unit}");
    let _ = writeln!(out, "  Tt4  = {tt4:.1} {t_unit}");
    let _ = writeln!(out, "  P0/P9 = {:.4}", p.exit_pressure_ratio);
    let _ = writeln!(out, "Stations:");
    let _ = writeln!(
        out,
        "  eta_r = {:.4} ({:?})  pi_d = {:.4}",
        st.recovery.eta_r, st.recovery.regime, st.pi_d
    );
    let _ = writeln!(out, "  tau_c = {:.4}  pi_c = {:.3}", st.tau_c, st.pi_c);
    let _ = writeln!(out, "  f     = {:.5}", perf.fuel_air_ratio);
    let _ = writeln!(out, "  mdot0 = {mdot:.3} {m_unit} (corrected {mdot_c:.3})");
    let _ = writeln!(out, "  M9    = {:.4}  V9 = {v9:.1} {v_unit}", st.exit_mach);
    let _ = writeln!(out, "Performance:");
    let _ = writeln!(out, "  Thrust     = {thrust:.1} {f_unit}");
    let _ = writeln!(out, "  TSFC       = {tsfc:.4} {s_unit}");
    let _ = writeln!(out, "  Fuel flow  = {fuel:.4} {m_unit}");
    let _ = writeln!(
        out,
        "  eta_T = {:.4}  eta_P = {:.4}  eta_O = {:.4}",
        perf.thermal_efficiency, perf.propulsive_efficiency, perf.overall_efficiency
    );
    let _ = writeln!(
        out,
        "  N = {:.0} rpm  (corrected {:.0} rpm)",
        perf.shaft_speed_rpm, perf.corrected_shaft_speed_rpm
    );
    out
}

pub fn atmosphere_text(sample: &AtmosphereSample, units: UnitSystem) -> String {
    let (h, h_unit) = units.altitude(sample.geopotential_altitude_km);
    let (z, _) = units.altitude(sample.geometric_altitude_km);
    let (t, t_unit) = units.temperature(sample.temperature_k);
    let (p, p_unit) = units.pressure(sample.pressure_kpa);
    let (rho, rho_unit) = units.density(sample.density_kg_m3);
    let (a, a_unit) = units.speed(sample.speed_of_sound_m_s);

    let mut out = String::new();
    let _ = writeln!(out, "Altitude     = {h:.3} {h_unit} (geometric {z:.3})");
    let _ = writeln!(out, "Layer        = {:?}", sample.layer);
    let _ = writeln!(out, "Temperature  = {t:.2} {t_unit}");
    let _ = writeln!(out, "Pressure     = {p:.4} {p_unit}");
    let _ = writeln!(out, "Density      = {rho:.6} {rho_unit}");
    let _ = writeln!(out, "Speed of sound = {a:.2} {a_unit}");
    out
}

pub fn reference_text(reference: &ReferenceConstants) -> String {
    let i = reference.inputs();
    let d = reference.derived();
    let mut out = String::new();
    let _ = writeln!(out, "Reference point:");
    let _ = writeln!(
        out,
        "  M0R = {}  T0R = {} K  P0R = {} kPa  Tt4R = {} K  P0/P9 = {}",
        i.mach,
        i.ambient_temperature_k,
        i.ambient_pressure_kpa,
        i.turbine_inlet_temperature_k,
        i.exit_pressure_ratio
    );
    let _ = writeln!(out, "  mdotR = {} kg/s  NR = {} rpm", i.mass_flow_kg_s, i.shaft_speed_rpm);
    let _ = writeln!(out, "Derived:");
    let _ = writeln!(out, "  tau_rR = {:.5}  pi_rR = {:.5}", d.tau_r, d.pi_r);
    let _ = writeln!(out, "  pi_dR  = {:.5}  pi_cR = {:.5}", d.pi_d, d.pi_c);
    let _ = writeln!(out, "  tau_lambdaR = {:.5}  fR = {:.6}", d.tau_lambda, d.fuel_air_ratio);
    let _ = writeln!(out, "  tau_t  = {:.5}  pi_t  = {:.5}", d.tau_t, d.pi_t);
    out
}

/// Curve arrays in display units, with gaps as `null`.
#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub mach: Vec<f64>,
    pub thrust: Vec<Option<f64>>,
    pub thrust_unit: &'static str,
    pub tsfc: Vec<Option<f64>>,
    pub tsfc_unit: &'static str,
    pub failures: Vec<FailureReport>,
}

#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub index: usize,
    pub mach: f64,
    pub error: String,
}

impl CurveReport {
    pub fn new(curve: &PerformanceCurve, units: UnitSystem) -> Self {
        let thrust_unit = units.force(0.0).1;
        let tsfc_unit = units.tsfc(0.0).1;
        Self {
            mach: curve.mach.clone(),
            thrust: curve
                .thrust_n()
                .into_iter()
                .map(|v| v.map(|f| units.force(f).0))
                .collect(),
            thrust_unit,
            tsfc: curve
                .tsfc_kg_per_n_s()
                .into_iter()
                .map(|v| v.map(|s| units.tsfc(s).0))
                .collect(),
            tsfc_unit,
            failures: curve
                .failures
                .iter()
                .map(|f| FailureReport {
                    index: f.index,
                    mach: f.mach,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }

    /// One row per Mach sample; failed samples leave thrust and TSFC empty.
    pub fn to_csv(&self) -> String {
        let mut out = format!("mach,thrust_{},tsfc_{}\n", self.thrust_unit, self.tsfc_unit);
        for ((m, f), s) in self.mach.iter().zip(&self.thrust).zip(&self.tsfc) {
            let cell = |v: &Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
            let _ = writeln!(out, "{m:.6},{},{}", cell(f), cell(s));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_cycle::{OperatingPoint, ReferenceInputs};
    use tj_sweep::{FailurePolicy, SweepDefinition, SweepOptions, sweep};

    fn engine() -> ReferenceConstants {
        ReferenceConstants::derive(ReferenceInputs::default()).unwrap()
    }

    #[test]
    fn csv_has_one_row_per_sample_and_blank_gaps() {
        let def = SweepDefinition::mach(0.0, 4.0, 5).unwrap();
        let fixed = OperatingPoint::new(0.0, 216.7, 19.4, 1000.0, 0.955).unwrap();
        let options = SweepOptions {
            failure_policy: FailurePolicy::RecordGaps,
            parallel: false,
        };
        let curve = sweep(&def, &fixed, &engine(), options).unwrap();
        let csv = CurveReport::new(&curve, UnitSystem::Si).to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "mach,thrust_N,tsfc_mg/(N·s)");
        assert_eq!(lines[5], "4.000000,,");
        assert!(lines[1].starts_with("0.000000,"));
    }

    #[test]
    fn json_report_marks_gaps_as_null() {
        let def = SweepDefinition::mach(0.0, 4.0, 5).unwrap();
        let fixed = OperatingPoint::new(0.0, 216.7, 19.4, 1000.0, 0.955).unwrap();
        let options = SweepOptions {
            failure_policy: FailurePolicy::RecordGaps,
            parallel: true,
        };
        let curve = sweep(&def, &fixed, &engine(), options).unwrap();
        let json = serde_json::to_value(CurveReport::new(&curve, UnitSystem::Imperial)).unwrap();

        assert_eq!(json["thrust_unit"], "lbf");
        assert!(json["thrust"][4].is_null());
        assert_eq!(json["failures"][0]["index"], 4);
    }

    #[test]
    fn point_text_mentions_key_results() {
        let r = engine();
        let perf = tj_cycle::evaluate(&r.reference_point(), &r).unwrap();
        let text = point_text(&perf, UnitSystem::Si);
        assert!(text.contains("Thrust"));
        assert!(text.contains("mg/(N·s)"));
        assert!(reference_text(&r).contains("pi_cR"));
    }
}
