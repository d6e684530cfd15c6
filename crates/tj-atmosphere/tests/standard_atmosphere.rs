//! Integration tests for the standard atmosphere lookup.

use proptest::prelude::*;
use tj_atmosphere::{
    AtmosphereLayer, AtmosphereModel, MAX_ALTITUDE_KM, StandardAtmosphere, TROPOPAUSE_FT,
    geometric_to_geopotential_ft,
};
use tj_core::relative_difference;
use tj_units::convert::feet_to_km;

fn geopotential_km_for_geometric_ft(z_ft: f64) -> f64 {
    feet_to_km(geometric_to_geopotential_ft(z_ft))
}

#[test]
fn tropopause_reference_temperature() {
    let sample = StandardAtmosphere::new().sample(11.0).unwrap();
    assert!(
        (sample.temperature_k - 216.7).abs() < 1.0,
        "T(11 km) = {} K",
        sample.temperature_k
    );
    assert!((sample.pressure_kpa - 22.6).abs() < 0.2);
}

#[test]
fn continuous_across_tropopause() {
    let atm = StandardAtmosphere::new();
    let below = atm
        .sample(geopotential_km_for_geometric_ft(TROPOPAUSE_FT - 0.01))
        .unwrap();
    let above = atm
        .sample(geopotential_km_for_geometric_ft(TROPOPAUSE_FT + 0.01))
        .unwrap();

    assert_eq!(below.layer, AtmosphereLayer::Troposphere);
    assert_eq!(above.layer, AtmosphereLayer::Stratosphere);

    assert!(relative_difference(below.temperature_k, above.temperature_k) < 1e-3);
    assert!(relative_difference(below.pressure_kpa, above.pressure_kpa) < 1e-3);
    assert!(relative_difference(below.density_kg_m3, above.density_kg_m3) < 1e-3);
    assert!(relative_difference(below.speed_of_sound_m_s, above.speed_of_sound_m_s) < 1e-3);
}

#[test]
fn stratosphere_is_isothermal() {
    let atm = StandardAtmosphere::new();
    let a = atm.sample(12.0).unwrap();
    let b = atm.sample(18.0).unwrap();
    assert_eq!(a.temperature_k, b.temperature_k);
    assert_eq!(a.speed_of_sound_m_s, b.speed_of_sound_m_s);
    assert!(b.pressure_kpa < a.pressure_kpa);
}

#[test]
fn geometric_altitude_exceeds_geopotential() {
    let sample = StandardAtmosphere::new().sample(10.0).unwrap();
    assert!(sample.geometric_altitude_km > sample.geopotential_altitude_km);
    assert!(sample.geometric_altitude_km - 10.0 < 0.05);
}

proptest! {
    #[test]
    fn pressure_and_density_fall_with_altitude(h in 0.0_f64..15.0, dh in 0.01_f64..5.0) {
        let atm = StandardAtmosphere::new();
        let low = atm.sample(h).unwrap();
        let high = atm.sample(h + dh).unwrap();
        prop_assert!(high.pressure_kpa < low.pressure_kpa);
        prop_assert!(high.density_kg_m3 < low.density_kg_m3);
        prop_assert!(high.temperature_k <= low.temperature_k);
    }

    #[test]
    fn ideal_gas_law_holds(h in 0.0_f64..MAX_ALTITUDE_KM) {
        let s = StandardAtmosphere::new().sample(h).unwrap();
        // P = ρ R T with R ≈ 287 J/(kg·K)
        let r = s.pressure_kpa * 1e3 / (s.density_kg_m3 * s.temperature_k);
        prop_assert!((r - 287.05).abs() < 0.5, "R = {}", r);
    }
}
