//! SI quantity aliases and constructors shared by the workspace.

use uom::si::f64::{
    Force as UomForce, Length as UomLength, MassDensity as UomMassDensity,
    MassRate as UomMassRate, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Force = UomForce;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

pub mod constants {
    /// Newton's-law proportionality constant; unity in SI.
    pub const GC_SI: f64 = 1.0;

    /// Sea-level standard temperature used for corrected quantities (θ = T / T_std).
    pub const T_STD_K: f64 = 288.15;

    /// Sea-level standard pressure used for corrected quantities (δ = P / P_std).
    pub const P_STD_KPA: f64 = 101.325;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

    #[test]
    fn constructors_smoke() {
        let _t = k(300.0);
        let _mdot = kgps(1.2);
        let _rho = kg_per_m3(1.225);
        let _v = mps(340.0);
        let _f = newton(1.0e4);
    }

    #[test]
    fn kilo_constructors_scale() {
        assert!((kpa(101.325).get::<pascal>() - 101_325.0).abs() < 1e-9);
        assert!((km(1.0).value - 1_000.0).abs() < 1e-12);
        assert!((k(constants::T_STD_K).get::<kelvin>() - 288.15).abs() < 1e-12);
    }
}
