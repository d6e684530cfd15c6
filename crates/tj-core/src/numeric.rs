/// Floating point type used throughout the workspace
pub type Real = f64;

/// Smallest magnitude accepted for a denominator before it is treated as zero.
pub const DENOMINATOR_EPS: Real = 1e-12;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
pub fn relative_difference(a: Real, b: Real) -> Real {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 { 0.0 } else { (a - b).abs() / scale }
}

/// Square root that refuses negative radicands instead of producing NaN.
pub fn checked_sqrt(v: Real) -> Option<Real> {
    if v >= 0.0 && v.is_finite() {
        Some(v.sqrt())
    } else {
        None
    }
}

/// Division that refuses (near-)zero denominators instead of producing ±∞.
pub fn checked_div(num: Real, den: Real) -> Option<Real> {
    if den.abs() <= DENOMINATOR_EPS || !den.is_finite() {
        None
    } else {
        Some(num / den)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
