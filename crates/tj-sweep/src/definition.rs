//! Mach sample generation.

use crate::error::{SweepError, SweepResult};
use std::fmt;

/// Evenly spaced Mach samples, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl SweepDefinition {
    /// Sweep Mach from `low` to `high` with `resolution` samples.
    pub fn mach(low: f64, high: f64, resolution: usize) -> SweepResult<Self> {
        if !(low.is_finite() && high.is_finite()) {
            return Err(SweepError::InvalidConfiguration(format!(
                "Mach bounds must be finite (got {low}, {high})"
            )));
        }
        if resolution < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }
        if low < 0.0 {
            return Err(SweepError::InvalidConfiguration(format!(
                "Lower Mach bound must be >= 0 (got {low})"
            )));
        }
        if low >= high {
            return Err(SweepError::InvalidConfiguration(format!(
                "Lower Mach bound must be below upper bound (got {low} >= {high})"
            )));
        }

        Ok(Self {
            start: low,
            end: high,
            num_points: resolution,
        })
    }

    pub fn generate_points(&self) -> Vec<f64> {
        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(self.start + i as f64 * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mach sweep from {} to {} ({} points)",
            self.start, self.end, self.num_points
        )
    }
}
