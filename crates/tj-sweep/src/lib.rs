//! tj-sweep: Mach sweeps over the cycle analysis.
//!
//! A [`SweepDefinition`] fixes the Mach samples; [`sweep`] evaluates every
//! sample with the remaining operating-point fields held constant and returns
//! a [`PerformanceCurve`] in ascending Mach order.

pub mod definition;
pub mod error;
pub mod executor;

pub use definition::SweepDefinition;
pub use error::{SweepError, SweepResult};
pub use executor::{FailurePolicy, PerformanceCurve, PointFailure, SweepOptions, sweep, sweep_cancellable};
