//! tj-cycle: single-spool turbojet cycle analysis.
//!
//! A validated [`ReferenceConstants`] is built once per engine configuration and
//! shared read-only; [`evaluate`] maps one [`OperatingPoint`] to a
//! [`PointPerformance`] record.
//!
//! ```
//! use tj_cycle::{OperatingPoint, ReferenceConstants, ReferenceInputs, evaluate};
//!
//! let engine = ReferenceConstants::derive(ReferenceInputs::default())?;
//! let point = OperatingPoint::new(0.8, 229.8, 30.8, 1670.0, 0.955)?;
//! let perf = evaluate(&point, &engine)?;
//! assert!(perf.thrust_n > 0.0);
//! # Ok::<(), tj_cycle::CycleError>(())
//! ```

pub mod analysis;
pub mod components;
pub mod error;
pub mod gas;
pub mod inlet;
pub mod operating_point;
pub mod reference;

pub use analysis::{PointEvaluator, PointPerformance, StationState, evaluate};
pub use error::{CycleError, CycleResult, DomainError};
pub use gas::GasStream;
pub use inlet::{InletRecovery, RecoveryRegime};
pub use operating_point::OperatingPoint;
pub use reference::{DerivedReference, ReferenceConstants, ReferenceInputs};
