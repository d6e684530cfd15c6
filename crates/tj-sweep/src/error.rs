use thiserror::Error;
use tj_cycle::CycleError;

pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid sweep configuration: {0}")]
    InvalidConfiguration(String),

    /// First failing sample under [`crate::FailurePolicy::Abort`].
    #[error("Evaluation failed at point {index} (M0 = {mach}): {source}")]
    PointFailed {
        index: usize,
        mach: f64,
        source: CycleError,
    },

    #[error("Sweep cancelled")]
    Cancelled,
}
