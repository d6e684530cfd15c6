//! Sweep execution.
//!
//! Connects a [`SweepDefinition`] with a [`PointEvaluator`] to produce the
//! parallel Mach / thrust / TSFC arrays used for plotting. Each sample is an
//! independent pure evaluation, so the parallel path fans out on rayon without
//! any locking and still returns samples in ascending Mach order.

use crate::definition::SweepDefinition;
use crate::error::{SweepError, SweepResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tj_cycle::{CycleError, OperatingPoint, PointEvaluator, PointPerformance};
use tracing::{debug, warn};

/// What to do when one Mach sample hits a domain error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop and report the first failing sample.
    #[default]
    Abort,
    /// Leave a gap for the failing sample and keep going.
    RecordGaps,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    pub failure_policy: FailurePolicy,
    /// Evaluate samples on the rayon pool.
    pub parallel: bool,
}

/// A sample that failed under [`FailurePolicy::RecordGaps`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointFailure {
    pub index: usize,
    pub mach: f64,
    pub error: CycleError,
}

/// Result of a Mach sweep.
#[derive(Debug, Clone)]
pub struct PerformanceCurve {
    /// Mach samples in ascending order
    pub mach: Vec<f64>,
    /// One entry per Mach sample; `None` marks a recorded gap
    pub samples: Vec<Option<PointPerformance>>,
    pub failures: Vec<PointFailure>,
}

impl PerformanceCurve {
    pub fn len(&self) -> usize {
        self.mach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }

    pub fn num_successful(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every sample evaluated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Net thrust per sample (N), aligned with [`Self::mach`].
    pub fn thrust_n(&self) -> Vec<Option<f64>> {
        self.samples
            .iter()
            .map(|s| s.as_ref().map(|p| p.thrust_n))
            .collect()
    }

    /// TSFC per sample (kg/(N·s)), aligned with [`Self::mach`].
    pub fn tsfc_kg_per_n_s(&self) -> Vec<Option<f64>> {
        self.samples
            .iter()
            .map(|s| s.as_ref().map(|p| p.tsfc_kg_per_n_s))
            .collect()
    }

    /// (Mach, thrust, TSFC) triples for the samples that evaluated.
    pub fn successful_triples(&self) -> Vec<(f64, f64, f64)> {
        self.mach
            .iter()
            .zip(&self.samples)
            .filter_map(|(m, s)| s.as_ref().map(|p| (*m, p.thrust_n, p.tsfc_kg_per_n_s)))
            .collect()
    }
}

/// Run a Mach sweep with the other operating-point fields taken from `fixed`.
pub fn sweep<E: PointEvaluator>(
    definition: &SweepDefinition,
    fixed: &OperatingPoint,
    evaluator: &E,
    options: SweepOptions,
) -> SweepResult<PerformanceCurve> {
    let never = AtomicBool::new(false);
    sweep_cancellable(definition, fixed, evaluator, options, &never)
}

/// Like [`sweep`], but checks `cancel` before each sample and returns
/// [`SweepError::Cancelled`] once it is set. A sample already running is
/// allowed to finish.
pub fn sweep_cancellable<E: PointEvaluator>(
    definition: &SweepDefinition,
    fixed: &OperatingPoint,
    evaluator: &E,
    options: SweepOptions,
    cancel: &AtomicBool,
) -> SweepResult<PerformanceCurve> {
    // A fixed field that breaks the contract would fail every sample.
    fixed
        .with_mach(definition.start)
        .validate()
        .map_err(|e| SweepError::InvalidConfiguration(format!("fixed conditions: {e}")))?;

    let mach = definition.generate_points();
    debug!(
        points = mach.len(),
        start = definition.start,
        end = definition.end,
        parallel = options.parallel,
        policy = ?options.failure_policy,
        "starting Mach sweep"
    );

    let run = |index: usize, m: f64| -> SweepResult<Result<PointPerformance, CycleError>> {
        if cancel.load(Ordering::Relaxed) {
            return Err(SweepError::Cancelled);
        }
        match evaluator.evaluate(&fixed.with_mach(m)) {
            Ok(perf) => Ok(Ok(perf)),
            Err(source) => match options.failure_policy {
                FailurePolicy::Abort => Err(SweepError::PointFailed {
                    index,
                    mach: m,
                    source,
                }),
                FailurePolicy::RecordGaps => Ok(Err(source)),
            },
        }
    };

    let outcomes: Vec<Result<PointPerformance, CycleError>> = if options.parallel {
        // Collect everything first so the reported error is the lowest index.
        let results: Vec<_> = mach
            .par_iter()
            .enumerate()
            .map(|(i, &m)| run(i, m))
            .collect();
        results.into_iter().collect::<SweepResult<_>>()?
    } else {
        mach.iter()
            .enumerate()
            .map(|(i, &m)| run(i, m))
            .collect::<SweepResult<_>>()?
    };

    let mut samples = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(perf) => samples.push(Some(perf)),
            Err(error) => {
                warn!(index, mach = mach[index], %error, "recording gap in Mach sweep");
                samples.push(None);
                failures.push(PointFailure {
                    index,
                    mach: mach[index],
                    error,
                });
            }
        }
    }

    let curve = PerformanceCurve {
        mach,
        samples,
        failures,
    };
    debug!(
        successful = curve.num_successful(),
        failed = curve.num_failed(),
        "Mach sweep finished"
    );
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_cycle::{ReferenceConstants, ReferenceInputs};

    fn engine() -> ReferenceConstants {
        ReferenceConstants::derive(ReferenceInputs::default()).unwrap()
    }

    fn cruise() -> OperatingPoint {
        OperatingPoint::new(0.0, 229.8, 30.8, 1670.0, 0.955).unwrap()
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let r = engine();
        let def = SweepDefinition::mach(0.0, 2.0, 9).unwrap();
        let seq = sweep(&def, &cruise(), &r, SweepOptions::default()).unwrap();
        let par = sweep(
            &def,
            &cruise(),
            &r,
            SweepOptions {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(seq.mach, par.mach);
        assert_eq!(seq.samples, par.samples);
    }

    #[test]
    fn invalid_fixed_conditions_rejected_up_front() {
        let r = engine();
        let def = SweepDefinition::mach(0.0, 2.0, 3).unwrap();
        let fixed = OperatingPoint {
            turbine_inlet_temperature_k: 100.0,
            ..cruise()
        };
        let err = sweep(&def, &fixed, &r, SweepOptions::default()).unwrap_err();
        assert!(matches!(err, SweepError::InvalidConfiguration(_)));
    }

    #[test]
    fn preset_cancel_flag_stops_sweep() {
        let r = engine();
        let def = SweepDefinition::mach(0.0, 2.0, 3).unwrap();
        let cancel = AtomicBool::new(true);
        let err =
            sweep_cancellable(&def, &cruise(), &r, SweepOptions::default(), &cancel).unwrap_err();
        assert_eq!(err, SweepError::Cancelled);
    }

    #[test]
    fn default_policy_is_abort() {
        assert_eq!(SweepOptions::default().failure_policy, FailurePolicy::Abort);
        assert!(!SweepOptions::default().parallel);
    }
}
