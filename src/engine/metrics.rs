//! Engine run metrics.
//!
//! Small structs used to observe a saturation run. The CLI report prints them;
//! the normal extraction path only keeps counts and durations.

use crate::{Node, ResolvedToken};
use std::time::Duration;

/// Timings for the saturation phase.
#[derive(Debug, Default, Clone)]
pub struct SaturationMetrics {
    /// Total elapsed time for saturation (initial regex pass + iterations).
    pub total: Duration,
    /// Metrics for the initial regex-only pass.
    pub initial_regex: PassMetrics,
    /// Metrics for each subsequent saturation iteration.
    pub iterations: Vec<PassMetrics>,
}

/// Timing (and node discovery counts) for a single pass.
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    /// Elapsed time for the pass.
    pub duration: Duration,
    /// Number of new nodes added to the stash during the pass.
    pub produced: usize,
    /// New nodes produced in this pass.
    pub nodes: Vec<Node>,
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Selected, non-overlapping tokens in phrase order.
    pub tokens: Vec<ResolvedToken>,
    pub saturation: SaturationMetrics,
    /// Total elapsed time for the run.
    pub total: Duration,
}
