// src/dag/sweep_step.rs

//! Result types for engine sweeps and whole runs.

use crate::types::{EmissionMode, NodeName};

/// Structured result of a single sweep.
///
/// Useful for tests that step the engine manually and assert what changed.
#[derive(Debug, Clone)]
pub struct SweepStep {
    /// 1-based index of this sweep (0 if no sweep was needed).
    pub sweep: usize,
    /// Nodes that became ready in this sweep, in visiting order.
    pub newly_ready: Vec<NodeName>,
    /// Subset of `newly_ready` that had an initializer and was emitted.
    pub emitted: Vec<NodeName>,
    /// Whether every tracked node is now ready.
    pub finished: bool,
}

/// Summary of a successful engine run.
#[derive(Debug, Clone)]
pub struct EmissionReport {
    pub mode: EmissionMode,
    pub sweeps: usize,
    /// Number of tracked nodes, all of which are ready at this point.
    pub nodes_ready: usize,
    /// Emitted nodes in emission order.
    pub emitted: Vec<NodeName>,
}
