// src/dag/engine.rs

use tracing::{debug, info, warn};

use crate::dag::cycle::find_cycle;
use crate::dag::plan::InitPlan;
use crate::dag::readiness::ReadinessTracker;
use crate::dag::sweep_step::{EmissionReport, SweepStep};
use crate::emit::Emitter;
use crate::errors::{DependgenError, Result};
use crate::types::{EmissionMode, NodeName};

/// Fixed-point sweep engine.
///
/// Owns the frozen [`InitPlan`] plus the per-run readiness state. Each sweep
/// visits every unready node once, in ascending name order, and marks it
/// ready when all its dependencies are ready. Readiness set earlier in a
/// sweep is visible to nodes visited later in the same sweep.
///
/// In [`EmissionMode::Needed`] only the dependency closure of the needed
/// seed is tracked; everything else is never visited.
#[derive(Debug)]
pub struct OrderEngine {
    plan: InitPlan,
    mode: EmissionMode,
    tracker: ReadinessTracker,
    sweeps: usize,
    emitted: Vec<NodeName>,
}

impl OrderEngine {
    pub fn new(plan: InitPlan) -> Self {
        let mode = plan.mode();
        let relevant = plan.relevant_nodes();
        if mode == EmissionMode::Needed {
            debug!(
                seed = plan.needed.len(),
                closure = relevant.len(),
                "computed needed closure"
            );
        }

        for node in &relevant {
            if !plan.graph.has_dependencies(node) && !plan.registry.contains(node) {
                debug!(
                    node = %node,
                    "node has no dependencies and no initializer; treating as external leaf"
                );
            }
        }

        Self {
            tracker: ReadinessTracker::new(relevant),
            plan,
            mode,
            sweeps: 0,
            emitted: Vec::new(),
        }
    }

    /// Whether `node` takes part in this run.
    pub fn is_tracked(&self, node: &str) -> bool {
        self.tracker.is_tracked(node)
    }

    pub fn is_ready(&self, node: &str) -> bool {
        self.tracker.is_ready(node)
    }

    pub fn is_finished(&self) -> bool {
        self.tracker.all_ready()
    }

    /// Nodes emitted so far, in emission order.
    pub fn emitted(&self) -> &[NodeName] {
        &self.emitted
    }

    /// Run one sweep over the currently unready nodes.
    ///
    /// Returns [`DependgenError::CycleDetected`] if unready nodes remain and
    /// none of them could be made ready. Lines emitted before the failing
    /// sweep are not retracted.
    pub fn sweep<E: Emitter + ?Sized>(&mut self, emitter: &mut E) -> Result<SweepStep> {
        let pending = self.tracker.unready();
        if pending.is_empty() {
            return Ok(SweepStep {
                sweep: self.sweeps,
                newly_ready: Vec::new(),
                emitted: Vec::new(),
                finished: true,
            });
        }

        self.sweeps += 1;
        let mut newly_ready = Vec::new();
        let mut emitted = Vec::new();

        for node in pending {
            let satisfied = self
                .plan
                .graph
                .dependencies_of(&node)
                .all(|dep| self.tracker.is_ready(dep));
            if !satisfied {
                continue;
            }

            if !self.tracker.mark_ready(&node) {
                continue;
            }

            if let Some(text) = self.plan.registry.get(&node) {
                emitter.emit(&node, text)?;
                self.emitted.push(node.clone());
                emitted.push(node.clone());
            }
            newly_ready.push(node);
        }

        debug!(
            sweep = self.sweeps,
            ready = newly_ready.len(),
            emitted = emitted.len(),
            remaining = self.tracker.tracked_count() - self.tracker.ready_count(),
            "sweep complete"
        );

        if newly_ready.is_empty() {
            let stuck = self.tracker.unready();
            let cycle = find_cycle(&self.plan.graph, &stuck);
            warn!(
                sweep = self.sweeps,
                ?stuck,
                ?cycle,
                "no progress in sweep; dependency cycle"
            );
            return Err(DependgenError::CycleDetected { stuck, cycle });
        }

        Ok(SweepStep {
            sweep: self.sweeps,
            newly_ready,
            emitted,
            finished: self.tracker.all_ready(),
        })
    }

    /// Sweep until every tracked node is ready or a cycle stops progress.
    ///
    /// The emitter is finished (flushed) on both outcomes.
    pub fn run<E: Emitter + ?Sized>(mut self, emitter: &mut E) -> Result<EmissionReport> {
        let outcome = self.sweep_to_completion(emitter);
        let flushed = emitter.finish();
        outcome?;
        flushed?;

        let report = EmissionReport {
            mode: self.mode,
            sweeps: self.sweeps,
            nodes_ready: self.tracker.ready_count(),
            emitted: self.emitted,
        };

        info!(
            mode = %report.mode,
            sweeps = report.sweeps,
            nodes = report.nodes_ready,
            emitted = report.emitted.len(),
            "emission complete"
        );

        Ok(report)
    }

    fn sweep_to_completion<E: Emitter + ?Sized>(&mut self, emitter: &mut E) -> Result<()> {
        while !self.tracker.all_ready() {
            self.sweep(emitter)?;
        }
        Ok(())
    }
}
