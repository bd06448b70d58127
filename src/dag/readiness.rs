// src/dag/readiness.rs

//! Per-node readiness flags for a single engine run.

use std::collections::BTreeMap;

use crate::types::NodeName;

/// Tracks which nodes have become ready.
///
/// Every tracked node starts unready and flips to ready at most once.
/// Nodes that were never tracked are reported as not ready.
#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    ready: BTreeMap<NodeName, bool>,
}

impl ReadinessTracker {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeName>,
    {
        Self {
            ready: nodes.into_iter().map(|n| (n.into(), false)).collect(),
        }
    }

    pub fn is_tracked(&self, node: &str) -> bool {
        self.ready.contains_key(node)
    }

    pub fn is_ready(&self, node: &str) -> bool {
        self.ready.get(node).copied().unwrap_or(false)
    }

    /// Flip `node` to ready.
    ///
    /// Returns `true` only on the false -> true transition; untracked or
    /// already-ready nodes return `false`.
    pub fn mark_ready(&mut self, node: &str) -> bool {
        match self.ready.get_mut(node) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Unready nodes in ascending name order.
    pub fn unready(&self) -> Vec<NodeName> {
        self.ready
            .iter()
            .filter(|(_, ready)| !**ready)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn all_ready(&self) -> bool {
        self.ready.values().all(|ready| *ready)
    }

    pub fn ready_count(&self) -> usize {
        self.ready.values().filter(|ready| **ready).count()
    }

    pub fn tracked_count(&self) -> usize {
        self.ready.len()
    }
}
