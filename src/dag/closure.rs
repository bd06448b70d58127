// src/dag/closure.rs

//! Transitive dependency closure used by the needed-subset mode.

use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

use crate::dag::graph::DependencyGraph;
use crate::types::NodeName;

/// Every node reachable from `seed` by following dependency edges,
/// including the seed nodes themselves.
///
/// Breadth-first; each node is expanded once so cycles terminate.
pub fn dependency_closure<'a, I>(graph: &DependencyGraph, seed: I) -> BTreeSet<NodeName>
where
    I: IntoIterator<Item = &'a NodeName>,
{
    let mut closure: BTreeSet<NodeName> = BTreeSet::new();
    let mut queue: VecDeque<NodeName> = VecDeque::new();

    for node in seed {
        if closure.insert(node.clone()) {
            queue.push_back(node.clone());
        }
    }

    while let Some(current) = queue.pop_front() {
        for dep in graph.dependencies_of(&current) {
            if closure.insert(dep.to_string()) {
                trace!(node = %current, dependency = %dep, "closure grew");
                queue.push_back(dep.to_string());
            }
        }
    }

    closure
}
