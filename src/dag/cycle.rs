// src/dag/cycle.rs

//! Cycle diagnostics for a stuck engine run.

use std::collections::BTreeSet;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DependencyGraph;
use crate::types::NodeName;

/// Find the members of one cycle among the `stuck` nodes.
///
/// Builds a petgraph over the edges whose endpoints are both stuck and
/// returns the first strongly connected component that is an actual cycle
/// (more than one node, or a single node depending on itself), sorted by
/// name. Falls back to every stuck node if no such component exists.
pub fn find_cycle(graph: &DependencyGraph, stuck: &[NodeName]) -> Vec<NodeName> {
    let stuck_set: BTreeSet<&str> = stuck.iter().map(|s| s.as_str()).collect();

    let mut g: DiGraphMap<&str, ()> = DiGraphMap::new();
    for node in stuck_set.iter().copied() {
        g.add_node(node);
    }
    for (dependent, dependency) in graph.edges() {
        if stuck_set.contains(dependent) && stuck_set.contains(dependency) {
            g.add_edge(dependent, dependency, ());
        }
    }

    let mut components = tarjan_scc(&g);
    for component in components.iter_mut() {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|node| g.contains_edge(*node, *node));
        if is_cycle {
            component.sort_unstable();
            return component.iter().map(|s| s.to_string()).collect();
        }
    }

    stuck.to_vec()
}

/// Whether the edges among `scope` admit a topological order.
///
/// Edges with an endpoint outside `scope` are ignored, so a cycle the run
/// never visits does not count.
pub fn is_acyclic(graph: &DependencyGraph, scope: &BTreeSet<NodeName>) -> bool {
    let mut g: DiGraphMap<&str, ()> = DiGraphMap::new();
    for node in scope {
        g.add_node(node.as_str());
    }
    for (dependent, dependency) in graph.edges() {
        if scope.contains(dependent) && scope.contains(dependency) {
            g.add_edge(dependency, dependent, ());
        }
    }
    toposort(&g, None).is_ok()
}
