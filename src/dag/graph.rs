// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::types::NodeName;

/// Store of `dependent -> dependency` edges keyed by node name.
///
/// Edges have set semantics: recording the same edge twice is a no-op.
/// Nodes are kept in a `BTreeMap` so sweeps visit them in a stable order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Direct dependencies of each node that appears as a dependent.
    deps: BTreeMap<NodeName, BTreeSet<NodeName>>,
    /// Every node named by any edge, on either side.
    nodes: BTreeSet<NodeName>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` must not become ready before `dependency`.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, dependent: &str, dependency: &str) -> bool {
        self.nodes.insert(dependent.to_string());
        self.nodes.insert(dependency.to_string());
        self.deps
            .entry(dependent.to_string())
            .or_default()
            .insert(dependency.to_string())
    }

    /// Every node named by an edge.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|s| s.as_str())
    }

    /// Immediate dependencies of a node. Empty for unknown nodes and for
    /// nodes that only ever appear on the dependency side of an edge.
    pub fn dependencies_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.deps
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(|s| s.as_str()))
    }

    /// Whether the node has at least one recorded dependency.
    pub fn has_dependencies(&self, name: &str) -> bool {
        self.deps.get(name).is_some_and(|deps| !deps.is_empty())
    }

    /// Iterate over all edges as `(dependent, dependency)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.deps.iter().flat_map(|(dependent, deps)| {
            deps.iter()
                .map(move |dep| (dependent.as_str(), dep.as_str()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.deps.values().map(BTreeSet::len).sum()
    }
}
