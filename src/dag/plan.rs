// src/dag/plan.rs

//! Builder for the inputs of an engine run.
//!
//! The front end records edges, initializers and needed nodes on a
//! [`PlanBuilder`]; [`PlanBuilder::build`] freezes them into an [`InitPlan`]
//! that is moved into the [`OrderEngine`](crate::dag::OrderEngine).

use std::collections::BTreeSet;

use tracing::debug;

use crate::dag::closure::dependency_closure;
use crate::dag::graph::DependencyGraph;
use crate::dag::registry::InitRegistry;
use crate::types::{DuplicateInitPolicy, EmissionMode, NodeName};

/// Append-only collector for edges, initializers and needed nodes.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    graph: DependencyGraph,
    registry: InitRegistry,
    needed: BTreeSet<NodeName>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicateInitPolicy) -> Self {
        Self {
            registry: InitRegistry::new(policy),
            ..Self::default()
        }
    }

    pub fn add_dependency(&mut self, dependent: &str, dependency: &str) -> &mut Self {
        if !self.graph.add_edge(dependent, dependency) {
            debug!(dependent = %dependent, dependency = %dependency, "duplicate edge ignored");
        }
        self
    }

    pub fn add_init(&mut self, node: &str, text: &str) -> &mut Self {
        self.registry.register(node, text);
        self
    }

    pub fn add_needed(&mut self, node: &str) -> &mut Self {
        self.needed.insert(node.to_string());
        self
    }

    pub fn build(self) -> InitPlan {
        InitPlan {
            graph: self.graph,
            registry: self.registry,
            needed: self.needed,
        }
    }
}

/// Frozen inputs of one engine run.
#[derive(Debug, Clone)]
pub struct InitPlan {
    pub graph: DependencyGraph,
    pub registry: InitRegistry,
    /// Seed of the needed-subset mode. Empty means full mode.
    pub needed: BTreeSet<NodeName>,
}

impl InitPlan {
    pub fn mode(&self) -> EmissionMode {
        if self.needed.is_empty() {
            EmissionMode::Full
        } else {
            EmissionMode::Needed
        }
    }

    /// Nodes an engine run over this plan tracks: every node in full mode,
    /// the dependency closure of the needed seed otherwise.
    pub fn relevant_nodes(&self) -> BTreeSet<NodeName> {
        match self.mode() {
            EmissionMode::Full => self.all_nodes(),
            EmissionMode::Needed => dependency_closure(&self.graph, &self.needed),
        }
    }

    /// Union of every node named by an edge or registered with text.
    pub fn all_nodes(&self) -> BTreeSet<NodeName> {
        self.graph
            .nodes()
            .chain(self.registry.nodes())
            .map(|s| s.to_string())
            .collect()
    }
}
