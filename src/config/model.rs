// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::dag::PlanBuilder;
use crate::types::{DuplicateInitPolicy, NodeName};

/// Manifest as read from a TOML file, before validation.
///
/// ```toml
/// needed = ["device"]
///
/// [config]
/// duplicate_init = "keep_first"
///
/// [node.instance]
/// init = "create_instance();"
///
/// [node.device]
/// init = "create_device();"
/// after = ["instance", "surface"]
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawManifest {
    /// Seed for the needed-subset mode. Empty selects full mode.
    #[serde(default)]
    pub needed: Vec<NodeName>,

    /// Behaviour knobs from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All nodes from `[node.<name>]`.
    #[serde(default)]
    pub node: BTreeMap<NodeName, NodeConfig>,
}

/// A validated manifest. Obtain one via `Manifest::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub needed: Vec<NodeName>,
    pub config: ConfigSection,
    pub node: BTreeMap<NodeName, NodeConfig>,
}

impl Manifest {
    pub(crate) fn new_unchecked(
        needed: Vec<NodeName>,
        config: ConfigSection,
        node: BTreeMap<NodeName, NodeConfig>,
    ) -> Self {
        Self {
            needed,
            config,
            node,
        }
    }

    /// Record every edge, initializer and needed node on `builder`.
    ///
    /// `[config].duplicate_init` is not applied here; see
    /// [`effective_policy`] for how it is resolved across manifests.
    pub fn apply_to(&self, builder: &mut PlanBuilder) {
        for (name, node) in &self.node {
            for dep in &node.after {
                builder.add_dependency(name, dep);
            }
            if let Some(ref text) = node.init {
                builder.add_init(name, text);
            }
        }

        for name in &self.needed {
            builder.add_needed(name);
        }
    }

    /// Number of `after` edges declared in this manifest.
    pub fn edge_count(&self) -> usize {
        self.node.values().map(|n| n.after.len()).sum()
    }
}

/// Policy for a set of manifests: the CLI override if given, else the first
/// manifest that sets `duplicate_init`, else the default.
pub fn effective_policy(
    cli_override: Option<DuplicateInitPolicy>,
    manifests: &[Manifest],
) -> DuplicateInitPolicy {
    cli_override
        .or_else(|| manifests.iter().find_map(|m| m.config.duplicate_init))
        .unwrap_or_default()
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// `"keep_first"` (default) or `"overwrite"`.
    #[serde(default)]
    pub duplicate_init: Option<DuplicateInitPolicy>,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NodeConfig {
    /// Text emitted verbatim when the node becomes ready. A node without
    /// `init` only constrains ordering.
    #[serde(default)]
    pub init: Option<String>,

    /// Nodes that must be ready before this one.
    #[serde(default)]
    pub after: Vec<NodeName>,
}
