#![allow(dead_code)]

use dependgen::config::{ConfigSection, Manifest, NodeConfig, RawManifest};
use dependgen::dag::{InitPlan, PlanBuilder};
use dependgen::types::DuplicateInitPolicy;

/// Terse plan construction for tests.
///
/// ```ignore
/// let plan = PlanFixture::new()
///     .edge("C", "B")
///     .edge("B", "A")
///     .init("A", "initA();")
///     .build();
/// ```
pub struct PlanFixture {
    builder: PlanBuilder,
}

impl PlanFixture {
    pub fn new() -> Self {
        Self {
            builder: PlanBuilder::new(),
        }
    }

    pub fn with_policy(policy: DuplicateInitPolicy) -> Self {
        Self {
            builder: PlanBuilder::with_policy(policy),
        }
    }

    pub fn edge(mut self, dependent: &str, dependency: &str) -> Self {
        self.builder.add_dependency(dependent, dependency);
        self
    }

    pub fn init(mut self, node: &str, text: &str) -> Self {
        self.builder.add_init(node, text);
        self
    }

    pub fn needed(mut self, node: &str) -> Self {
        self.builder.add_needed(node);
        self
    }

    pub fn build(self) -> InitPlan {
        self.builder.build()
    }
}

impl Default for PlanFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Manifest` to simplify test setup.
pub struct ManifestBuilder {
    manifest: RawManifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: RawManifest {
                needed: vec![],
                config: ConfigSection::default(),
                node: Default::default(),
            },
        }
    }

    pub fn with_node(mut self, name: &str, node: NodeConfig) -> Self {
        self.manifest.node.insert(name.to_string(), node);
        self
    }

    pub fn with_needed(mut self, name: &str) -> Self {
        self.manifest.needed.push(name.to_string());
        self
    }

    pub fn with_duplicate_init(mut self, policy: DuplicateInitPolicy) -> Self {
        self.manifest.config.duplicate_init = Some(policy);
        self
    }

    pub fn build(self) -> Manifest {
        Manifest::try_from(self.manifest).expect("Failed to build valid manifest from builder")
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NodeConfig`.
pub struct NodeConfigBuilder {
    node: NodeConfig,
}

impl NodeConfigBuilder {
    pub fn new() -> Self {
        Self {
            node: NodeConfig::default(),
        }
    }

    pub fn init(mut self, text: &str) -> Self {
        self.node.init = Some(text.to_string());
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.node.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> NodeConfig {
        self.node
    }
}

impl Default for NodeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
