// src/dag/registry.rs

//! Initializer registry: the text emitted for a node once it is ready.

use std::collections::BTreeMap;

use tracing::warn;

use crate::types::{DuplicateInitPolicy, NodeName};

/// Maps node names to their initializer text.
///
/// Nodes absent from the registry still take part in ordering; they just
/// produce no output line.
#[derive(Debug, Clone, Default)]
pub struct InitRegistry {
    entries: BTreeMap<NodeName, String>,
    policy: DuplicateInitPolicy,
}

impl InitRegistry {
    pub fn new(policy: DuplicateInitPolicy) -> Self {
        Self {
            entries: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicateInitPolicy {
        self.policy
    }

    /// Register `text` for `node`, resolving collisions with the policy.
    ///
    /// Returns `true` if the registry now holds `text` for `node`.
    pub fn register(&mut self, node: &str, text: &str) -> bool {
        match self.entries.get_mut(node) {
            None => {
                self.entries.insert(node.to_string(), text.to_string());
                true
            }
            Some(existing) if existing == text => true,
            Some(existing) => match self.policy {
                DuplicateInitPolicy::KeepFirst => {
                    warn!(
                        node = %node,
                        kept = %existing,
                        ignored = %text,
                        "duplicate initializer; keeping the first registration"
                    );
                    false
                }
                DuplicateInitPolicy::Overwrite => {
                    warn!(
                        node = %node,
                        replaced = %existing,
                        with = %text,
                        "duplicate initializer; overwriting earlier registration"
                    );
                    *existing = text.to_string();
                    true
                }
            },
        }
    }

    pub fn get(&self, node: &str) -> Option<&str> {
        self.entries.get(node).map(|s| s.as_str())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.entries.contains_key(node)
    }

    /// Registered node names in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn registered_count(&self) -> usize {
        self.entries.len()
    }
}
