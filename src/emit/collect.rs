// src/emit/collect.rs

use std::io;

use crate::emit::Emitter;
use crate::types::NodeName;

/// Keeps every emitted `(node, text)` pair in order.
#[derive(Debug, Clone, Default)]
pub struct CollectingEmitter {
    emitted: Vec<(NodeName, String)>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted text, one entry per line.
    pub fn lines(&self) -> Vec<&str> {
        self.emitted.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Emitted node names in emission order.
    pub fn nodes(&self) -> Vec<&str> {
        self.emitted.iter().map(|(node, _)| node.as_str()).collect()
    }

    /// Position of `node` in the emission order.
    pub fn position_of(&self, node: &str) -> Option<usize> {
        self.emitted.iter().position(|(n, _)| n == node)
    }
}

impl Emitter for CollectingEmitter {
    fn emit(&mut self, node: &str, text: &str) -> io::Result<()> {
        self.emitted.push((node.to_string(), text.to_string()));
        Ok(())
    }
}
