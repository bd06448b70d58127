// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::NodeName;

#[derive(Error, Debug)]
pub enum DependgenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A sweep made no progress while nodes were still unready.
    ///
    /// `stuck` lists every node left unready; `cycle` lists the members of
    /// one strongly connected component among them.
    #[error(
        "Cycle detected in dependency graph: {} node(s) stuck, cycle through [{}]",
        .stuck.len(),
        .cycle.join(", ")
    )]
    CycleDetected {
        stuck: Vec<NodeName>,
        cycle: Vec<NodeName>,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DependgenError>;
