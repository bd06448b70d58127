// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::DuplicateInitPolicy;

/// Command-line arguments for `dependgen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dependgen",
    version,
    about = "Emit initializer statements in dependency order.",
    long_about = None
)]
pub struct CliArgs {
    /// Manifest files (TOML), applied in order.
    ///
    /// With no inputs, or `-`, the manifest is read from stdin.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Emit only this node and what it transitively depends on.
    ///
    /// May be repeated; adds to any `needed = [...]` from the manifests.
    #[arg(long = "needed", value_name = "NAME")]
    pub needed: Vec<String>,

    /// Write emitted lines to this file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How to resolve a node registered with two different initializers.
    ///
    /// Overrides `duplicate_init` from the manifests.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub duplicate_init: Option<DuplicateInitPolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPENDGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't emit anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
