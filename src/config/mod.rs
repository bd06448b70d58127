// src/config/mod.rs

//! Manifest loading and validation for dependgen.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a manifest from disk or a reader (`loader.rs`).
//! - Validate basic invariants like non-empty node names (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_manifest, read_manifest};
pub use model::{ConfigSection, Manifest, NodeConfig, RawManifest, effective_policy};
