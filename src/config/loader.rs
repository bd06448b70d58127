// src/config/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::model::{Manifest, RawManifest};
use crate::errors::Result;

/// Load a manifest from a given path and return the raw `RawManifest`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawManifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read manifest");
    parse_manifest(&contents)
}

/// Parse manifest text without validating it.
pub fn parse_manifest(contents: &str) -> Result<RawManifest> {
    let manifest: RawManifest = toml::from_str(contents)?;
    Ok(manifest)
}

/// Load a manifest from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks node names in `[node.*]`, `after` and `needed` are non-empty.
///
/// Cycles are **not** rejected here; the engine reports them when it gets
/// stuck, after emitting whatever could be ordered.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Manifest> {
    let raw = load_from_path(&path)?;
    Manifest::try_from(raw)
}

/// Read a whole manifest from a reader (stdin for `-`) and validate it.
pub fn read_manifest<R: Read>(mut reader: R) -> Result<Manifest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Manifest::try_from(parse_manifest(&contents)?)
}
