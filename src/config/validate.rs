// src/config/validate.rs

use crate::config::model::{Manifest, RawManifest};
use crate::errors::{DependgenError, Result};

impl TryFrom<RawManifest> for Manifest {
    type Error = crate::errors::DependgenError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        validate_raw_manifest(&raw)?;
        Ok(Manifest::new_unchecked(raw.needed, raw.config, raw.node))
    }
}

fn validate_raw_manifest(manifest: &RawManifest) -> Result<()> {
    validate_node_names(manifest)?;
    validate_dependencies(manifest)?;
    validate_needed(manifest)?;
    Ok(())
}

fn ensure_name(name: &str, context: impl FnOnce() -> String) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DependgenError::ConfigError(format!(
            "empty node name {}",
            context()
        )));
    }
    Ok(())
}

fn validate_node_names(manifest: &RawManifest) -> Result<()> {
    for name in manifest.node.keys() {
        ensure_name(name, || "in a [node.<name>] section".to_string())?;
    }
    Ok(())
}

fn validate_dependencies(manifest: &RawManifest) -> Result<()> {
    for (name, node) in manifest.node.iter() {
        for dep in node.after.iter() {
            ensure_name(dep, || format!("in `after` of node '{}'", name))?;
        }
    }
    Ok(())
}

fn validate_needed(manifest: &RawManifest) -> Result<()> {
    for name in manifest.needed.iter() {
        ensure_name(name, || "in `needed`".to_string())?;
    }
    Ok(())
}
