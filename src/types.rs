use std::fmt;

use serde::Deserialize;

/// Name of an initialization node. Case-sensitive, otherwise opaque.
pub type NodeName = String;

/// What to do when a node gets a second initializer registration.
///
/// Spelled `keep_first` / `overwrite` both in `[config].duplicate_init` and
/// on the `--duplicate-init` flag.
///
/// - `KeepFirst`: the first registration stays, later ones are ignored
///   (default, same as the map the `.depend` tooling always used).
/// - `Overwrite`: the latest registration replaces the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DuplicateInitPolicy {
    KeepFirst,
    Overwrite,
}

impl Default for DuplicateInitPolicy {
    fn default() -> Self {
        DuplicateInitPolicy::KeepFirst
    }
}

/// Which emission mode an engine run uses.
///
/// Selected from the finished plan: `Needed` iff the needed set is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionMode {
    /// Every node in the graph and registry.
    Full,
    /// Only the transitive dependency closure of the needed seed.
    Needed,
}

impl fmt::Display for EmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionMode::Full => write!(f, "full"),
            EmissionMode::Needed => write!(f, "needed"),
        }
    }
}
