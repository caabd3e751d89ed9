// src/store/mod.rs

//! Per-project key/value settings with legacy fallback and dirty tracking.
//!
//! - `backing.rs`: the persistence seam (`BackingStore`) with file and
//!   in-memory implementations.
//! - `properties.rs`: the `.prefs` text format.
//! - `settings.rs`: `SettingsStore`, the resolved in-memory namespace.

pub mod backing;
pub mod properties;
pub mod settings;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use backing::{BackingStore, FileBackingStore, MemoryBackingStore};
pub use settings::{SettingsStore, resolve_namespace};

pub const KEY_ENABLED: &str = "enabled";
pub const KEY_EXCLUDE: &str = "exclude";
pub const KEY_GLOBALS: &str = "globals";
pub const KEY_OPTIONS: &str = "options";

/// Keys that make a namespace count as "present" during resolution.
pub const RECOGNIZED_KEYS: [&str; 4] = [KEY_ENABLED, KEY_EXCLUDE, KEY_GLOBALS, KEY_OPTIONS];

/// Identity of a configuration owner, typically one project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    name: String,
    root: PathBuf,
}

impl Scope {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Scope named after the last component of `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.to_string_lossy().into_owned());
        Self { name, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which key space a namespace was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Current,
    Legacy,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Current => f.write_str("current"),
            Format::Legacy => f.write_str("legacy"),
        }
    }
}

/// A flat key/value map for one scope in one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub format: Format,
    pub values: BTreeMap<String, String>,
}

impl Namespace {
    pub fn empty(format: Format) -> Self {
        Self {
            format,
            values: BTreeMap::new(),
        }
    }

    /// True if at least one recognized key is present.
    pub fn has_recognized_keys(&self) -> bool {
        RECOGNIZED_KEYS
            .iter()
            .any(|key| self.values.contains_key(*key))
    }
}
