// src/prefs.rs

//! Typed JSHint preferences for one project, layered on [`SettingsStore`].

use std::collections::BTreeSet;
use std::path::{Component, Path};

use serde::Serialize;

use crate::errors::{PrefsError, Result};
use crate::store::{
    BackingStore, Format, KEY_ENABLED, KEY_EXCLUDE, KEY_GLOBALS, KEY_OPTIONS, Scope,
    SettingsStore,
};

const DEF_ENABLED: bool = false;
const DEF_GLOBALS: &str = "";
const DEF_OPTIONS: &str = "";

/// Snapshot of the effective preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub enabled: bool,
    pub excluded: BTreeSet<String>,
    pub globals: String,
    pub options: String,
    pub source: Format,
}

pub struct ProjectPreferences<'a, B: BackingStore + ?Sized> {
    store: SettingsStore<'a, B>,
}

impl<'a, B: BackingStore + ?Sized> ProjectPreferences<'a, B> {
    pub fn open(backing: &'a B, scope: Scope) -> Result<Self> {
        Ok(Self {
            store: SettingsStore::open(backing, scope)?,
        })
    }

    pub fn store(&self) -> &SettingsStore<'a, B> {
        &self.store
    }

    pub fn get_enabled(&self) -> bool {
        self.store.get_bool(KEY_ENABLED, DEF_ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.store.set_bool(KEY_ENABLED, enabled);
    }

    /// Exact-string lookup of a normalized, scope-relative path.
    pub fn get_excluded(&self, path: &str) -> bool {
        self.excluded_paths().contains(path)
    }

    /// Add or remove `path` from the exclusion list.
    ///
    /// Fails for paths the delimited list cannot hold: the scope root (`""`),
    /// paths containing `,` or `;`, and paths with surrounding whitespace.
    pub fn set_excluded(&mut self, path: &str, excluded: bool) -> Result<()> {
        check_exclusion_path(path)?;

        let mut paths = self.excluded_paths();
        let changed = if excluded {
            paths.insert(path.to_string())
        } else {
            paths.remove(path)
        };
        if !changed {
            return Ok(());
        }

        if paths.is_empty() {
            self.store.remove(KEY_EXCLUDE);
        } else {
            let joined = paths.into_iter().collect::<Vec<_>>().join(",");
            self.store.set_string(KEY_EXCLUDE, &joined);
        }
        Ok(())
    }

    pub fn excluded_paths(&self) -> BTreeSet<String> {
        parse_path_list(&self.store.get_string(KEY_EXCLUDE, ""))
    }

    /// Normalize `resource` against the scope root and check the exclusion
    /// list. Resources outside the scope are never excluded.
    pub fn is_resource_excluded(&self, resource: &Path) -> bool {
        resource_path(self.store.scope().root(), resource)
            .is_some_and(|path| self.get_excluded(&path))
    }

    pub fn get_globals(&self) -> String {
        self.store.get_string(KEY_GLOBALS, DEF_GLOBALS)
    }

    pub fn set_globals(&mut self, globals: &str) {
        self.store.set_string(KEY_GLOBALS, globals);
    }

    pub fn get_options(&self) -> String {
        self.store.get_string(KEY_OPTIONS, DEF_OPTIONS)
    }

    pub fn set_options(&mut self, options: &str) {
        self.store.set_string(KEY_OPTIONS, options);
    }

    pub fn has_changed(&self) -> bool {
        self.store.has_changed()
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save()
    }

    pub fn snapshot(&self) -> ResolvedConfig {
        ResolvedConfig {
            enabled: self.get_enabled(),
            excluded: self.excluded_paths(),
            globals: self.get_globals(),
            options: self.get_options(),
            source: self.store.source(),
        }
    }
}

/// Split a raw exclusion value on `,` and `;`.
pub fn parse_path_list(raw: &str) -> BTreeSet<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_exclusion_path(path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "the project root cannot be excluded"
    } else if path.contains([',', ';']) {
        "paths must not contain ',' or ';'"
    } else if path.trim() != path {
        "paths must not start or end with whitespace"
    } else {
        return Ok(());
    };

    Err(PrefsError::InvalidPath {
        path: path.to_string(),
        reason,
    })
}

/// Scope-relative path of `resource`, with forward slashes and no leading
/// separator. The scope root itself maps to `""`.
///
/// Relative inputs are taken as already scope-relative. Absolute paths
/// outside `scope_root` give `None`.
pub fn resource_path(scope_root: &Path, resource: &Path) -> Option<String> {
    let relative = if resource.is_absolute() {
        resource.strip_prefix(scope_root).ok()?
    } else {
        resource
    };

    let mut parts: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    Some(parts.join("/"))
}
