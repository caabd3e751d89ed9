// src/store/backing.rs

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing::{debug, info, warn};

use crate::config::StoreSection;
use crate::fs::FileSystem;
use crate::store::properties;
use crate::store::{Format, Scope};

/// Abstract persistence for scope namespaces.
///
/// Implementations must never write the legacy namespace.
pub trait BackingStore: Send + Sync {
    /// Whether the scope itself exists. Missing namespaces are not an error.
    fn scope_exists(&self, scope: &Scope) -> bool;

    /// Read one namespace. `None` means the namespace has no backing data.
    fn load(&self, scope: &Scope, format: Format) -> Option<BTreeMap<String, String>>;

    /// Replace the current-format namespace of `scope` with `values`.
    fn flush(&self, scope: &Scope, values: &BTreeMap<String, String>) -> Result<()>;
}

/// Stores namespaces as `.prefs` files under the project's settings folder.
///
/// With the default config the paths are:
///
/// - current: `<root>/.settings/com.eclipsesource.jshint.ui.prefs`
/// - legacy:  `<root>/.settings/com.eclipsesource.jshint.prefs`
#[derive(Debug)]
pub struct FileBackingStore<F: FileSystem> {
    fs: F,
    layout: StoreSection,
}

impl<F: FileSystem> FileBackingStore<F> {
    pub fn new(fs: F, layout: StoreSection) -> Self {
        Self { fs, layout }
    }

    /// Path of the settings file for `scope` in `format`.
    pub fn settings_file(&self, scope: &Scope, format: Format) -> PathBuf {
        let node = match format {
            Format::Current => &self.layout.node,
            Format::Legacy => &self.layout.legacy_node,
        };
        scope
            .root()
            .join(&self.layout.settings_dir)
            .join(format!("{node}.prefs"))
    }
}

impl<F: FileSystem> BackingStore for FileBackingStore<F> {
    fn scope_exists(&self, scope: &Scope) -> bool {
        self.fs.is_dir(scope.root())
    }

    fn load(&self, scope: &Scope, format: Format) -> Option<BTreeMap<String, String>> {
        let path = self.settings_file(scope, format);
        if !self.fs.is_file(&path) {
            return None;
        }

        match self.fs.read_to_string(&path) {
            Ok(text) => {
                let mut values = properties::parse(&text);
                values.remove(properties::VERSION_KEY);
                debug!(path = ?path, keys = values.len(), "read settings file");
                Some(values)
            }
            Err(err) => {
                warn!(path = ?path, error = %err, "unreadable settings file, treating as absent");
                None
            }
        }
    }

    fn flush(&self, scope: &Scope, values: &BTreeMap<String, String>) -> Result<()> {
        let path = self.settings_file(scope, Format::Current);
        let text = properties::render(values);
        self.fs.write(&path, text.as_bytes())?;
        info!(scope = %scope, path = ?path, "stored preferences (file)");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    scopes: HashSet<Scope>,
    namespaces: HashMap<(Scope, Format), BTreeMap<String, String>>,
    fail_flush: bool,
}

/// Keeps namespaces in memory only (lost when dropped).
///
/// Namespaces are keyed by the whole `Scope`, so two projects that share a
/// directory name stay separate.
#[derive(Debug, Default)]
pub struct MemoryBackingStore {
    state: Mutex<MemoryState>,
}

impl MemoryBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `scope` resolvable, with no namespaces yet.
    pub fn add_scope(&self, scope: &Scope) {
        self.lock().scopes.insert(scope.clone());
    }

    /// Seed a namespace directly. Also registers the scope.
    pub fn insert<I, K, V>(&self, scope: &Scope, format: Format, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = self.lock();
        state.scopes.insert(scope.clone());
        state.namespaces.insert(
            (scope.clone(), format),
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
    }

    /// Snapshot of a stored namespace.
    pub fn namespace(&self, scope: &Scope, format: Format) -> Option<BTreeMap<String, String>> {
        self.lock()
            .namespaces
            .get(&(scope.clone(), format))
            .cloned()
    }

    /// When set, every `flush` fails.
    pub fn set_fail_flush(&self, fail: bool) {
        self.lock().fail_flush = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl BackingStore for MemoryBackingStore {
    fn scope_exists(&self, scope: &Scope) -> bool {
        self.lock().scopes.contains(scope)
    }

    fn load(&self, scope: &Scope, format: Format) -> Option<BTreeMap<String, String>> {
        self.namespace(scope, format)
    }

    fn flush(&self, scope: &Scope, values: &BTreeMap<String, String>) -> Result<()> {
        let mut state = self.lock();
        if state.fail_flush {
            return Err(anyhow!("backing store rejected flush for '{}'", scope));
        }
        state
            .namespaces
            .insert((scope.clone(), Format::Current), values.clone());
        info!(scope = %scope, keys = values.len(), "stored preferences (memory)");
        Ok(())
    }
}
