// src/store/settings.rs

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::errors::{PrefsError, Result};
use crate::store::{BackingStore, Format, Namespace, Scope};

/// Pick the authoritative namespace for `scope`.
///
/// Order:
/// 1. the current-format namespace, if it holds any recognized key;
/// 2. the legacy namespace, if it holds any recognized key;
/// 3. an empty current-format namespace.
///
/// Fails only when the scope itself does not exist.
pub fn resolve_namespace<B>(backing: &B, scope: &Scope) -> Result<Namespace>
where
    B: BackingStore + ?Sized,
{
    if !backing.scope_exists(scope) {
        return Err(PrefsError::ScopeNotFound(format!(
            "{} ({:?})",
            scope.name(),
            scope.root()
        )));
    }

    for format in [Format::Current, Format::Legacy] {
        if let Some(values) = backing.load(scope, format) {
            let namespace = Namespace { format, values };
            if namespace.has_recognized_keys() {
                debug!(scope = %scope, %format, "resolved settings namespace");
                return Ok(namespace);
            }
        }
    }

    debug!(scope = %scope, "no settings found, using defaults");
    Ok(Namespace::empty(Format::Current))
}

/// In-memory view of one scope's settings.
///
/// Opened once per scope; reads never touch the backing store again. Setters
/// only count as changes when the effective value actually differs.
pub struct SettingsStore<'a, B: BackingStore + ?Sized> {
    backing: &'a B,
    scope: Scope,
    namespace: Namespace,
    dirty: bool,
}

impl<'a, B: BackingStore + ?Sized> SettingsStore<'a, B> {
    pub fn open(backing: &'a B, scope: Scope) -> Result<Self> {
        let namespace = resolve_namespace(backing, &scope)?;
        Ok(Self {
            backing,
            scope,
            namespace,
            dirty: false,
        })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Format the values were originally read from.
    pub fn source(&self) -> Format {
        self.namespace.format
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.namespace.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.namespace.values
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.namespace
            .values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Only `true` (any case) reads as true; other stored text reads as false.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.namespace.values.get(key) {
            Some(raw) => raw.trim().eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Missing keys compare equal to `""`.
    pub fn set_string(&mut self, key: &str, value: &str) {
        let current = self.namespace.values.get(key).map(String::as_str).unwrap_or("");
        if current == value {
            return;
        }
        self.put(key, value.to_string());
    }

    /// Missing keys compare equal to `false`.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        if self.get_bool(key, false) == value {
            return;
        }
        self.put(key, value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        if self.namespace.values.remove(key).is_some() {
            debug!(scope = %self.scope, key, "removed setting");
            self.dirty = true;
        }
    }

    pub fn has_changed(&self) -> bool {
        self.dirty
    }

    /// Write every in-memory pair to the current-format namespace.
    ///
    /// The dirty bit is only cleared on success.
    pub fn save(&mut self) -> Result<()> {
        self.backing
            .flush(&self.scope, &self.namespace.values)
            .map_err(|err| PrefsError::persistence(self.scope.name(), err))?;

        if self.namespace.format == Format::Legacy {
            info!(scope = %self.scope, "migrated legacy settings to current format");
            self.namespace.format = Format::Current;
        }
        self.dirty = false;
        Ok(())
    }

    fn put(&mut self, key: &str, value: String) {
        debug!(scope = %self.scope, key, value = %value, "setting changed");
        self.namespace.values.insert(key.to_string(), value);
        self.dirty = true;
    }
}
