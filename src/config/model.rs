// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [store]
/// settings_dir = ".settings"
/// node = "com.eclipsesource.jshint.ui"
/// legacy_node = "com.eclipsesource.jshint"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Where the settings files live, from `[store]`.
    #[serde(default)]
    pub store: StoreSection,
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Folder, relative to the project root, holding the `.prefs` files.
    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,

    /// Node name of the current-format settings file (without `.prefs`).
    #[serde(default = "default_node")]
    pub node: String,

    /// Node name of the read-only legacy settings file.
    #[serde(default = "default_legacy_node")]
    pub legacy_node: String,
}

fn default_settings_dir() -> PathBuf {
    PathBuf::from(".settings")
}

fn default_node() -> String {
    "com.eclipsesource.jshint.ui".to_string()
}

fn default_legacy_node() -> String {
    "com.eclipsesource.jshint".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            node: default_node(),
            legacy_node: default_legacy_node(),
        }
    }
}
