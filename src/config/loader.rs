// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// File name looked up in the project root when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "jshint-prefs.toml";

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the configuration for a project.
///
/// - An explicit path must exist and be valid.
/// - Otherwise `<project>/jshint-prefs.toml` is used when present.
/// - Otherwise defaults apply.
pub fn load_for_project(project_root: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = ?path, "loading explicit config");
        return load_and_validate(path);
    }

    let candidate = project_root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        debug!(path = ?candidate, "loading project config");
        return load_and_validate(candidate);
    }

    debug!("no config file found, using defaults");
    Ok(ConfigFile::default())
}
