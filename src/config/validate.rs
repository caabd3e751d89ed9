// src/config/validate.rs

use crate::config::model::{ConfigFile, StoreSection};
use crate::errors::{PrefsError, Result};

/// Check the semantic invariants that serde cannot express.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_store(&cfg.store)?;
    Ok(())
}

fn validate_store(store: &StoreSection) -> Result<()> {
    if store.settings_dir.as_os_str().is_empty() {
        return Err(PrefsError::ConfigError(
            "[store].settings_dir must not be empty".to_string(),
        ));
    }
    if store.settings_dir.is_absolute() {
        return Err(PrefsError::ConfigError(format!(
            "[store].settings_dir must be relative to the project (got {:?})",
            store.settings_dir
        )));
    }

    validate_node_name("node", &store.node)?;
    validate_node_name("legacy_node", &store.legacy_node)?;

    if store.node == store.legacy_node {
        return Err(PrefsError::ConfigError(format!(
            "[store].node and [store].legacy_node must differ (both '{}')",
            store.node
        )));
    }

    Ok(())
}

fn validate_node_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PrefsError::ConfigError(format!(
            "[store].{field} must not be empty"
        )));
    }
    if name.contains(['/', '\\']) {
        return Err(PrefsError::ConfigError(format!(
            "[store].{field} must not contain path separators (got '{name}')"
        )));
    }
    Ok(())
}
