// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    /// The scope itself could not be resolved. Missing keys never end up here.
    #[error("Scope not found: {0}")]
    ScopeNotFound(String),

    #[error("Failed to store preferences for scope '{scope}'")]
    Persistence {
        scope: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A path that the exclusion list cannot represent.
    #[error("Invalid exclusion path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PrefsError {
    pub fn persistence(scope: &str, source: anyhow::Error) -> Self {
        PrefsError::Persistence {
            scope: scope.to_string(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrefsError>;
