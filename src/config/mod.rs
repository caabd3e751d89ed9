// src/config/mod.rs

//! Configuration loading and validation for jshint-prefs.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like node naming (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_FILE, load_and_validate, load_for_project, load_from_path};
pub use model::{ConfigFile, StoreSection};
