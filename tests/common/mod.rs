#![allow(dead_code)]

pub use jshint_prefs_test_utils::builders::{OLD_SETTINGS_FILE, SETTINGS_FILE};
pub use jshint_prefs_test_utils::{ProjectFixture, SettingsFileBuilder, init_tracing};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
