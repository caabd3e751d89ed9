#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jshint_prefs::config::StoreSection;
use jshint_prefs::fs::RealFileSystem;
use jshint_prefs::store::{FileBackingStore, Format, Scope};
use tempfile::TempDir;

/// Settings file name of the current format, with default config.
pub const SETTINGS_FILE: &str = "com.eclipsesource.jshint.ui.prefs";
/// Settings file name of the legacy format, with default config.
pub const OLD_SETTINGS_FILE: &str = "com.eclipsesource.jshint.prefs";

/// Builder for `.prefs` file contents, written the way Eclipse writes them.
pub struct SettingsFileBuilder {
    lines: Vec<String>,
}

impl SettingsFileBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec!["eclipse.preferences.version=1".to_string()],
        }
    }

    /// The fixture used across the preference tests.
    pub fn example() -> Self {
        Self::new()
            .line("enabled=true")
            .line("exclude=js/test.js")
            .line(r"globals=org\: true, com\: false")
            .line(r"options=bitwise\: true, curly\: true, eqnull\: true")
    }

    /// Append a raw, already-escaped line.
    pub fn line(mut self, raw: &str) -> Self {
        self.lines.push(raw.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for SettingsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A throwaway project directory with a `test.js` file in its root.
pub struct ProjectFixture {
    dir: TempDir,
    root: PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("test").tempdir()?;
        let root = dir.path().canonicalize()?;
        fs::write(root.join("test.js"), "test")?;
        Ok(Self { dir, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scope(&self) -> Scope {
        Scope::from_root(self.root.clone())
    }

    pub fn backing(&self) -> FileBackingStore<RealFileSystem> {
        FileBackingStore::new(RealFileSystem, StoreSection::default())
    }

    pub fn settings_path(&self, format: Format) -> PathBuf {
        let name = match format {
            Format::Current => SETTINGS_FILE,
            Format::Legacy => OLD_SETTINGS_FILE,
        };
        self.root.join(".settings").join(name)
    }

    /// Write the example settings file in the given format.
    pub fn with_example_settings(self, format: Format) -> Result<Self> {
        self.write_settings(format, &SettingsFileBuilder::example().build())?;
        Ok(self)
    }

    pub fn write_settings(&self, format: Format, contents: &str) -> Result<()> {
        let path = self.settings_path(format);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {:?}", path))?;
        Ok(())
    }

    pub fn read_settings(&self, format: Format) -> Option<String> {
        fs::read_to_string(self.settings_path(format)).ok()
    }

    /// Keep the directory alive for as long as the fixture.
    pub fn temp_dir(&self) -> &TempDir {
        &self.dir
    }
}
