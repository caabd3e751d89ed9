// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod prefs;
pub mod store;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, OutputFormat};
use crate::config::load_for_project;
use crate::fs::RealFileSystem;
use crate::prefs::{ProjectPreferences, ResolvedConfig, resource_path};
use crate::store::{BackingStore, FileBackingStore, Scope};

pub use crate::errors::PrefsError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the file-backed preference store for `--project`
/// - the requested command, saving only when something changed
pub fn run(args: CliArgs, out: &mut dyn Write) -> Result<()> {
    let root = project_root(&args.project);
    let cfg = load_for_project(&root, args.config.as_deref())
        .with_context(|| format!("loading configuration for {:?}", root))?;

    let backing = FileBackingStore::new(RealFileSystem, cfg.store);
    let scope = Scope::from_root(root.clone());
    let mut prefs = ProjectPreferences::open(&backing, scope)?;

    debug!(command = ?args.command, source = %prefs.store().source(), "running command");

    match args.command {
        Command::Show { format } => {
            print_snapshot(out, &prefs.snapshot(), format)?;
            return Ok(());
        }
        Command::Check { path } => {
            let rel = project_relative(&root, &path)?;
            let state = if prefs.get_excluded(&rel) {
                "excluded"
            } else {
                "included"
            };
            writeln!(out, "{rel}: {state}")?;
            return Ok(());
        }
        Command::Enable => prefs.set_enabled(true),
        Command::Disable => prefs.set_enabled(false),
        Command::Exclude { paths } => {
            for path in paths {
                let rel = project_relative(&root, &path)?;
                prefs.set_excluded(&rel, true)?;
            }
        }
        Command::Include { paths } => {
            for path in paths {
                let rel = project_relative(&root, &path)?;
                prefs.set_excluded(&rel, false)?;
            }
        }
        Command::Globals { value } => prefs.set_globals(&value),
        Command::Options { value } => prefs.set_options(&value),
    }

    save_if_changed(&mut prefs)
}

fn save_if_changed<B: BackingStore + ?Sized>(prefs: &mut ProjectPreferences<'_, B>) -> Result<()> {
    if !prefs.has_changed() {
        info!("preferences unchanged, nothing to save");
        return Ok(());
    }
    prefs.save()?;
    info!(scope = %prefs.store().scope(), "preferences saved");
    Ok(())
}

fn project_root(project: &Path) -> PathBuf {
    project
        .canonicalize()
        .unwrap_or_else(|_| project.to_path_buf())
}

/// Resolve a CLI path argument to a scope-relative resource path.
///
/// Relative arguments are taken relative to the project root.
fn project_relative(root: &Path, path: &Path) -> Result<String> {
    let resolved = if path.is_absolute() {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    };

    match resource_path(root, &resolved) {
        Some(rel) => Ok(rel),
        None => bail!("{:?} is outside the project {:?}", path, root),
    }
}

fn print_snapshot(out: &mut dyn Write, snapshot: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Toml => {
            let text = toml::to_string(snapshot).context("serializing preferences")?;
            write!(out, "{text}")?;
        }
        OutputFormat::Text => {
            writeln!(out, "enabled:  {}", snapshot.enabled)?;
            if snapshot.excluded.is_empty() {
                writeln!(out, "excluded: (none)")?;
            } else {
                writeln!(out, "excluded:")?;
                for path in &snapshot.excluded {
                    writeln!(out, "  - {path}")?;
                }
            }
            writeln!(out, "globals:  {}", snapshot.globals)?;
            writeln!(out, "options:  {}", snapshot.options)?;
            writeln!(out, "source:   {}", snapshot.source)?;
        }
    }
    Ok(())
}
