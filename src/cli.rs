// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `jshint-prefs`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jshint-prefs",
    version,
    about = "Show and edit per-project JSHint preferences.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    /// Path to the config file (TOML).
    ///
    /// Default: `jshint-prefs.toml` in the project root, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JSHINT_PREFS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the effective preferences.
    Show {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Enable JSHint for the project.
    Enable,
    /// Disable JSHint for the project.
    Disable,
    /// Add paths to the exclusion list.
    Exclude {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Remove paths from the exclusion list.
    Include {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Replace the raw global declarations, e.g. "org: true, com: false".
    Globals { value: String },
    /// Replace the raw lint options, e.g. "bitwise: true, curly: true".
    Options { value: String },
    /// Report whether a resource is excluded.
    Check { path: PathBuf },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
