//! CLI argument definitions
//!
//! All Clap derive structs for `yamlenv` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Flatten hierarchical YAML configuration into environment variables.
#[derive(Parser, Debug)]
#[command(name = "yamlenv", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "YAMLENV_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the variables a configuration file flattens to.
    Export(ExportArgs),

    /// Export a configuration file, then print one variable.
    Get(GetArgs),

    /// Export a configuration file, then run a command in that environment.
    Exec(ExecArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Configuration source shared by every command that loads a file.
#[derive(Args, Debug)]
pub struct ConfigSource {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "YAMLENV_CONFIG")]
    pub config: PathBuf,
}

/// Arguments for `export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Output format.
    #[arg(short, long, default_value = "shell")]
    pub format: ExportFormat,
}

/// Arguments for `get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Variable name, matched exactly (exported names are upper-case).
    pub name: String,

    #[command(flatten)]
    pub source: ConfigSource,

    /// Value to print when the variable is not set.
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for `exec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Command to run, followed by its arguments.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Rendering of exported variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// `export NAME='value'` lines for `eval` in a POSIX shell.
    #[default]
    Shell,
    /// `NAME='value'` lines for dotenv loaders.
    Dotenv,
    /// A single JSON object.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
