//! Clap derive structures for the `cwmp` CLI.
//!
//! Also compiled by `build.rs` for man pages, so nothing here may depend
//! on anything but clap and clap_complete.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cwmp -- inspect and edit TR-069 parameter documents
#[derive(Debug, Parser)]
#[command(
    name = "cwmp",
    version,
    about = "Inspect, validate and edit TR-069 (CWMP) parameter documents",
    long_about = "Works on whole parameter trees of the TR-098 InternetGatewayDevice\n\
        and TR-181 Device roots, including the TR-104 voice and TR-196 femto\n\
        services mounted under Services. Documents are read from and written\n\
        to XML, JSON or YAML, chosen by file extension.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "CWMP_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one record per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Target encoding of `convert` and `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Xml,
    Json,
    Yaml,
    /// CWMP ParameterList of every set parameter
    Params,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported root data models
    Models,

    /// Show the parameter schema of a data model
    Schema(SchemaArgs),

    /// Read parameter values (GetParameterValues)
    Get(GetArgs),

    /// List parameter names and writability (GetParameterNames)
    #[command(alias = "ls")]
    Names(NamesArgs),

    /// Set parameter values atomically (SetParameterValues)
    Set(SetArgs),

    /// Add a table entry (AddObject)
    Add(ObjectArgs),

    /// Delete a table entry (DeleteObject)
    #[command(alias = "rm")]
    Delete(ObjectArgs),

    /// Check a document against declared constraints
    Validate(ValidateArgs),

    /// Show parameter-level differences between two documents
    Diff(DiffArgs),

    /// Re-encode a document
    Convert(ConvertArgs),

    /// Create an empty document carrying the standard defaults
    New(NewArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Write the result here instead of back to the input file
    #[arg(long, short = 'w', value_name = "OUT")]
    pub write_to: Option<PathBuf>,
}

// ── Per-Command Arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Data model: tr098 or tr181 [default: from config]
    pub model: Option<String>,

    /// Only rows whose path starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// List object paths instead of parameters
    #[arg(long)]
    pub objects: bool,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Document to read
    pub file: PathBuf,

    /// Parameter or partial (trailing '.') paths [default: whole tree]
    pub paths: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NamesArgs {
    /// Document to read
    pub file: PathBuf,

    /// Object or parameter path [default: whole tree]
    pub path: Option<String>,

    /// Only the immediate children of PATH
    #[arg(long, short = 'n')]
    pub next_level: bool,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Document to modify
    pub file: PathBuf,

    /// Assignments as NAME=VALUE
    #[arg(required = true, value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct ObjectArgs {
    /// Document to modify
    pub file: PathBuf,

    /// Table path for add (`...Host.`), entry path for delete (`...Host.2.`)
    pub path: String,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document to check
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline document
    pub old: PathBuf,

    /// Document to compare against the baseline
    pub new: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Document to read
    pub file: PathBuf,

    /// Target encoding
    #[arg(long, short = 't')]
    pub to: Encoding,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Data model: tr098 or tr181 [default: from config]
    pub model: Option<String>,

    /// Encoding when printing to stdout
    #[arg(long, short = 't', default_value = "xml")]
    pub to: Encoding,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
