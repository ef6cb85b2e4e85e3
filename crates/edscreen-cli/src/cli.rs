//! CLI argument definitions for the ED screener.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use edscreen_cli::run_config::SourceOverride;

#[derive(Parser)]
#[command(
    name = "edscreen",
    version,
    about = "ED screener - check substances against EU regulatory lists",
    long_about = "Screen a list of CAS numbers against EU chemical regulatory lists.\n\n\
                  Matches every substance against the C&L inventory, the EFSA and ECHA\n\
                  endocrine disruptor lists, SVHC, PACT, CoRAP, BPR and food lists, and\n\
                  writes one results row and one summary row per substance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Screen an input list and write results.
    Screen(ScreenArgs),

    /// List the known sources and their default layouts.
    Sources,

    /// List the hazard classification categories.
    Categories,
}

#[derive(Parser)]
pub struct ScreenArgs {
    /// Input list (.csv, .xlsx, .xls, .ods) with a `CAS` column.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML run configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Folder searched for source snapshots (default: <INPUT dir>/databases).
    #[arg(long = "databases", value_name = "DIR")]
    pub databases: Option<PathBuf>,

    /// Source file for one list, e.g. `efsa-ppp=lists/ppp.xlsx`. Repeatable.
    #[arg(long = "source", value_name = "KIND=PATH")]
    pub sources: Vec<SourceOverride>,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Table format of the results and summary files.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Screen and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
