//! CLI argument definitions for the XTbML converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xtbml",
    version,
    about = "XTbML converter - Turn actuarial rate tables into JSON",
    long_about = "Convert XTbML mortality and rate tables to normalized JSON.\n\n\
                  Converts whole directories file by file, then lists and\n\
                  inspects the converted tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Convert every XTbML file in a directory to JSON.
    Convert(ConvertArgs),

    /// List converted tables, optionally filtered by a search query.
    List(ListArgs),

    /// Show the classification, metadata and leading rates of one table.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory containing XTbML XML files.
    #[arg(long = "src", value_name = "DIR", default_value = "xml")]
    pub src: PathBuf,

    /// Directory for JSON output (created when missing).
    #[arg(long = "dst", value_name = "DIR", default_value = "json")]
    pub dst: PathBuf,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Directory containing converted JSON tables.
    #[arg(value_name = "DIR", default_value = "json")]
    pub dir: PathBuf,

    /// Whitespace-separated terms that must all match a table.
    #[arg(long = "query", value_name = "TERMS")]
    pub query: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Converted JSON table to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of rate entries to print per table.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
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
