// cleanmark/src/cli.rs
//! This file defines the command-line interface (CLI) for the cleanmark
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleanmark",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean and re-format rich-text editor HTML",
    long_about = "Cleanmark is a command-line utility for cleaning HTML fragments produced by rich-text editors: it strips disallowed attributes, inline styles, classes and ids, removes or unwraps unwanted tag families, collapses nbsp noise, and re-indents the result. Plain-text instructional documents can be converted into a structured HTML skeleton.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the cleanmark crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleanmark` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cleans an HTML fragment from a file or stdin.
    #[command(about = "Cleans an HTML fragment from a file or stdin.")]
    Clean(CleanCommand),

    /// Converts a plain-text instructional document into structured HTML.
    #[command(about = "Converts a plain-text instructional document into structured HTML.")]
    Convert(ConvertCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write cleaned output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Select the cleaning preset to start from.
    #[arg(long = "preset", value_name = "PRESET", default_value = "save", help = "Select a cleaning preset ('paste' or 'save').")]
    pub preset: PresetChoice,

    /// Path to a custom cleaner configuration file (YAML, partial merge).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom cleaner configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Additionally strip these families (comma-separated).
    #[arg(long, short = 's', value_delimiter = ',', help = "Additionally strip these families (comma-separated): images, tables, links, spans, comments, attributes, styles, nbsp.")]
    pub strip: Vec<String>,

    /// Keep these families even if the preset strips them (comma-separated).
    #[arg(long, short = 'k', value_delimiter = ',', help = "Keep these families even if the preset strips them (comma-separated).")]
    pub keep: Vec<String>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Copy cleaned output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy cleaned output to the system clipboard.")]
    pub clipboard: bool,
}

/// Arguments for the `convert` command.
#[derive(Parser, Debug)]
pub struct ConvertCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write converted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Enum for selecting the cleaning preset.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum PresetChoice {
    /// The paste-time preset: converts plain text, strips images.
    Paste,
    /// The final-save preset: keeps links, tables and images.
    Save,
}
