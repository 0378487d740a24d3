// cleanmark/src/main.rs
//! CleanMark entry point.
//!
//! Parses the CLI, initializes logging and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;

use cleanmark::cli::{Cli, Commands};
use cleanmark::commands::{clean, convert};
use cleanmark::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Clean(cmd) => clean::run(cmd, args.quiet),
        Commands::Convert(cmd) => convert::run(cmd),
    }
}
