// cleanmark/src/commands/convert.rs
//! Convert command implementation: plain text in, structured HTML out.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};

use cleanmark_core::convert_plain_text_to_html;

use crate::cli::ConvertCommand;
use crate::commands::read_input;

/// Runs the `convert` subcommand.
pub fn run(cmd: ConvertCommand) -> Result<()> {
    info!("Starting cleanmark convert operation.");

    let input = read_input(&cmd.input_file)?;
    let converted = convert_plain_text_to_html(&input);

    if let Some(path) = &cmd.output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{converted}")?;
    } else {
        writeln!(io::stdout().lock(), "{converted}")?;
    }

    info!("Convert operation completed.");
    Ok(())
}
