// cleanmark/src/commands/clean.rs
//! Clean command implementation.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use cleanmark_core::{clean, CleanerConfig};

use crate::cli::{CleanCommand, PresetChoice};
use crate::commands::read_input;
use crate::ui::diff_viewer;
use crate::utils::clipboard::copy_to_clipboard;

/// Runs the `clean` subcommand.
pub fn run(cmd: CleanCommand, quiet: bool) -> Result<()> {
    info!("Starting cleanmark clean operation.");

    let config = resolve_config(&cmd)?;
    let input = read_input(&cmd.input_file)?;
    let cleaned = clean(&input, &config);

    debug!(
        "Content cleaned. Original length: {}, Cleaned length: {}",
        input.len(),
        cleaned.len()
    );

    handle_primary_output(&cmd, &input, &cleaned)?;

    if cmd.clipboard {
        match copy_to_clipboard(&cleaned) {
            Ok(()) => {
                if !quiet {
                    eprintln!("Cleaned content copied to clipboard.");
                }
            }
            Err(err) => eprintln!("Failed to copy to clipboard: {err}"),
        }
    }

    info!("Clean operation completed.");
    Ok(())
}

/// Builds the effective configuration: preset or config file, then the
/// `--strip`/`--keep` family overrides on top.
fn resolve_config(cmd: &CleanCommand) -> Result<CleanerConfig> {
    let mut config = match &cmd.config {
        Some(path) => CleanerConfig::load_from_file(path)?,
        None => match cmd.preset {
            PresetChoice::Paste => CleanerConfig::paste(),
            PresetChoice::Save => CleanerConfig::final_save(),
        },
    };

    for family in &cmd.strip {
        apply_family(&mut config, family, true)?;
    }
    for family in &cmd.keep {
        apply_family(&mut config, family, false)?;
    }

    config.validate()?;
    Ok(config)
}

fn apply_family(config: &mut CleanerConfig, family: &str, strip: bool) -> Result<()> {
    match family {
        "images" => config.remove_images = strip,
        "tables" => config.remove_tables = strip,
        "links" => config.remove_links = strip,
        "spans" => config.remove_span_tags = strip,
        "comments" => config.remove_comments = strip,
        "attributes" => config.remove_attributes = strip,
        "styles" => config.remove_inline_styles = strip,
        "nbsp" => {
            config.remove_successive_nbsp = strip;
            config.remove_tags_with_only_nbsp = strip;
        }
        other => bail!(
            "Unknown family '{other}'. Expected one of: images, tables, links, spans, comments, attributes, styles, nbsp."
        ),
    }
    Ok(())
}

fn handle_primary_output(cmd: &CleanCommand, input: &str, cleaned: &str) -> Result<()> {
    if let Some(path) = &cmd.output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if cmd.diff {
            diff_viewer::print_diff(input, cleaned, &mut file)?;
        } else {
            writeln!(file, "{cleaned}")?;
        }
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        if cmd.diff {
            diff_viewer::print_diff(input, cleaned, &mut writer)?;
        } else {
            writeln!(writer, "{cleaned}")?;
        }
    }
    Ok(())
}
