// cleanmark/src/commands/mod.rs
pub mod clean;
pub mod convert;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Reads the whole input from a file, or stdin when no path is given.
pub(crate) fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
