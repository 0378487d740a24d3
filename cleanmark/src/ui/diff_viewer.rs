// cleanmark/src/ui/diff_viewer.rs
//! Unified diff rendering for the `--diff` flag.
//!
//! Highlights exactly what the cleaner removed (`-`) and produced (`+`).

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use std::io::Write;

/// Writes a line-oriented diff of `original` vs `cleaned` to `writer`.
pub fn print_diff<W: Write>(original: &str, cleaned: &str, writer: &mut W) -> Result<()> {
    let patch = create_patch(original, cleaned);
    writeln!(writer, "--- Cleanup Diff ---")?;

    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changes += 1;
                    write_line(writer, "- ", s)?;
                }
                DiffLine::Insert(s) => {
                    changes += 1;
                    write_line(writer, "+ ", s)?;
                }
                DiffLine::Context(s) => write_line(writer, "  ", s)?,
            }
        }
    }

    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}

fn write_line<W: Write>(writer: &mut W, prefix: &str, line: &str) -> Result<()> {
    write!(writer, "{}{}", prefix, line)?;
    if !line.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}
