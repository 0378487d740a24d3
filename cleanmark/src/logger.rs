// cleanmark/src/logger.rs
//! Logger initialization for the CLI.

use log::LevelFilter;

/// Initializes env_logger, optionally forcing a level for the cleanmark
/// crates while leaving `RUST_LOG` in charge of everything else.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder
            .filter_module("cleanmark", level)
            .filter_module("cleanmark_core", level)
            .filter_module("cleanmark_structure", level);
    }
    // Ignore double-init in tests.
    let _ = builder.format_timestamp_secs().try_init();
}
