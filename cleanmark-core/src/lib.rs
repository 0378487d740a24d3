// cleanmark-core/src/lib.rs
//! # CleanMark Core Library
//!
//! `cleanmark-core` provides the fundamental, host-independent logic for
//! cleaning and re-formatting HTML fragments authored in rich-text editors.
//! It defines the `CleanerConfig` value struct describing one cleaning run,
//! implements the ordered cleaning pipeline behind a single fail-safe
//! `clean` entry point, and re-exports the plain-text structural converter.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input strings based on a configuration, without
//! concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `CleanerConfig` and the paste / final-save presets.
//! * `engine`: The ordered cleaning pipeline and its public entry points.
//! * `dom`: Element-level passes over a parsed tree (attributes, tag
//!   families, comments).
//! * `text`: String-level passes (nbsp collapsing, spacer removal,
//!   best-effort character encoding).
//! * `formatter`: Tag-boundary re-indentation.
//! * `errors`: The internal `CleanError` type.
//!
//! ## Public API
//!
//! **Configuration**
//!
//! * [`CleanerConfig`]: All toggles for one run, with partial-merge YAML
//!   loading via [`CleanerConfig::load_from_file`].
//! * [`CleanerConfig::paste`] / [`CleanerConfig::final_save`]: the two
//!   presets used by the editor.
//!
//! **Cleaning**
//!
//! * [`clean`]: General entry point; fail-safe (returns input on error).
//! * [`clean_for_paste`] / [`clean_for_final_save`]: preset wrappers.
//! * [`convert_plain_text_to_html`]: standalone structural converter,
//!   idempotent on input that already contains tags.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleanmark_core::{clean, CleanerConfig};
//!
//! let raw = "<p class=\"intro\" data-tracking=\"42\">Welcome!</p>";
//! let cleaned = clean(raw, &CleanerConfig::final_save());
//!
//! assert!(!cleaned.contains("class"));
//! assert!(!cleaned.contains("data-tracking"));
//! assert!(cleaned.contains("Welcome!"));
//! ```
//!
//! ## Error Handling
//!
//! The pipeline reports internal failures through `CleanError`, but the
//! public `clean` call never surfaces them: it logs a warning and returns
//! the original input. Config loading uses `anyhow::Error` with context,
//! as those failures are actionable by the caller.
//!
//! ## Design Principles
//!
//! * **Stateless:** A configuration is a pure value; nothing is retained
//!   across calls.
//! * **Fail-safe:** A buggy or unparseable fragment degrades to a no-op,
//!   never to data loss or a crash in the editing surface.
//! * **Testable:** Every pass is a pure string-in/string-out function.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
mod dom;
pub mod engine;
pub mod errors;
mod formatter;
mod text;

/// Re-exports the configuration type and presets.
pub use config::CleanerConfig;

/// Re-exports the custom error type for clear error reporting.
pub use errors::CleanError;

/// Re-exports the cleaning entry points.
pub use engine::{clean, clean_for_final_save, clean_for_paste};

/// Re-exports the structural converter from its dedicated crate.
pub use cleanmark_structure::{convert_plain_text_to_html, looks_like_html, DOCUMENT_FOOTER};
