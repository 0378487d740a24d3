// cleanmark/src/lib.rs
//! # CleanMark CLI Application
//!
//! This crate provides the command-line front-end for the CleanMark
//! cleaning engine, plus the interactive editor controller that host
//! surfaces embed to drive paste interception, dual-mode buffers and the
//! debounced cleanup.

pub mod cli;
pub mod commands;
pub mod editor;
pub mod logger;
pub mod ui;
pub mod utils;

// Re-export the editor controller surface.
pub use editor::{EditorController, EditorMode, EditorOptions, PasteMode, PastePayload};
