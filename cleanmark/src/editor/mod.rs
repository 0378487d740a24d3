// cleanmark/src/editor/mod.rs
//! The interactive editor controller and its paste helpers.

pub mod controller;
pub mod paste;

pub use controller::{EditorController, EditorMode, EditorOptions, PasteMode, CLEANUP_DEBOUNCE};
pub use paste::PastePayload;
