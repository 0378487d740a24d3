//! errors.rs - Custom error types for the cleanmark-core library.
//!
//! These errors are internal to the pipeline: the public `clean` entry
//! point never surfaces them, falling back to the original input instead.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cleanmark-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanError {
    #[error("Failed to serialize cleaned markup: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("Cleaned markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Parsed document tree has no body element")]
    MissingBody,

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
