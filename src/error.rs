//! Error types for the input-staging boundary.
//!
//! The digest core itself has no recoverable failures: allocation failure
//! aborts through the global allocator, and state misuse (hashing before
//! initialization, reusing a finalized state) is unrepresentable because
//! every hash owns a freshly constructed [`crate::Sha1State`].

use thiserror::Error;

/// Errors surfaced while staging input for the digest core.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened or read.
    #[error("Can't open file: {path}")]
    Input {
        /// Path the caller asked to stage.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
