//! Error types for jettison CLI operations.
//!
//! Every variant is terminal for the current invocation: nothing is
//! retried, and the on-disk document is only ever written after all
//! in-memory mutation has succeeded.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::project::DocumentError;

/// The error type for jettison CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No `.xcodeproj` bundle was found under the given path.
    #[error("No .xcodeproj found under {}", path.display())]
    ProjectNotFound {
        /// The search root.
        path: PathBuf,
    },

    /// The project document could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The document bytes do not decode into a project graph.
    #[error("Cannot decode {}: {source}", path.display())]
    Decode {
        /// The document path.
        path: PathBuf,
        /// The underlying decode error.
        source: DocumentError,
    },

    /// Writing the updated document back failed.
    #[error("Cannot save {}: {source}", path.display())]
    Write {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// A specialized Result type for jettison operations.
pub type Result<T> = std::result::Result<T, Error>;
