//! Error types for the Griyaku state core.
//!
//! This module defines the centralized error type [`GriyakuError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Griyaku state operations.
///
/// Errors here are almost entirely a storage-layer concern: the stores
/// themselves are total over their inputs, and the favorites store swallows
/// persistence failures rather than surfacing them (favorites are a
/// convenience feature, not critical data). The variants exist so the storage
/// backends can report *why* a load or save failed to whoever does care,
/// which in practice is the warn-level log.
#[derive(Debug, Error)]
pub enum GriyakuError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to a persistence backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Griyaku operations.
///
/// This is a type alias for `std::result::Result<T, GriyakuError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, GriyakuError>;
