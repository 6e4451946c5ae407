//! Error types for the `top` demo.
//!
//! User-input mistakes (bad flags or values) are not errors here: they are
//! reported on stderr and turned into a failing exit status by
//! [`crate::app::run`]. `TopError` covers everything else.

use thiserror::Error;

/// Failures that abort the demo outright.
#[derive(Debug, Error)]
pub enum TopError {
    /// The built-in flag table is malformed.
    #[error("invalid flag table: {0}")]
    Schema(#[from] argbind::SchemaError),
    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for demo results.
pub type Result<T, E = TopError> = std::result::Result<T, E>;
