//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where needed.  Configuration problems are rejected here,
//! at construction time, so the run loop itself never sees them.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core` APIs.
pub type CoreResult<T> = Result<T, CoreError>;
