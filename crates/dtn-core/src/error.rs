//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `DtnError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The base error type shared by the `dtn-*` crates.
#[derive(Debug, Error)]
pub enum DtnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dtn-core`.
pub type DtnResult<T> = Result<T, DtnError>;
