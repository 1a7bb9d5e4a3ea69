//! Shared error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so configuration failures surface unchanged at every layer.

use thiserror::Error;

/// Errors produced by `fleet-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `fleet-core`.
pub type CoreResult<T> = Result<T, CoreError>;
