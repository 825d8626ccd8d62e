//! Base error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `#[from]` variants or wrap it where a cleaner message exists at the
//! call site.

use thiserror::Error;

/// Errors produced by `courier-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed time {0:?}: expected HH:MM with minutes 00-59")]
    MalformedTime(String),
}

/// Shorthand result type for `courier-core`.
pub type CoreResult<T> = Result<T, CoreError>;
