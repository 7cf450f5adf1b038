//! Error Types
//!
//! One enum per concern so callers can match on what actually went wrong.

use thiserror::Error;

/// Result alias for catalog and favorites operations
pub type WishResult<T> = Result<T, WishError>;

/// Catalog and favorites errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishError {
    #[error("unknown wish item: {0}")]
    UnknownItem(u32),
    #[error("duplicate wish item id: {0}")]
    DuplicateItem(u32),
    #[error("wish item {0} has an empty name")]
    EmptyName(u32),
}

/// Why a remote quote could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("no quote received")]
    Empty,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_ms must be greater than zero")]
    ZeroTick,
    #[error("snowflake_count {count} exceeds the maximum of {max}")]
    TooManySnowflakes { count: usize, max: usize },
    #[error("quote_endpoint must not be blank")]
    BlankEndpoint,
    #[error(transparent)]
    Catalog(#[from] WishError),
}
