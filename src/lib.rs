//! Dateline: a date-targeted news archive scraper
//!
//! This crate locates every article a news archive published on one target
//! date, when the archive only exposes paginated listings in approximate
//! reverse-chronological order. It discovers the unknown page count with an
//! elastic search over pagination controls, binary-searches per-page date
//! ranges for a page containing the target date, collects spillover across
//! page boundaries, and stores the resolved articles in SQLite.

pub mod config;
pub mod dates;
pub mod robots;
pub mod scrape;
pub mod search;
pub mod storage;

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for dateline operations
///
/// Every fatal condition is a distinct variant so callers and tests can
/// match on kind rather than on message text. The only locally recovered
/// conditions are transient fetch retries (inside the fetcher) and a
/// failed robots.txt fetch (fail-open inside the policy gate).
#[derive(Debug, Error)]
pub enum DatelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transient failures exhausted the retry budget.
    #[error("Fetch failed for {url} after {attempts} attempts: {reason}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        reason: String,
    },

    /// Non-retryable HTTP failure (4xx, malformed response body, ...).
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// Fetched content lacks the structure the extractor expects.
    #[error("Structural parse error for {url}: {message}")]
    StructuralParse { url: String, message: String },

    /// A probed page yielded zero extractable dates, or pagination
    /// controls yielded zero numeric tokens.
    #[error("No usable data: {context}")]
    NoData { context: String },

    /// The exclusion policy forbids the listing path.
    #[error("Robots policy denies fetching {url}")]
    PolicyDenied { url: String },

    /// No page or record satisfies the target date anywhere in range.
    #[error("No records found for {date}")]
    NoMatch { date: NaiveDate },

    /// Every located record was inaccessible at detail-fetch time.
    #[error("All {total} records for {date} were inaccessible")]
    AllUnavailable { date: NaiveDate, total: usize },

    #[error("Unrecognized date {input:?}")]
    InvalidDate { input: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for dateline operations
pub type Result<T> = std::result::Result<T, DatelineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use search::{DateRange, ListingSource};
pub use storage::ArticleStore;
