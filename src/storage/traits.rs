//! Storage traits and error types

use thiserror::Error;

use crate::scrape::Article;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for article store implementations
///
/// The store owns duplicate suppression: titles are unique, and inserting
/// an already-stored title is silently a no-op. Callers learn how many
/// rows actually landed from the insert's return value.
pub trait ArticleStore {
    /// Inserts articles, ignoring duplicate titles
    ///
    /// # Returns
    ///
    /// The number of rows actually inserted
    fn insert_articles(&mut self, articles: &[Article]) -> StorageResult<usize>;

    /// Counts all stored articles
    fn count_articles(&self) -> StorageResult<i64>;
}
