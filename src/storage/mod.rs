//! Storage module for persisting scraped articles
//!
//! This module handles all database operations:
//! - SQLite database initialization and schema management
//! - Article persistence with insert-or-ignore-on-duplicate-title
//!   semantics
//!
//! Duplicate suppression lives entirely here, in the UNIQUE constraint on
//! the title column; the search core never dedups beyond link identity.

mod schema;
mod sqlite;
mod traits;

pub use schema::{initialize_schema, SCHEMA_SQL};
pub use sqlite::SqliteStorage;
pub use traits::{ArticleStore, StorageError, StorageResult};

use std::path::Path;

use crate::Result;

/// Initializes or opens the article database
pub fn open_storage(path: &Path) -> Result<SqliteStorage> {
    SqliteStorage::new(path)
}
