//! SQLite storage implementation

use rusqlite::{params, Connection};
use std::path::Path;

use crate::scrape::Article;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{ArticleStore, StorageResult};
use crate::Result;

const INSERT_ARTICLE_SQL: &str = "INSERT INTO articles (title, author, published_at, body)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(title) DO NOTHING";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `path` and ensures the schema
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl ArticleStore for SqliteStorage {
    fn insert_articles(&mut self, articles: &[Article]) -> StorageResult<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;

        for article in articles {
            let changed = tx.execute(
                INSERT_ARTICLE_SQL,
                params![
                    article.title,
                    article.author,
                    article.published_at.to_rfc3339(),
                    article.body,
                ],
            )?;
            if changed == 0 {
                tracing::debug!("Duplicate title dropped by store: {}", article.title);
            }
            inserted += changed;
        }

        tx.commit()?;
        Ok(inserted)
    }

    fn count_articles(&self) -> StorageResult<i64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn article(title: &str, author: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            author: author.map(str::to_string),
            published_at: DateTime::parse_from_rfc3339("2026-01-10T09:30:00+05:30").unwrap(),
            body: "Body text.".to_string(),
        }
    }

    #[test]
    fn test_insert_and_count() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        assert_eq!(storage.count_articles().unwrap(), 0);

        let inserted = storage
            .insert_articles(&[article("One", Some("A. Writer")), article("Two", None)])
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(storage.count_articles().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_titles_are_dropped() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();

        let first = storage.insert_articles(&[article("Same", None)]).unwrap();
        let second = storage
            .insert_articles(&[article("Same", Some("Someone Else"))])
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(storage.count_articles().unwrap(), 1);
    }

    #[test]
    fn test_null_author_roundtrip() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        storage.insert_articles(&[article("Wire story", None)]).unwrap();

        let author: Option<String> = storage
            .conn
            .query_row(
                "SELECT author FROM articles WHERE title = 'Wire story'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(author, None);
    }

    #[test]
    fn test_timestamp_stored_as_rfc3339() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        storage.insert_articles(&[article("Stamped", None)]).unwrap();

        let stamp: String = storage
            .conn
            .query_row(
                "SELECT published_at FROM articles WHERE title = 'Stamped'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stamp, "2026-01-10T09:30:00+05:30");
    }
}
