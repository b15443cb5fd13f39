//! Database schema definitions

/// SQL schema for the database
///
/// The UNIQUE constraint on title is the only duplicate suppression in
/// the system: boundary overlap between listing pages can surface the
/// same article twice, and republished articles share their title.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    author TEXT,
    published_at TEXT NOT NULL,
    body TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_articles_published ON articles(published_at);
"#;

/// Initializes the database schema
///
/// Safe to call on every open; all statements are IF NOT EXISTS.
pub fn initialize_schema(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
