use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::Entry;
use crate::db::schema::SQLITE_INIT;
use crate::error::ScrawlError;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct EntryStorage {
    pool: SqlitePool,
}

impl EntryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and return
    /// a pooled storage handle.
    pub async fn connect(database_url: &str) -> Result<Self, ScrawlError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ScrawlError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All entries, newest (highest id) first.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, ScrawlError> {
        let rows = sqlx::query_as("SELECT title, text FROM entries ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert one entry and commit. Entries are immutable once stored; there
    /// is no update or delete path.
    pub async fn insert_entry(&self, title: &str, text: &str) -> Result<(), ScrawlError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO entries (title, text) VALUES (?, ?)")
            .bind(title)
            .bind(text)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
