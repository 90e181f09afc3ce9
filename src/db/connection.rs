/// Database connection management
///
/// One `Database` owns exactly one SQLite connection. Callers construct it
/// at their composition root and pass it by reference to every finder.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// A single connection, shared by every record type for the lifetime of the handle
const MAX_CONNECTIONS: u32 = 1;

/// Schema applied to fixture databases
const SCHEMA: &str = include_str!("schema.sql");

/// Data-access handle wrapping the one connection
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl Database {
    /// Open the database file at `db_path`
    ///
    /// The file is created if missing, but tables are not: schema is
    /// provisioned outside this crate (see [`Database::initialize_schema`]).
    ///
    /// # Examples
    /// ```no_run
    /// use aa_questions_lib::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::open("questions.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .disable_statement_logging();

        let pool = Self::connect(options).await?;
        info!(path = %db_path.display(), "opened questions database");

        Ok(Self { pool, db_path })
    }

    /// Open a private in-memory database with the fixture schema applied
    ///
    /// Every call yields an independent database, which keeps tests isolated.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .foreign_keys(true)
            .disable_statement_logging();

        let db = Self {
            pool: Self::connect(options).await?,
            db_path: PathBuf::from(":memory:"),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    async fn connect(options: SqliteConnectOptions) -> Result<SqlitePool> {
        // The connection must never be reaped: an in-memory database lives
        // only as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(pool)
    }

    /// Create the five tables and their indexes if they don't exist
    pub async fn initialize_schema(&self) -> Result<()> {
        // raw_sql runs the whole multi-statement script, comments included
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;

        debug!(path = %self.db_path.display(), "schema initialized");
        Ok(())
    }

    /// Get reference to the underlying pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close the connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Row counts for each table
    pub async fn stats(&self) -> Result<TableStats> {
        let (users, questions, replies, follows, likes): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM users),
                    (SELECT COUNT(*) FROM questions),
                    (SELECT COUNT(*) FROM replies),
                    (SELECT COUNT(*) FROM question_follows),
                    (SELECT COUNT(*) FROM question_likes)
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        Ok(TableStats {
            users,
            questions,
            replies,
            follows,
            likes,
        })
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TableStats {
    pub users: i64,
    pub questions: i64,
    pub replies: i64,
    pub follows: i64,
    pub likes: i64,
}
