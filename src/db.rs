use crate::store::UserRecord;
use rusqlite::{params, Connection, OptionalExtension, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::info;

/// Shared SQLite handle backing the option store and the user directory.
pub struct DbClient {
    db_path: String,
    conn: Mutex<Connection>,
}

impl DbClient {
    pub fn new(db_path: impl Into<String>) -> Result<Self> {
        let db_path = db_path.into();
        let conn = Connection::open(&db_path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self {
            db_path,
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            db_path: ":memory:".to_string(),
            conn: Mutex::new(Connection::open_in_memory()?),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS options (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                login TEXT NOT NULL,
                email TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
            [],
        )?;

        info!("SQLite database initialized at {}", self.db_path);
        Ok(())
    }

    pub fn get_option(&self, name: &str) -> Result<Option<String>> {
        self.conn()
            .prepare_cached("SELECT value FROM options WHERE name = ?1")?
            .query_row(params![name], |row| row.get(0))
            .optional()
    }

    pub fn update_option(&self, name: &str, value: &str) -> Result<()> {
        self.conn()
            .prepare_cached(
                "INSERT INTO options (name, value) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            )?
            .execute(params![name, value])?;
        Ok(())
    }

    pub fn delete_option(&self, name: &str) -> Result<bool> {
        let removed = self
            .conn()
            .prepare_cached("DELETE FROM options WHERE name = ?1")?
            .execute(params![name])?;
        Ok(removed > 0)
    }

    pub fn insert_user(&self, login: &str, email: &str) -> Result<u64> {
        let conn = self.conn();
        conn.prepare_cached("INSERT INTO users (login, email) VALUES (?1, ?2)")?
            .execute(params![login, email])?;
        row_id(conn.last_insert_rowid())
    }

    pub fn list_users(&self) -> Result<Vec<UserRecord>> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached("SELECT id, login, email FROM users ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(UserRecord {
                id: row_id(row.get(0)?)?,
                login: row.get(1)?,
                email: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    /// Returns `false` when no user with `id` existed.
    pub fn delete_user(&self, id: u64) -> Result<bool> {
        let removed = self
            .conn()
            .prepare_cached("DELETE FROM users WHERE id = ?1")?
            .execute(params![sql_id(id)?])?;
        Ok(removed > 0)
    }
}

fn row_id(id: i64) -> Result<u64> {
    u64::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))
}

fn sql_id(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
