//! SQLite database module

mod kv;
mod migrations;
mod securities;

use crate::catalog::Security;
use crate::error::Result;
use crate::store::KeyValueStore;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// SQLite database wrapper
pub struct SqliteDb {
    conn: Mutex<Connection>,
}

impl SqliteDb {
    /// Open (or create) the database at `path` and bring it up to date
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL keeps readers unblocked while the ledgers rewrite
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;

        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    // ========== Security Methods ==========

    /// Store securities in database
    pub fn store_securities(&self, securities: &[Security]) -> Result<()> {
        let mut conn = self.conn.lock();
        securities::store_securities(&mut conn, securities)
    }

    /// Load all securities from database
    pub fn load_securities(&self) -> Result<Vec<Security>> {
        let conn = self.conn.lock();
        securities::load_securities(&conn)
    }

    /// Count securities in database
    pub fn count_securities(&self) -> Result<i64> {
        let conn = self.conn.lock();
        securities::count_securities(&conn)
    }
}

impl KeyValueStore for SqliteDb {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        kv::get(&conn, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        kv::set(&conn, key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        kv::remove(&conn, key)
    }
}
