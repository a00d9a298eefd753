//! SQLite database migrations

use crate::error::Result;
use rusqlite::Connection;

/// Apply any migrations not yet recorded in the migrations table
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    run_migration(conn, "001_securities", CREATE_SECURITIES_TABLE)?;
    run_migration(conn, "002_kv_store", CREATE_KV_STORE_TABLE)?;

    tracing::info!("Database migrations completed");
    Ok(())
}

fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM migrations WHERE name = ?)",
        [name],
        |row| row.get(0),
    )?;

    if !exists {
        tracing::info!("Running migration: {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    }

    Ok(())
}

const CREATE_SECURITIES_TABLE: &str = r#"
CREATE TABLE securities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    symbol TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    sector TEXT NOT NULL,
    industry TEXT NOT NULL,
    price REAL NOT NULL,
    change REAL NOT NULL,
    change_percent REAL NOT NULL,
    volume INTEGER NOT NULL,
    market_cap TEXT NOT NULL,
    pe REAL NOT NULL,
    eps REAL NOT NULL,
    high_52w REAL NOT NULL,
    low_52w REAL NOT NULL,
    dividend REAL NOT NULL,
    beta REAL NOT NULL,
    description TEXT NOT NULL,
    last_updated TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_securities_symbol ON securities(symbol);
"#;

const CREATE_KV_STORE_TABLE: &str = r#"
CREATE TABLE kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
