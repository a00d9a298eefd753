//! Key/value persistence
//!
//! Backing table for the `KeyValueStore` surface; values are opaque strings
//! (JSON documents in practice).

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Get a value by key
pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(value)
}

/// Insert or replace a value
pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![key, value],
    )?;

    Ok(())
}

/// Delete a key; deleting an absent key is not an error
pub fn remove(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
    Ok(())
}
