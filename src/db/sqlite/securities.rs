//! Security catalog persistence
//!
//! The table is the durable copy of the seed catalog; runtime lookups go
//! through the in-memory `StockCatalog`. Rows load in insertion order so the
//! catalog's declaration order survives a round trip.

use crate::catalog::Security;
use crate::error::Result;
use rusqlite::{params, Connection};

/// Store securities in database (batch insert with transaction)
pub fn store_securities(conn: &mut Connection, securities: &[Security]) -> Result<()> {
    let tx = conn.transaction()?;

    // Replace the catalog wholesale
    tx.execute("DELETE FROM securities", [])?;

    let mut stmt = tx.prepare(
        "INSERT INTO securities (symbol, name, sector, industry, price, change, change_percent,
                                 volume, market_cap, pe, eps, high_52w, low_52w, dividend, beta,
                                 description, last_updated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
    )?;

    for s in securities {
        stmt.execute(params![
            s.symbol,
            s.name,
            s.sector,
            s.industry,
            s.price,
            s.change,
            s.change_percent,
            s.volume,
            s.market_cap,
            s.pe,
            s.eps,
            s.high_52w,
            s.low_52w,
            s.dividend,
            s.beta,
            s.description,
            s.last_updated,
        ])?;
    }

    drop(stmt);
    tx.commit()?;

    tracing::info!("Stored {} securities in database", securities.len());
    Ok(())
}

/// Load all securities in insertion order (used to populate the catalog on startup)
pub fn load_securities(conn: &Connection) -> Result<Vec<Security>> {
    let mut stmt = conn.prepare(
        "SELECT symbol, name, sector, industry, price, change, change_percent, volume,
                market_cap, pe, eps, high_52w, low_52w, dividend, beta, description, last_updated
         FROM securities ORDER BY id",
    )?;

    let securities = stmt
        .query_map([], |row| {
            Ok(Security {
                symbol: row.get(0)?,
                name: row.get(1)?,
                sector: row.get(2)?,
                industry: row.get(3)?,
                price: row.get(4)?,
                change: row.get(5)?,
                change_percent: row.get(6)?,
                volume: row.get(7)?,
                market_cap: row.get(8)?,
                pe: row.get(9)?,
                eps: row.get(10)?,
                high_52w: row.get(11)?,
                low_52w: row.get(12)?,
                dividend: row.get(13)?,
                beta: row.get(14)?,
                description: row.get(15)?,
                last_updated: row.get(16)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Loaded {} securities from database", securities.len());
    Ok(securities)
}

/// Get security count from database
pub fn count_securities(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM securities", [], |row| row.get(0))?;
    Ok(count)
}
