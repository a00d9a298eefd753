//! Bounded recency ledgers
//!
//! Both ledgers keep a capped, newest-first list under a fixed store key and
//! are rewritten whole on every mutation. Corrupt or missing persisted state
//! reads as empty rather than failing.

use crate::error::Result;
use crate::report::BacktestReport;
use crate::store::{KeyValueStore, StoreExt};
use std::sync::Arc;
use tracing::debug;

pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
pub const BACKTEST_HISTORY_KEY: &str = "backtest_history";

/// Most-recent-first list of selected symbols, capped and de-duplicated
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
}

impl RecentSearches {
    pub const MAX_ENTRIES: usize = 5;

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current entries, newest first
    pub fn list(&self) -> Vec<String> {
        self.store.get_json_or_default(RECENT_SEARCHES_KEY)
    }

    /// Promote `symbol` to the front, dropping any prior occurrence and
    /// truncating to the cap. Re-recording the front entry is a no-op for
    /// ordering and never grows the list.
    pub fn record(&self, symbol: &str) -> Result<()> {
        let symbol = symbol.to_uppercase();

        let mut entries = self.list();
        entries.retain(|s| s != &symbol);
        entries.insert(0, symbol);
        entries.truncate(Self::MAX_ENTRIES);

        self.store.set_json(RECENT_SEARCHES_KEY, &entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(RECENT_SEARCHES_KEY)
    }
}

/// Newest-first backtest report history, capped
pub struct BacktestHistory {
    store: Arc<dyn KeyValueStore>,
}

impl BacktestHistory {
    pub const MAX_ENTRIES: usize = 10;

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored reports, newest first
    pub fn list(&self) -> Vec<BacktestReport> {
        self.store.get_json_or_default(BACKTEST_HISTORY_KEY)
    }

    /// Prepend a report, evicting the oldest entries beyond the cap
    pub fn push(&self, report: &BacktestReport) -> Result<()> {
        let mut entries = self.list();
        entries.insert(0, report.clone());
        entries.truncate(Self::MAX_ENTRIES);

        self.store.set_json(BACKTEST_HISTORY_KEY, &entries)?;
        debug!("Backtest history holds {} reports", entries.len());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(BACKTEST_HISTORY_KEY)
    }
}
