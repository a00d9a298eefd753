//! Application state management

use crate::catalog::{seed_securities, StockCatalog};
use crate::db::sqlite::SqliteDb;
use crate::engine::{BacktestEngine, SimulatedEngine};
use crate::error::Result;
use crate::ledger::{BacktestHistory, RecentSearches};
use crate::store::{KeyValueStore, MemoryStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Application state shared across all user actions
pub struct AppState {
    /// Key/value store backing the ledgers
    pub store: Arc<dyn KeyValueStore>,

    /// Security directory
    pub catalog: Arc<StockCatalog>,

    /// Backtest computation adapter
    pub engine: Arc<dyn BacktestEngine>,

    /// Recently selected symbols
    pub recents: RecentSearches,

    /// Generated report history
    pub history: BacktestHistory,

    /// Application data directory
    pub data_dir: PathBuf,
}

impl AppState {
    /// Create durable application state under `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        tracing::info!("Data directory: {:?}", data_dir);

        let sqlite = Arc::new(SqliteDb::new(&data_dir.join("stocksense.db"))?);

        // Seed the security catalog on first run
        if sqlite.count_securities()? == 0 {
            sqlite.store_securities(&seed_securities())?;
        }

        let catalog = Arc::new(StockCatalog::new(sqlite.load_securities()?));
        tracing::info!("Loaded {} securities into catalog", catalog.len());

        let store: Arc<dyn KeyValueStore> = sqlite;
        let engine: Arc<dyn BacktestEngine> = Arc::new(SimulatedEngine::new());

        Ok(Self {
            recents: RecentSearches::new(store.clone()),
            history: BacktestHistory::new(store.clone()),
            store,
            catalog,
            engine,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Volatile state over the seed catalog; nothing survives the process
    pub fn in_memory() -> Self {
        Self::with_parts(
            Arc::new(MemoryStore::new()),
            Arc::new(StockCatalog::seeded()),
            Arc::new(SimulatedEngine::new()),
        )
    }

    /// Assemble state from explicit parts; lets tests swap the store or engine
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<StockCatalog>,
        engine: Arc<dyn BacktestEngine>,
    ) -> Self {
        Self {
            recents: RecentSearches::new(store.clone()),
            history: BacktestHistory::new(store.clone()),
            store,
            catalog,
            engine,
            data_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_catalog_once() {
        let dir = tempfile::tempdir().unwrap();

        {
            let state = AppState::new(dir.path()).unwrap();
            assert_eq!(state.catalog.len(), 6);
            state.recents.record("NVDA").unwrap();
        }

        // Second startup reloads the same catalog and ledger state
        let state = AppState::new(dir.path()).unwrap();
        assert_eq!(state.catalog.len(), 6);
        assert_eq!(state.recents.list(), vec!["NVDA"]);
    }

    #[test]
    fn test_in_memory_state() {
        let state = AppState::in_memory();
        assert_eq!(state.catalog.len(), 6);
        assert!(state.recents.list().is_empty());
        assert!(state.history.list().is_empty());
    }
}
