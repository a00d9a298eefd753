//! Stock Service
//!
//! Handles catalog search, symbol lookup and stock selection. A selection is
//! what the recent-search ledger tracks, so it happens here rather than in
//! the front-end.

use crate::catalog::Security;
use crate::error::{AppError, Result};
use crate::state::AppState;
use std::time::Duration;
use tracing::info;

/// Fixed simulated network delay before search results return
const SEARCH_DELAY: Duration = Duration::from_millis(100);

/// Stock service for business logic
pub struct StockService;

impl StockService {
    /// Search the catalog. Resolves after a short simulated network delay;
    /// blank queries return no results.
    pub async fn search(state: &AppState, query: &str) -> Result<Vec<Security>> {
        info!("StockService::search - query={:?}", query);

        tokio::time::sleep(SEARCH_DELAY).await;

        Ok(state.catalog.search(query))
    }

    /// Get a security by symbol
    pub fn get_stock_info(state: &AppState, symbol: &str) -> Result<Security> {
        state
            .catalog
            .get_by_symbol(symbol)
            .ok_or_else(|| not_found(symbol))
    }

    /// Resolve a symbol and record the selection in the recent-search ledger
    pub fn select_stock(state: &AppState, symbol: &str) -> Result<Security> {
        let stock = Self::get_stock_info(state, symbol)?;
        state.recents.record(&stock.symbol)?;

        info!("StockService::select_stock - {}", stock.symbol);
        Ok(stock)
    }

    /// Recently selected symbols, newest first
    pub fn recent_searches(state: &AppState) -> Vec<String> {
        state.recents.list()
    }

    /// Clear the recent-search ledger
    pub fn clear_recent_searches(state: &AppState) -> Result<()> {
        state.recents.clear()
    }
}

fn not_found(symbol: &str) -> AppError {
    AppError::NotFound(format!("Stock not found: {}", symbol.trim().to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_resolves_with_results() {
        let state = AppState::in_memory();

        let results = StockService::search(&state, "apple").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "AAPL");

        let blank = StockService::search(&state, "   ").await.unwrap();
        assert!(blank.is_empty());
    }

    #[test]
    fn test_get_stock_info_not_found() {
        let state = AppState::in_memory();

        let err = StockService::get_stock_info(&state, "zzzz").unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains("ZZZZ")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_select_stock_records_recent() {
        let state = AppState::in_memory();

        let stock = StockService::select_stock(&state, "aapl").unwrap();
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(StockService::recent_searches(&state), vec!["AAPL"]);

        StockService::select_stock(&state, "TSLA").unwrap();
        StockService::select_stock(&state, "AAPL").unwrap();
        assert_eq!(StockService::recent_searches(&state), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_failed_selection_leaves_recents_untouched() {
        let state = AppState::in_memory();
        StockService::select_stock(&state, "MSFT").unwrap();

        assert!(StockService::select_stock(&state, "ZZZZ").is_err());
        assert_eq!(StockService::recent_searches(&state), vec!["MSFT"]);
    }

    #[test]
    fn test_clear_recent_searches() {
        let state = AppState::in_memory();
        StockService::select_stock(&state, "NVDA").unwrap();

        StockService::clear_recent_searches(&state).unwrap();
        assert!(StockService::recent_searches(&state).is_empty());
    }
}
