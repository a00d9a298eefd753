//! Backtest Service
//!
//! Turns a free-text strategy description into a performance report via the
//! configured engine and maintains the report history ledger.

use crate::engine::BacktestRequest;
use crate::error::{AppError, Result};
use crate::report::BacktestReport;
use crate::state::AppState;
use chrono::Utc;
use tracing::{info, warn};

/// Backtest service for business logic
pub struct BacktestService;

impl BacktestService {
    /// Run a strategy described in plain text against a catalog symbol.
    /// On success the report is prepended to the history ledger; on failure
    /// nothing is recorded and prior history is untouched.
    pub async fn run_backtest(
        state: &AppState,
        symbol: &str,
        strategy: &str,
    ) -> Result<BacktestReport> {
        let strategy = strategy.trim();
        if strategy.is_empty() {
            return Err(AppError::Validation(
                "Strategy description must not be empty".to_string(),
            ));
        }

        let stock = state.catalog.get_by_symbol(symbol).ok_or_else(|| {
            AppError::NotFound(format!("Stock not found: {}", symbol.trim().to_uppercase()))
        })?;

        info!(
            "BacktestService::run_backtest - symbol={} engine={}",
            stock.symbol,
            state.engine.id()
        );

        let request = BacktestRequest {
            symbol: stock.symbol.clone(),
            strategy: strategy.to_string(),
        };

        let metrics = state.engine.run(&request).await.map_err(|e| {
            warn!("Backtest run failed for {}: {}", stock.symbol, e);
            AppError::Engine("Backtest failed. Please try again.".to_string())
        })?;

        let report = BacktestReport::assemble(strategy, &stock.symbol, metrics, Utc::now());
        state.history.push(&report)?;

        Ok(report)
    }

    /// Stored reports, newest first
    pub fn history(state: &AppState) -> Vec<BacktestReport> {
        state.history.list()
    }

    /// Clear the report history
    pub fn clear_history(state: &AppState) -> Result<()> {
        state.history.clear()
    }

    /// Example strategy prompts for a symbol
    pub fn sample_strategies(symbol: &str) -> Vec<String> {
        let symbol = symbol.trim().to_uppercase();
        vec![
            format!("Buy {} when RSI < 30 and sell when RSI > 70", symbol),
            format!("Dollar cost average $1000 monthly into {} for 2 years", symbol),
            format!("Buy {} when price drops 5% from 20-day high", symbol),
            format!("Moving average crossover strategy for {}", symbol),
        ]
    }
}
