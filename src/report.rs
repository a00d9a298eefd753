//! Backtest report model
//!
//! A report is assembled once from the engine's drawn metrics and is
//! immutable afterwards. All derived fields are computed here so the
//! formulas stay testable independently of the random draws.

use crate::engine::BacktestMetrics;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed starting capital for every simulated run
pub const INITIAL_CAPITAL: f64 = 10_000.0;

/// Trading-day-count annualization factor, applied uniformly
pub const ANNUALIZATION_FACTOR: f64 = 365.0 / 252.0;

/// Nominal backtest window in days (one year ending now)
pub const WINDOW_DAYS: i64 = 365;

/// Fabricated performance report for one strategy run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub id: String,
    pub strategy: String,
    pub symbol: String,
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub win_rate: f64,
    pub total_trades: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub initial_capital: f64,
    pub final_value: f64,
    pub benchmark_return: f64,
    pub created_at: DateTime<Utc>,
}

impl BacktestReport {
    /// Assemble a report from drawn metrics over the fixed one-year window
    pub fn assemble(
        strategy: &str,
        symbol: &str,
        metrics: BacktestMetrics,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            strategy: strategy.to_string(),
            symbol: symbol.to_string(),
            total_return: metrics.total_return,
            annualized_return: metrics.total_return * ANNUALIZATION_FACTOR,
            max_drawdown: metrics.max_drawdown,
            sharpe_ratio: metrics.sharpe_ratio,
            win_rate: metrics.win_rate,
            total_trades: metrics.total_trades,
            start_date: now - Duration::days(WINDOW_DAYS),
            end_date: now,
            initial_capital: INITIAL_CAPITAL,
            final_value: INITIAL_CAPITAL * (1.0 + metrics.total_return / 100.0),
            benchmark_return: metrics.benchmark_return,
            created_at: now,
        }
    }

    /// Human-readable result sentence derived from the report fields
    pub fn summary(&self) -> String {
        let gap = (self.total_return - self.benchmark_return).abs();
        let versus_benchmark = if self.total_return > self.benchmark_return {
            format!("Outperformed the benchmark by {:.1} percentage points.", gap)
        } else {
            format!("Underperformed the benchmark by {:.1} percentage points.", gap)
        };

        format!(
            "Backtest completed for {}: strategy returned {:+.1}% over 1 year across {} trades with {:.1}% max drawdown. Sharpe ratio: {:.2}. {}",
            self.symbol,
            self.total_return,
            self.total_trades,
            self.max_drawdown,
            self.sharpe_ratio,
            versus_benchmark,
        )
    }
}
