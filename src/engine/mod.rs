//! Backtest engine adapters

pub mod simulated;

use crate::error::Result;
use async_trait::async_trait;

pub use simulated::SimulatedEngine;

/// Inputs for one backtest run
#[derive(Debug, Clone)]
pub struct BacktestRequest {
    pub symbol: String,
    pub strategy: String,
}

/// Raw performance metrics produced by an engine run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestMetrics {
    pub total_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub win_rate: f64,
    pub total_trades: u32,
    pub benchmark_return: f64,
}

/// Engine trait that all backtest computations must implement
#[async_trait]
pub trait BacktestEngine: Send + Sync {
    /// Engine ID (e.g., "simulated")
    fn id(&self) -> &'static str;

    /// Run the described strategy against a symbol and produce raw metrics
    async fn run(&self, request: &BacktestRequest) -> Result<BacktestMetrics>;
}
