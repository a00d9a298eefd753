//! Simulated backtest engine
//!
//! No historical data is fetched and no strategy text is parsed. Metrics are
//! drawn uniformly from fixed ranges, and a randomized delay stands in for an
//! external computation. Draws go through `rand::Rng` so tests can supply a
//! seeded generator and pin down the derived-field formulas.

use super::{BacktestEngine, BacktestMetrics, BacktestRequest};
use crate::error::Result;
use async_trait::async_trait;
use rand::Rng;
use std::ops::Range;
use std::time::Duration;
use tracing::debug;

const TOTAL_RETURN_RANGE: Range<f64> = -10.0..30.0;
const MAX_DRAWDOWN_RANGE: Range<f64> = 0.0..25.0;
const SHARPE_RATIO_RANGE: Range<f64> = 0.5..2.5;
const WIN_RATE_RANGE: Range<f64> = 40.0..80.0;
const TOTAL_TRADES_RANGE: Range<u32> = 20..120;
const BENCHMARK_RETURN_RANGE: Range<f64> = -5.0..15.0;

/// Run latency bounds in seconds
const LATENCY_SECS: Range<f64> = 2.0..3.0;

/// Draw one set of metrics from the given randomness source
pub fn draw_metrics(rng: &mut impl Rng) -> BacktestMetrics {
    BacktestMetrics {
        total_return: rng.gen_range(TOTAL_RETURN_RANGE),
        max_drawdown: rng.gen_range(MAX_DRAWDOWN_RANGE),
        sharpe_ratio: rng.gen_range(SHARPE_RATIO_RANGE),
        win_rate: rng.gen_range(WIN_RATE_RANGE),
        total_trades: rng.gen_range(TOTAL_TRADES_RANGE),
        benchmark_return: rng.gen_range(BENCHMARK_RETURN_RANGE),
    }
}

/// Engine that fabricates plausible-looking performance numbers
pub struct SimulatedEngine {
    latency: Range<f64>,
}

impl SimulatedEngine {
    pub fn new() -> Self {
        Self {
            latency: LATENCY_SECS,
        }
    }

    /// Engine with custom latency bounds in seconds. An empty range disables
    /// the delay entirely; used by tests.
    pub fn with_latency(latency: Range<f64>) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BacktestEngine for SimulatedEngine {
    fn id(&self) -> &'static str {
        "simulated"
    }

    async fn run(&self, request: &BacktestRequest) -> Result<BacktestMetrics> {
        let delay_secs = if self.latency.is_empty() {
            0.0
        } else {
            rand::thread_rng().gen_range(self.latency.clone())
        };

        debug!(
            "SimulatedEngine::run - symbol={} delay={:.2}s",
            request.symbol, delay_secs
        );

        if delay_secs > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(delay_secs)).await;
        }

        Ok(draw_metrics(&mut rand::thread_rng()))
    }
}
