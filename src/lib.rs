//! StockSense Desktop - Stock Analysis & Strategy Backtesting
//!
//! A desktop application that fronts a small fixed security catalog with
//! fuzzy search, detail views, simulated strategy backtests and locally
//! persisted recency ledgers.

pub mod catalog;
pub mod db;
pub mod engine;
pub mod error;
pub mod format;
pub mod ledger;
pub mod report;
pub mod services;
pub mod shell;
pub mod state;
pub mod store;

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize and run the application
pub async fn run() -> error::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocksense_desktop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StockSense Desktop...");

    let state = state::AppState::new(&data_dir())?;
    tracing::info!("Application state initialized");

    shell::run(state).await
}

/// Application data directory, overridable via STOCKSENSE_DATA_DIR
fn data_dir() -> PathBuf {
    std::env::var_os("STOCKSENSE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}
