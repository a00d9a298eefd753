//! Interactive front-end shell
//!
//! The search box, stock detail view and backtest form rendered as a
//! terminal command loop. Every action is caught at the loop boundary and
//! converted to a readable status line; no failure ends the session.

use crate::catalog::Security;
use crate::error::{AppError, ErrorResponse, Result};
use crate::format;
use crate::report::BacktestReport;
use crate::services::{BacktestService, StockService};
use crate::state::AppState;
use chrono::Utc;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the command loop until EOF or `quit`
pub async fn run(state: AppState) -> Result<()> {
    println!("StockSense Desktop");
    println!("Search for stocks (e.g., AAPL, Apple, Tesla...). Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Navigation state: the open detail view, or None for the search view
    let mut current: Option<String> = None;

    loop {
        prompt(current.as_deref())?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = split_command(line);
        match command.as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "back" | "home" => {
                current = None;
                println!("Back to search.");
            }
            _ => {
                if let Err(e) = dispatch(&state, &mut current, &command, rest).await {
                    let response = ErrorResponse::from(e);
                    println!("[{}] {}", response.code, response.message);
                }
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

async fn dispatch(
    state: &AppState,
    current: &mut Option<String>,
    command: &str,
    rest: &str,
) -> Result<()> {
    match command {
        "search" => {
            let results = StockService::search(state, rest).await?;
            print_search_results(&results);
        }
        "list" => print_search_results(state.catalog.records()),
        "open" => {
            if !format::is_valid_symbol(rest) {
                return Err(AppError::Validation(format!(
                    "'{}' is not a valid ticker symbol",
                    rest.trim()
                )));
            }
            let stock = StockService::select_stock(state, rest)?;
            *current = Some(stock.symbol.clone());
            print_detail(&stock);
        }
        "backtest" => {
            let symbol = current.clone().ok_or_else(|| {
                AppError::Validation("Open a stock first, then run a backtest".to_string())
            })?;

            println!("Running backtest for {}...", symbol);
            let report = BacktestService::run_backtest(state, &symbol, rest).await?;
            print_report(&report);
        }
        "samples" => {
            let symbol = current.clone().ok_or_else(|| {
                AppError::Validation("Open a stock first to see example strategies".to_string())
            })?;

            println!("Example strategies:");
            for sample in BacktestService::sample_strategies(&symbol) {
                println!("  - {}", sample);
            }
        }
        "history" => print_history(&BacktestService::history(state)),
        "clear-history" => {
            BacktestService::clear_history(state)?;
            println!("Backtest history cleared.");
        }
        "recent" => {
            let recents = StockService::recent_searches(state);
            if recents.is_empty() {
                println!("No recent searches.");
            } else {
                println!("Recent: {}", recents.join(", "));
            }
        }
        "clear-recent" => {
            StockService::clear_recent_searches(state)?;
            println!("Recent searches cleared.");
        }
        other => {
            println!("Unknown command '{}'. Type 'help' for commands.", other);
        }
    }

    Ok(())
}

fn prompt(current: Option<&str>) -> Result<()> {
    match current {
        Some(symbol) => print!("{} > ", symbol),
        None => print!("> "),
    }
    std::io::stdout().flush()?;
    Ok(())
}

fn split_command(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>      search by symbol, name, sector or industry");
    println!("  list               show the full security directory");
    println!("  open <symbol>      open a stock's detail view");
    println!("  backtest <text>    run a strategy described in plain English");
    println!("  samples            example strategies for the open stock");
    println!("  history            recent backtest reports");
    println!("  clear-history      clear the backtest history");
    println!("  recent             recently opened symbols");
    println!("  clear-recent       clear the recent symbols");
    println!("  back               return to the search view");
    println!("  quit               exit");
}

fn print_search_results(results: &[Security]) {
    if results.is_empty() {
        println!("No matches. Try a symbol, company name, sector or industry.");
        return;
    }

    for stock in results {
        println!(
            "  {:<6} {:<28} {:>10}  {}",
            stock.symbol,
            stock.name,
            format::format_currency(stock.price),
            format::format_percent(stock.change_percent),
        );
    }
}

fn print_detail(stock: &Security) {
    println!("{} - {}", stock.symbol, stock.name);
    println!("  {} / {}", stock.sector, stock.industry);
    println!(
        "  Price: {} ({}, {})",
        format::format_currency(stock.price),
        format::format_percent(stock.change_percent),
        if stock.change >= 0.0 { "up" } else { "down" },
    );
    println!(
        "  Volume: {}   Market cap: {}",
        format::format_compact_number(stock.volume),
        format::format_market_cap(&stock.market_cap),
    );
    println!(
        "  P/E: {:.1}   EPS: {:.2}   Dividend: {:.2}   Beta: {:.2}",
        stock.pe, stock.eps, stock.dividend, stock.beta,
    );
    println!(
        "  52w range: {} - {}",
        format::format_currency(stock.low_52w),
        format::format_currency(stock.high_52w),
    );
    println!("  {}", stock.description);
    println!("  Last updated: {}", stock.last_updated);
}

fn print_report(report: &BacktestReport) {
    println!("{}", report.summary());
    println!(
        "  Period: {} to {}",
        report.start_date.format("%Y-%m-%d"),
        report.end_date.format("%Y-%m-%d"),
    );
    println!(
        "  Capital: {} -> {}   Annualized: {}   Win rate: {:.1}%",
        format::format_currency(report.initial_capital),
        format::format_currency(report.final_value),
        format::format_percent(report.annualized_return),
        report.win_rate,
    );
}

fn print_history(reports: &[BacktestReport]) {
    if reports.is_empty() {
        println!("No backtests yet.");
        return;
    }

    let now = Utc::now();
    for report in reports {
        println!(
            "  {:<6} {}  {}  ({})",
            report.symbol,
            format::format_percent(report.total_return),
            report.strategy,
            format::relative_time(report.created_at, now),
        );
    }
}
