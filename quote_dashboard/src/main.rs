//! Quote dashboard — fetches stock quotes from a configured provider, runs
//! them through the filter → sort → summary pipeline, and renders the visible
//! set as a text table or chart.
//!
//! Usage examples:
//! ```bash
//! quote_dashboard                                   # sample data, table view
//! quote_dashboard --query apple --sort-by price
//! quote_dashboard --view chart --sort-by change-percent --direction desc
//! quote_dashboard --provider finnhub --api-key $KEY --watch 30
//! ```
//!
//! One invocation performs one refresh; `--watch N` keeps refreshing every
//! `N` seconds until Ctrl+C. A failed refresh is logged and, in watch mode,
//! retried on the next tick — there is no automatic retry beyond that.
//! Every refresh carries a ticket from `DashboardState::begin_refresh` so a
//! slow response can never overwrite a newer working set.
#![warn(missing_docs)]
mod args;
mod view;

use std::collections::HashSet;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Parser;
use log::{error, info, warn};

use quote_core::{DashboardState, QuoteError, Result, SortConfig, summarize};
use quote_sources::{DEFAULT_SYMBOLS, SourceConfig, build_source};

use crate::args::{Args, ViewMode};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let shutdown = Arc::new(AtomicBool::new(false));
    if args.watch > 0 {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down dashboard...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl+C handler");
    }

    let symbols: Vec<String> = if args.symbols.is_empty() {
        DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
    } else {
        normalize_symbols(&args.symbols)
    };
    if symbols.is_empty() {
        return Err(QuoteError::Config(
            "--symbols was given but contained no usable symbol".to_string(),
        ));
    }

    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("QUOTE_API_KEY").ok());

    let source = build_source(
        args.provider,
        SourceConfig {
            symbols,
            api_key,
            mock_delay: Duration::from_millis(args.mock_delay_ms),
        },
    );
    let sort_config = SortConfig {
        key: args.sort_by,
        direction: args.direction,
    };

    info!("Dashboard starting with provider '{}'", source.name());
    let mut state = DashboardState::new();

    loop {
        let ticket = state.begin_refresh();
        match source.fetch_quotes().await {
            Ok(records) => {
                if state.apply_refresh(ticket, records) {
                    render(&state, &args.query, &sort_config, args.view);
                }
            }
            Err(e) => {
                error!("Refresh failed: {}", e);
                if args.watch == 0 {
                    return Err(e);
                }
                warn!("Will retry on the next refresh tick");
            }
        }

        if args.watch == 0 || shutdown.load(Ordering::Relaxed) {
            break;
        }
        wait_for_next_tick(args.watch, &shutdown).await;
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
    }

    info!("Dashboard stopped.");
    Ok(())
}

/// Run the pipeline over the current working set and print the chosen view.
fn render(state: &DashboardState, query: &str, config: &SortConfig, mode: ViewMode) {
    let visible = state.visible_quotes(query, config);
    let output = match mode {
        ViewMode::Table => view::render_table(&visible),
        ViewMode::Chart => view::render_chart(&visible, &summarize(&visible)),
    };
    println!("As of {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("{output}");
}

/// Sleep until the next watch tick, in short slices so Ctrl+C is honored
/// promptly instead of after a full interval.
async fn wait_for_next_tick(watch_secs: u64, shutdown: &AtomicBool) {
    let deadline = Instant::now() + Duration::from_secs(watch_secs);
    while Instant::now() < deadline && !shutdown.load(Ordering::Relaxed) {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}

/// Uppercase and trim the user-supplied symbols, dropping empties and
/// repeats. Every fetched collection must carry unique symbols, so a
/// duplicated `--symbols` entry is collapsed here (first occurrence wins,
/// order preserved) before the list ever reaches a source.
fn normalize_symbols(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::normalize_symbols;

    #[test]
    fn normalize_uppercases_trims_and_dedupes() {
        let raw = vec![
            " aapl ".to_string(),
            "AAPL".to_string(),
            "".to_string(),
            "tsla".to_string(),
        ];
        assert_eq!(normalize_symbols(&raw), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn normalize_keeps_first_occurrence_order() {
        let raw = vec![
            "NVDA".to_string(),
            "MSFT".to_string(),
            "nvda".to_string(),
            "MSFT".to_string(),
        ];
        assert_eq!(normalize_symbols(&raw), vec!["NVDA", "MSFT"]);
    }
}
