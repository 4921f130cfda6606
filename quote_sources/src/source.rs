//! The `QuoteSource` capability and provider selection.
//!
//! A source supplies the entire working set in one call; the dashboard never
//! merges partial results. Implementations must return unique symbols and
//! finite numbers — violations are caught downstream by record sanitization,
//! but well-behaved sources should not rely on that.

use std::time::Duration;

use async_trait::async_trait;
use clap::ValueEnum;
use futures::future;
use strum_macros::{Display, EnumString};

use quote_core::{Quote, QuoteError, Result};

/// The original dashboard's fixed symbol universe, used when the caller does
/// not specify its own list.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "META", "NVDA", "NFLX",
];

/// Asynchronous supplier of quote batches.
///
/// `fetch_quotes` may suspend and may fail with
/// [`QuoteError::DataUnavailable`]; it never returns a partial batch plus an
/// error. Retry is the caller's decision — implementations do not retry.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Short provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch a fresh batch of quotes for the configured symbols.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;
}

/// Available data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[clap(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Provider {
    /// Built-in sample data, no network access.
    #[default]
    Mock,
    /// Alpha Vantage `GLOBAL_QUOTE` endpoint.
    AlphaVantage,
    /// Finnhub `/quote` endpoint.
    Finnhub,
    /// Yahoo Finance chart endpoint.
    Yahoo,
}

/// Configuration shared by all source constructors.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Symbols to fetch on every refresh.
    pub symbols: Vec<String>,
    /// Provider API key; providers that need one fall back to `demo`.
    pub api_key: Option<String>,
    /// Simulated latency for the mock source.
    pub mock_delay: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            api_key: None,
            mock_delay: Duration::from_millis(500),
        }
    }
}

impl SourceConfig {
    fn api_key_or_demo(&self) -> String {
        self.api_key.clone().unwrap_or_else(|| "demo".to_string())
    }
}

/// Build the configured source.
///
/// This is the single switch point between the sample data set and the live
/// adapters; everything downstream works against `dyn QuoteSource`.
pub fn build_source(provider: Provider, config: SourceConfig) -> Box<dyn QuoteSource> {
    match provider {
        Provider::Mock => Box::new(crate::sample::SampleSource::new(
            config.symbols,
            config.mock_delay,
        )),
        Provider::AlphaVantage => Box::new(crate::alpha_vantage::AlphaVantageSource::new(
            config.api_key_or_demo(),
            config.symbols,
        )),
        Provider::Finnhub => Box::new(crate::finnhub::FinnhubSource::new(
            config.api_key_or_demo(),
            config.symbols,
        )),
        Provider::Yahoo => Box::new(crate::yahoo::YahooSource::new(config.symbols)),
    }
}

/// Await every per-symbol fetch and keep the successes.
///
/// Failed symbols are logged and skipped so one bad symbol does not sink the
/// whole refresh; a batch where *every* symbol failed is `DataUnavailable`.
pub(crate) async fn collect_settled<F>(
    provider: &'static str,
    symbols: &[String],
    fetches: Vec<F>,
) -> Result<Vec<Quote>>
where
    F: Future<Output = Result<Quote>>,
{
    let results = future::join_all(fetches).await;

    let mut quotes = Vec::with_capacity(results.len());
    for (symbol, result) in symbols.iter().zip(results) {
        match result {
            Ok(quote) => quotes.push(quote),
            Err(e) => log::warn!("[{symbol}] {provider} fetch failed: {e}"),
        }
    }

    if quotes.is_empty() {
        return Err(QuoteError::DataUnavailable(format!(
            "{provider}: none of the requested symbols could be fetched"
        )));
    }
    Ok(quotes)
}

/// Map a transport-level failure into the boundary error kind.
pub(crate) fn unavailable(provider: &str, err: impl std::fmt::Display) -> QuoteError {
    QuoteError::DataUnavailable(format!("{provider}: {err}"))
}
