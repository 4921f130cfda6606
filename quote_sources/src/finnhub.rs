//! Finnhub `/quote` adapter.
//!
//! Finnhub uses terse one-letter fields: `c` current price, `d` change,
//! `dp` change percent. Free-tier responses omit `d`/`dp` outside market
//! hours, so those default to zero.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use quote_core::{Quote, QuoteError, Result};

use crate::source::{QuoteSource, collect_settled, unavailable};

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER: &str = "finnhub";

/// Finnhub data source.
pub struct FinnhubSource {
    client: Client,
    api_key: String,
    symbols: Vec<String>,
}

impl FinnhubSource {
    /// Create a source fetching `symbols` with the given API token.
    pub fn new(api_key: String, symbols: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            symbols,
        }
    }

    async fn fetch_symbol(&self, symbol: &str) -> Result<Quote> {
        let raw: FinnhubQuote = self
            .client
            .get(format!("{BASE_URL}/quote"))
            .query(&[("symbol", symbol), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?
            .json()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?;

        if let Some(message) = raw.error {
            return Err(QuoteError::DataUnavailable(format!(
                "{PROVIDER}: {message}"
            )));
        }
        Ok(raw.into_quote(symbol))
    }
}

#[async_trait]
impl QuoteSource for FinnhubSource {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let fetches = self
            .symbols
            .iter()
            .map(|symbol| self.fetch_symbol(symbol))
            .collect();
        collect_settled(PROVIDER, &self.symbols, fetches).await
    }
}

#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    /// Current price.
    #[serde(default)]
    c: f64,
    /// Absolute change since previous close.
    d: Option<f64>,
    /// Percent change since previous close.
    dp: Option<f64>,
    /// Volume; not delivered on every plan.
    v: Option<f64>,
    /// Error message for rejected requests.
    error: Option<String>,
}

impl FinnhubQuote {
    fn into_quote(self, symbol: &str) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price: self.c,
            change: self.d.unwrap_or(0.0),
            change_percent: self.dp.unwrap_or(0.0),
            volume: self.v.unwrap_or(0.0).max(0.0) as u64,
        }
    }
}
