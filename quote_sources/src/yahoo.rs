//! Yahoo Finance chart adapter.
//!
//! Yahoo has no plain quote endpoint, so this adapter requests a one-day,
//! one-minute chart per symbol and derives the quote from it: price from the
//! regular market price in the metadata, change against the previous close,
//! and volume from the most recent non-null minute bucket. No API key.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use quote_core::{Quote, QuoteError, Result};

use crate::source::{QuoteSource, collect_settled, unavailable};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const PROVIDER: &str = "yahoo";

/// Yahoo Finance data source.
pub struct YahooSource {
    client: Client,
    symbols: Vec<String>,
}

impl YahooSource {
    /// Create a source fetching `symbols`.
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            symbols,
        }
    }

    async fn fetch_symbol(&self, symbol: &str) -> Result<Quote> {
        let envelope: ChartEnvelope = self
            .client
            .get(format!("{BASE_URL}/{symbol}"))
            .query(&[("range", "1d"), ("interval", "1m")])
            .send()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?
            .json()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?;

        let result = envelope
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| {
                QuoteError::DataUnavailable(format!(
                    "{PROVIDER}: no chart data for {symbol}"
                ))
            })?;
        Ok(result.into_quote(symbol))
    }
}

#[async_trait]
impl QuoteSource for YahooSource {
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
struct ChartEnvelope {
    chart: ChartResponse,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
    #[serde(rename = "previousClose", alias = "chartPreviousClose")]
    previous_close: f64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteIndicator>,
}

#[derive(Debug, Deserialize)]
struct QuoteIndicator {
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl ChartResult {
    fn into_quote(self, symbol: &str) -> Quote {
        let price = self.meta.regular_market_price;
        let previous_close = self.meta.previous_close;
        let change = price - previous_close;
        let change_percent = if previous_close.abs() < f64::EPSILON {
            0.0
        } else {
            change / previous_close * 100.0
        };
        let volume = self
            .indicators
            .quote
            .first()
            .and_then(|q| q.volume.iter().rev().find_map(|v| *v))
            .unwrap_or(0);

        Quote {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            change,
            change_percent,
            volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_quote_from_chart_payload() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "regularMarketPrice": 150.25,
                        "previousClose": 148.10
                    },
                    "timestamp": [1705070400, 1705070460],
                    "indicators": {
                        "quote": [{"volume": [1200, null, 3400]}]
                    }
                }],
                "error": null
            }
        }"#;

        let envelope: ChartEnvelope = serde_json::from_str(json).unwrap();
        let result = envelope.chart.result.unwrap().remove(0);
        let quote = result.into_quote("AAPL");

        assert_eq!(quote.price, 150.25);
        assert!((quote.change - 2.15).abs() < 1e-9);
        assert!((quote.change_percent - 2.15 / 148.10 * 100.0).abs() < 1e-9);
        // Last non-null minute bucket wins.
        assert_eq!(quote.volume, 3400);
    }

    #[test]
    fn missing_result_is_handled() {
        let json = r#"{"chart": {"result": null, "error": {"code": "Not Found"}}}"#;
        let envelope: ChartEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.chart.result.is_none());
    }
}
