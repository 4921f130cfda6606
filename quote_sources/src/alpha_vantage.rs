//! Alpha Vantage `GLOBAL_QUOTE` adapter.
//!
//! One HTTP request per symbol; the response is a JSON object with
//! position-prefixed field names (`"05. price"` and so on) and a
//! `%`-suffixed change percent, all encoded as strings.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use quote_core::{Quote, QuoteError, Result};

use crate::source::{QuoteSource, collect_settled, unavailable};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER: &str = "alphavantage";

/// Alpha Vantage data source.
pub struct AlphaVantageSource {
    client: Client,
    api_key: String,
    symbols: Vec<String>,
}

impl AlphaVantageSource {
    /// Create a source fetching `symbols` with the given API key.
    pub fn new(api_key: String, symbols: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            symbols,
        }
    }

    async fn fetch_symbol(&self, symbol: &str) -> Result<Quote> {
        let envelope: GlobalQuoteEnvelope = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?
            .json()
            .await
            .map_err(|e| unavailable(PROVIDER, e))?;

        if let Some(message) = envelope.error_message {
            return Err(QuoteError::DataUnavailable(format!(
                "{PROVIDER}: {message}"
            )));
        }
        let raw = envelope.global_quote.ok_or_else(|| {
            QuoteError::DataUnavailable(format!(
                "{PROVIDER}: no data received for {symbol}"
            ))
        })?;
        raw.into_quote()
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageSource {
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
struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

/// Raw `GLOBAL_QUOTE` payload; every value arrives as a string.
#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "06. volume")]
    volume: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

impl GlobalQuote {
    fn into_quote(self) -> Result<Quote> {
        let price = parse_number(&self.symbol, "price", &self.price)?;
        let change = parse_number(&self.symbol, "change", &self.change)?;
        let change_percent = parse_number(
            &self.symbol,
            "change percent",
            self.change_percent.trim_end_matches('%'),
        )?;
        let volume: u64 = self.volume.trim().parse().map_err(|_| {
            QuoteError::MalformedRecord {
                symbol: self.symbol.clone(),
                reason: format!("unparseable volume: {}", self.volume),
            }
        })?;

        Ok(Quote {
            name: self.symbol.clone(),
            symbol: self.symbol,
            price,
            change,
            change_percent,
            volume,
        })
    }
}

fn parse_number(symbol: &str, field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| QuoteError::MalformedRecord {
        symbol: symbol.to_string(),
        reason: format!("unparseable {field}: {raw}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_global_quote_payload() {
        let json = r#"{
            "Global Quote": {
                "01. symbol": "AAPL",
                "02. open": "149.00",
                "03. high": "151.00",
                "04. low": "148.50",
                "05. price": "150.2500",
                "06. volume": "45678900",
                "07. latest trading day": "2024-01-12",
                "08. previous close": "148.10",
                "09. change": "2.1500",
                "10. change percent": "1.4500%"
            }
        }"#;

        let envelope: GlobalQuoteEnvelope = serde_json::from_str(json).unwrap();
        let quote = envelope.global_quote.unwrap().into_quote().unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 150.25);
        assert_eq!(quote.change, 2.15);
        assert_eq!(quote.change_percent, 1.45);
        assert_eq!(quote.volume, 45_678_900);
    }

    #[test]
    fn surfaces_provider_error_messages() {
        let json = r#"{"Error Message": "Invalid API call."}"#;
        let envelope: GlobalQuoteEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error_message.as_deref(), Some("Invalid API call."));
        assert!(envelope.global_quote.is_none());
    }

    #[test]
    fn garbage_numbers_are_malformed_records() {
        let raw = GlobalQuote {
            symbol: "AAPL".to_string(),
            price: "n/a".to_string(),
            volume: "0".to_string(),
            change: "0".to_string(),
            change_percent: "0%".to_string(),
        };
        assert!(matches!(
            raw.into_quote(),
            Err(QuoteError::MalformedRecord { .. })
        ));
    }
}
