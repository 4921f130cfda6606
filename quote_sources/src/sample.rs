//! Built-in sample data source.
//!
//! Serves the fixed eight-stock data set the dashboard ships with, after a
//! configurable simulated latency. Symbols outside the sample table get a
//! synthesized quote so the source can satisfy any requested universe.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use quote_core::{Quote, Result};

use crate::source::QuoteSource;

/// Hardcoded sample quotes: symbol, name, price, change, change percent, volume.
const SAMPLE_QUOTES: [(&str, &str, f64, f64, f64, u64); 8] = [
    ("AAPL", "Apple Inc.", 150.25, 2.15, 1.45, 45_678_900),
    ("GOOGL", "Alphabet Inc.", 2750.80, -15.20, -0.55, 23_456_700),
    ("MSFT", "Microsoft Corporation", 310.45, 8.75, 2.90, 34_567_800),
    ("AMZN", "Amazon.com Inc.", 3200.00, 45.30, 1.44, 56_789_000),
    ("TSLA", "Tesla Inc.", 850.75, -25.50, -2.91, 67_890_100),
    ("META", "Meta Platforms Inc.", 320.60, 12.40, 4.03, 45_678_900),
    ("NVDA", "NVIDIA Corporation", 450.25, 18.75, 4.35, 34_567_800),
    ("NFLX", "Netflix Inc.", 580.90, -8.20, -1.39, 23_456_700),
];

/// Sample data source with simulated fetch latency.
pub struct SampleSource {
    symbols: Vec<String>,
    delay: Duration,
}

impl SampleSource {
    /// Create a source serving `symbols` after `delay` per fetch.
    pub fn new(symbols: Vec<String>, delay: Duration) -> Self {
        Self { symbols, delay }
    }

    fn lookup(symbol: &str) -> Option<Quote> {
        SAMPLE_QUOTES
            .iter()
            .find(|(s, ..)| *s == symbol)
            .map(|(s, name, price, change, change_percent, volume)| Quote {
                symbol: s.to_string(),
                name: name.to_string(),
                price: *price,
                change: *change,
                change_percent: *change_percent,
                volume: *volume,
            })
    }

    /// Synthesize a plausible quote for a symbol outside the sample table.
    ///
    /// The percent change is derived from the absolute change so the two
    /// always agree in sign, which the pipeline documents as an invariant.
    fn synthesize(symbol: &str) -> Quote {
        let mut rng = rand::rng();
        let price: f64 = rng.random_range(50.0..1050.0);
        let change: f64 = rng.random_range(-10.0..10.0);
        let previous_close = price - change;
        let change_percent = if previous_close.abs() < f64::EPSILON {
            0.0
        } else {
            change / previous_close * 100.0
        };

        Quote {
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            price,
            change,
            change_percent,
            volume: rng.random_range(1_000_000..51_000_000),
        }
    }
}

#[async_trait]
impl QuoteSource for SampleSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        tokio::time::sleep(self.delay).await;

        let quotes = self
            .symbols
            .iter()
            .map(|symbol| Self::lookup(symbol).unwrap_or_else(|| Self::synthesize(symbol)))
            .collect();
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::source::DEFAULT_SYMBOLS;

    fn default_source() -> SampleSource {
        let symbols = DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect();
        SampleSource::new(symbols, Duration::ZERO)
    }

    #[tokio::test]
    async fn serves_the_full_sample_set() {
        let quotes = default_source().fetch_quotes().await.unwrap();
        assert_eq!(quotes.len(), 8);

        let symbols: HashSet<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols.len(), 8);

        let aapl = quotes.iter().find(|q| q.symbol == "AAPL").unwrap();
        assert_eq!(aapl.name, "Apple Inc.");
        assert_eq!(aapl.price, 150.25);
        assert_eq!(aapl.change_percent, 1.45);
    }

    #[tokio::test]
    async fn every_sample_record_is_well_formed() {
        let quotes = default_source().fetch_quotes().await.unwrap();
        for q in &quotes {
            q.validate().unwrap();
            // Documented sign-agreement assumption holds in the sample set.
            assert_eq!(q.change.signum(), q.change_percent.signum());
        }
    }

    #[tokio::test]
    async fn unknown_symbol_gets_a_synthesized_quote() {
        let source = SampleSource::new(vec!["ZZZT".to_string()], Duration::ZERO);
        let quotes = source.fetch_quotes().await.unwrap();
        assert_eq!(quotes.len(), 1);

        let q = &quotes[0];
        assert_eq!(q.symbol, "ZZZT");
        q.validate().unwrap();
        assert_eq!(q.change.signum(), q.change_percent.signum());
    }
}
