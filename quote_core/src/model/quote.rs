//! Quote data model and validation helpers.
//!
//! A `Quote` is one stock's price/volume/change snapshot at fetch time. Records
//! are produced wholesale by a data source on each refresh, consumed read-only
//! by the filter/sort/summary stages, and replaced entirely on the next refresh.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Market quote snapshot for a single ticker symbol.
///
/// Invariants expected from any data source:
/// - `symbol` is unique within a fetched collection.
/// - `price >= 0` and every numeric field is finite.
/// - `change` and `change_percent` share the same sign; this is an upstream
///   assumption the pipeline documents but does not enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Short uppercase ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Display label (e.g., `Apple Inc.`).
    pub name: String,
    /// Last traded price, currency scale.
    pub price: f64,
    /// Absolute price delta since previous close (signed).
    pub change: f64,
    /// Percentage delta since previous close (signed).
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    /// Shares traded.
    pub volume: u64,
}

impl Quote {
    /// Check the record against the `Quote` invariants.
    ///
    /// Rejects non-finite/NaN numeric fields and negative prices so that NaN
    /// never reaches the sort comparator or the statistics stage.
    pub fn validate(&self) -> Result<(), QuoteError> {
        let malformed = |reason: &str| QuoteError::MalformedRecord {
            symbol: self.symbol.clone(),
            reason: reason.to_string(),
        };

        if self.symbol.trim().is_empty() {
            return Err(malformed("empty symbol"));
        }
        if !self.price.is_finite() {
            return Err(malformed("price is not a finite number"));
        }
        if self.price < 0.0 {
            return Err(malformed("negative price"));
        }
        if !self.change.is_finite() {
            return Err(malformed("change is not a finite number"));
        }
        if !self.change_percent.is_finite() {
            return Err(malformed("change percent is not a finite number"));
        }
        Ok(())
    }
}

/// Drop malformed and duplicate records from a fetched batch, logging each
/// rejection.
///
/// Well-formed records pass through in their original order. A record whose
/// symbol was already seen earlier in the batch is dropped (first wins), so
/// the unique-symbol invariant holds for the working set even if a source
/// misbehaves. This runs once per refresh, before the batch becomes the new
/// working set.
pub fn sanitize_records(records: Vec<Quote>) -> Vec<Quote> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|quote| {
            if let Err(e) = quote.validate() {
                log::warn!("Dropping malformed record: {}", e);
                return false;
            }
            if !seen.insert(quote.symbol.clone()) {
                log::warn!("Dropping duplicate record for {}", quote.symbol);
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, price: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            price,
            change: 1.0,
            change_percent: 0.5,
            volume: 1000,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(quote("AAPL", 150.25).validate().is_ok());
    }

    #[test]
    fn nan_price_is_malformed() {
        let q = quote("AAPL", f64::NAN);
        assert!(matches!(
            q.validate(),
            Err(QuoteError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn negative_price_is_malformed() {
        assert!(quote("AAPL", -0.01).validate().is_err());
    }

    #[test]
    fn sanitize_drops_only_bad_records() {
        let mut bad = quote("TSLA", 850.75);
        bad.change_percent = f64::INFINITY;
        let batch = vec![quote("AAPL", 150.25), bad, quote("NVDA", 450.25)];

        let clean = sanitize_records(batch);
        let symbols: Vec<&str> = clean.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "NVDA"]);
    }

    #[test]
    fn sanitize_drops_repeated_symbols_keeping_the_first() {
        let mut second = quote("AAPL", 151.00);
        second.volume = 1;
        let batch = vec![quote("AAPL", 150.25), second, quote("NVDA", 450.25)];

        let clean = sanitize_records(batch);
        let symbols: Vec<&str> = clean.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "NVDA"]);
        assert_eq!(clean[0].price, 150.25);
    }

    #[test]
    fn wire_form_uses_camel_case_change_percent() {
        let json = r#"{
            "symbol": "NVDA",
            "name": "NVIDIA Corporation",
            "price": 450.25,
            "change": 18.75,
            "changePercent": 4.35,
            "volume": 34567800
        }"#;
        let q: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(q.symbol, "NVDA");
        assert_eq!(q.change_percent, 4.35);
    }
}
