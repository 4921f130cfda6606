//! Derived statistics over the visible quote set.
//!
//! Consumed by the chart view: record count, arithmetic mean price, and the
//! best performer by percentage change. Pure — no side effects, no mutation.

use serde::Serialize;

use crate::model::quote::Quote;

/// Aggregate values computed from one visible set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of records in the input.
    pub count: usize,
    /// Arithmetic mean of `price`; `0.0` when the input is empty.
    pub average_price: f64,
    /// Record with the maximum `change_percent`; first one wins on ties.
    /// `None` when the input is empty.
    pub best_performer: Option<Quote>,
}

/// Compute [`SummaryStats`] for `records`.
///
/// The empty input yields count 0, average 0.0, and no best performer; there
/// is no division by zero. On equal `change_percent` the record appearing
/// earlier in the input is the best performer.
pub fn summarize(records: &[Quote]) -> SummaryStats {
    let count = records.len();
    let average_price = if count == 0 {
        0.0
    } else {
        records.iter().map(|q| q.price).sum::<f64>() / count as f64
    };

    let mut best_performer: Option<&Quote> = None;
    for quote in records {
        match best_performer {
            Some(best) if quote.change_percent <= best.change_percent => {}
            _ => best_performer = Some(quote),
        }
    }

    SummaryStats {
        count,
        average_price,
        best_performer: best_performer.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, price: f64, change_percent: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            price,
            change: change_percent.signum(),
            change_percent,
            volume: 1000,
        }
    }

    #[test]
    fn empty_input_yields_defaults() {
        let stats = summarize(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_price, 0.0);
        assert!(stats.best_performer.is_none());
    }

    #[test]
    fn average_and_best_performer() {
        let records = vec![
            quote("AAPL", 150.25, 1.45),
            quote("TSLA", 850.75, -2.91),
            quote("NVDA", 450.25, 4.35),
        ];
        let stats = summarize(&records);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_price, 483.75);
        assert_eq!(stats.best_performer.unwrap().symbol, "NVDA");
    }

    #[test]
    fn best_performer_dominates_every_record() {
        let records = vec![
            quote("A", 10.0, -1.0),
            quote("B", 20.0, 3.5),
            quote("C", 30.0, 2.0),
        ];
        let stats = summarize(&records);
        let best = stats.best_performer.unwrap();
        assert!(records.iter().all(|q| q.change_percent <= best.change_percent));
    }

    #[test]
    fn first_record_wins_ties() {
        let records = vec![quote("NVDA", 450.25, 4.35), quote("XYZ", 10.0, 4.35)];
        let stats = summarize(&records);
        assert_eq!(stats.best_performer.unwrap().symbol, "NVDA");
    }
}
