//! Working set holder with sequence-numbered refresh.
//!
//! `DashboardState` owns the currently loaded, unfiltered quote collection and
//! the refresh bookkeeping around it. Refreshes replace the working set
//! wholesale; there is no incremental merge. Because a new refresh may be
//! issued while an earlier fetch is still in flight, each refresh gets a
//! monotonically increasing ticket and [`DashboardState::apply_refresh`]
//! discards responses whose ticket is older than the last one applied —
//! otherwise the last fetch to *resolve* would win, not the last one issued.

use crate::model::quote::{Quote, sanitize_records};
use crate::model::sort::SortConfig;
use crate::pipeline::{filter_quotes, sort_quotes};

/// Owns the working set and hands out refresh tickets.
#[derive(Debug, Default)]
pub struct DashboardState {
    quotes: Vec<Quote>,
    next_ticket: u64,
    applied_ticket: u64,
}

impl DashboardState {
    /// Create an empty state with no working set loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh and return its ticket.
    ///
    /// The ticket must be passed back to [`Self::apply_refresh`] together with
    /// the fetched records.
    pub fn begin_refresh(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Install `records` as the new working set, unless the ticket is stale.
    ///
    /// Malformed records are dropped (with a warning) before installation.
    /// Returns `true` if the working set was replaced, `false` if a newer
    /// refresh already completed and this response was discarded.
    pub fn apply_refresh(&mut self, ticket: u64, records: Vec<Quote>) -> bool {
        if ticket <= self.applied_ticket {
            log::debug!(
                "Discarding stale refresh {} (latest applied: {})",
                ticket,
                self.applied_ticket
            );
            return false;
        }
        self.quotes = sanitize_records(records);
        self.applied_ticket = ticket;
        true
    }

    /// The currently loaded, unfiltered working set.
    pub fn working_set(&self) -> &[Quote] {
        &self.quotes
    }

    /// The visible set: the working set after filter and sort.
    pub fn visible_quotes(&self, query: &str, config: &SortConfig) -> Vec<Quote> {
        let filtered = filter_quotes(&self.quotes, query);
        sort_quotes(&filtered, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sort::{SortDirection, SortKey};

    fn quote(symbol: &str, price: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            price,
            change: 0.0,
            change_percent: 0.0,
            volume: 100,
        }
    }

    #[test]
    fn refresh_replaces_working_set_wholesale() {
        let mut state = DashboardState::new();
        let first = state.begin_refresh();
        assert!(state.apply_refresh(first, vec![quote("AAPL", 150.0)]));

        let second = state.begin_refresh();
        assert!(state.apply_refresh(second, vec![quote("TSLA", 850.0)]));
        let symbols: Vec<&str> = state.working_set().iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TSLA"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = DashboardState::new();
        let slow = state.begin_refresh();
        let fast = state.begin_refresh();

        assert!(state.apply_refresh(fast, vec![quote("NVDA", 450.0)]));
        assert!(!state.apply_refresh(slow, vec![quote("AAPL", 150.0)]));

        let symbols: Vec<&str> = state.working_set().iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NVDA"]);
    }

    #[test]
    fn malformed_records_never_enter_working_set() {
        let mut state = DashboardState::new();
        let ticket = state.begin_refresh();
        let mut bad = quote("BAD", 1.0);
        bad.price = f64::NAN;
        assert!(state.apply_refresh(ticket, vec![quote("AAPL", 150.0), bad]));
        assert_eq!(state.working_set().len(), 1);
    }

    #[test]
    fn duplicate_symbols_collapse_to_the_first_record() {
        let mut state = DashboardState::new();
        let ticket = state.begin_refresh();
        let mut second = quote("AAPL", 151.0);
        second.volume = 1;
        assert!(state.apply_refresh(ticket, vec![quote("AAPL", 150.0), second]));

        assert_eq!(state.working_set().len(), 1);
        assert_eq!(state.working_set()[0].price, 150.0);
    }

    #[test]
    fn visible_quotes_filters_then_sorts() {
        let mut state = DashboardState::new();
        let ticket = state.begin_refresh();
        state.apply_refresh(
            ticket,
            vec![quote("MSFT", 310.45), quote("AAPL", 150.25), quote("AMZN", 3200.0)],
        );

        let config = SortConfig::by(SortKey::Price, SortDirection::Desc);
        let visible = state.visible_quotes("a", &config);
        let symbols: Vec<&str> = visible.iter().map(|q| q.symbol.as_str()).collect();
        // "a" matches AAPL and AMZN only; sorted by price descending.
        assert_eq!(symbols, vec!["AMZN", "AAPL"]);
    }
}
