//! Pure filter and sort stages over quote collections.
//!
//! Both stages take their inputs by reference, return fresh vectors, and have
//! no error paths: every input, including the empty set, is valid. Data flows
//! one way — source → filter → sort → presentation/summary — so the stages
//! here never see partially refreshed state.

use std::cmp::Ordering;

use crate::model::quote::Quote;
use crate::model::sort::{SortConfig, SortDirection, SortKey};

/// Keep the records whose `symbol` or `name` contains `query`,
/// case-insensitively.
///
/// An empty or whitespace-only query is the identity: every record passes.
/// Any other query is matched verbatim (lowercased but not trimmed), so
/// `" apple"` only matches text that actually contains the leading space.
/// The result may be empty; the input is never mutated.
pub fn filter_quotes(records: &[Quote], query: &str) -> Vec<Quote> {
    if query.trim().is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|quote| {
            quote.symbol.to_lowercase().contains(&needle)
                || quote.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Order the records by the configured key and direction.
///
/// With no active key the input order is preserved as-is. The sort is stable
/// (`slice::sort_by` on a fresh vector), so records comparing equal at the
/// sort key keep their relative order from the input.
pub fn sort_quotes(records: &[Quote], config: &SortConfig) -> Vec<Quote> {
    let mut sorted = records.to_vec();
    let Some(key) = config.key else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &Quote, b: &Quote, key: SortKey) -> Ordering {
    match key {
        SortKey::Symbol => compare_text(&a.symbol, &b.symbol),
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Change => a.change.total_cmp(&b.change),
        SortKey::ChangePercent => a.change_percent.total_cmp(&b.change_percent),
        SortKey::Volume => a.volume.cmp(&b.volume),
    }
}

/// Case-insensitive textual ordering with a deterministic tie-break.
///
/// Compares by Unicode lowercase first so `apple` and `Apple` sort together,
/// then falls back to the raw strings so the ordering stays total.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
