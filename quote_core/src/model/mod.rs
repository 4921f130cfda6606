//! Domain models for the quote dashboard.
//!
//! This module groups the data types every pipeline stage operates on:
//! - `quote` — the immutable market `Quote` record and validation helpers.
//! - `sort` — sortable field keys, direction, and the toggleable `SortConfig`.
pub mod quote;
pub mod sort;
