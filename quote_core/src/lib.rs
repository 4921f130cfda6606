//!
//! Core types and the data transformation pipeline for the quote dashboard.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `model` — the `Quote` record plus sort configuration types.
//! - `pipeline` — pure filter and sort stages over quote collections.
//! - `summary` — derived statistics computed from the visible set.
//! - `session` — the working set holder with sequence-numbered refresh.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod model;
pub mod pipeline;
pub mod summary;
pub mod session;

pub use error::QuoteError;
pub use result::Result;
pub use model::quote::Quote;
pub use model::sort::{SortConfig, SortDirection, SortKey};
pub use summary::{SummaryStats, summarize};
pub use session::DashboardState;
