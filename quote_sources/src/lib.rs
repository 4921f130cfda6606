//!
//! Data sources for the quote dashboard.
//!
//! This crate defines the `QuoteSource` capability — an asynchronous supplier
//! of whole quote batches — and its implementations:
//! - `sample` — the built-in sample data set with synthesized fallbacks.
//! - `alpha_vantage` — Alpha Vantage `GLOBAL_QUOTE` adapter.
//! - `finnhub` — Finnhub `/quote` adapter.
//! - `yahoo` — Yahoo Finance chart adapter.
//!
//! The active implementation is selected by configuration through
//! [`source::Provider`] and [`source::build_source`]; downstream code only
//! ever sees `Box<dyn QuoteSource>`.
#![warn(missing_docs)]
pub mod source;
pub mod sample;
pub mod alpha_vantage;
pub mod finnhub;
pub mod yahoo;

pub use source::{DEFAULT_SYMBOLS, Provider, QuoteSource, SourceConfig, build_source};
pub use sample::SampleSource;
