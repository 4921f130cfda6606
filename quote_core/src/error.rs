//! Error types shared across the dashboard workspace.
//!
//! The `QuoteError` enum unifies the two boundary failure kinds (data source
//! unavailable, malformed fetched record) with configuration errors, allowing
//! crates to propagate a single error type.
use thiserror::Error;

/// Unified error type shared by the pipeline, data sources, and the dashboard binary.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The data source could not produce a working set (network failure,
    /// provider-side error, or every requested symbol failing).
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A fetched record violates the `Quote` invariants (non-finite number,
    /// negative price). Such records are dropped before they reach the pipeline.
    #[error("Malformed record for {symbol}: {reason}")]
    MalformedRecord {
        /// Ticker symbol of the offending record.
        symbol: String,
        /// Human-readable description of the violated invariant.
        reason: String,
    },

    /// Generic configuration error with a human-readable message.
    #[error("Config error: {0}")]
    Config(String),
}
