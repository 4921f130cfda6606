//! Command-line arguments for the quote dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use strum_macros::{Display, EnumString};

use quote_core::{SortDirection, SortKey};
use quote_sources::Provider;

/// How the visible set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ViewMode {
    /// Aligned text table, one row per quote.
    #[default]
    Table,
    /// Price bars plus the summary statistics.
    Chart,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Data provider to fetch quotes from.
    #[clap(long, value_enum, default_value_t = Provider::Mock)]
    pub provider: Provider,

    /// Comma-separated ticker symbols. Defaults to the built-in eight.
    #[clap(long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Free-text search matched against symbol and name.
    #[clap(long, default_value = "")]
    pub query: String,

    /// Column to sort by. Omitted means the fetched order is kept.
    #[clap(long, value_enum)]
    pub sort_by: Option<SortKey>,

    /// Sort direction, used together with --sort-by.
    #[clap(long, value_enum, default_value_t = SortDirection::Asc)]
    pub direction: SortDirection,

    /// View to render.
    #[clap(long, value_enum, default_value_t = ViewMode::Table)]
    pub view: ViewMode,

    /// Provider API key. Falls back to the QUOTE_API_KEY environment
    /// variable, then to the provider's demo key.
    #[clap(long)]
    pub api_key: Option<String>,

    /// Refresh every N seconds; 0 fetches once and exits.
    #[clap(long, default_value_t = 0)]
    pub watch: u64,

    /// Simulated fetch latency of the mock provider, in milliseconds.
    #[clap(long, default_value_t = 500)]
    pub mock_delay_ms: u64,
}
