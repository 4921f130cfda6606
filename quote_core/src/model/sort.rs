//! Sort configuration for the quote table.
//!
//! `SortKey` enumerates the sortable `Quote` fields, so sorting by a field a
//! record does not carry is unrepresentable. `SortConfig` is the transient UI
//! state: an optional active key plus a direction, mutated only through
//! [`SortConfig::toggle`].

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Sortable `Quote` field.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum SortKey {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortDirection {
    /// Smaller/earlier values first.
    #[default]
    Asc,
    /// Larger/later values first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort state: which column, which way.
///
/// The default is no sort applied, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Active sort key, or `None` when no sort is applied.
    pub key: Option<SortKey>,
    /// Current direction; only meaningful while `key` is set.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Create a config sorting by `key` in the given direction.
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Apply the column-header toggle policy.
    ///
    /// Selecting the key that is already active flips the direction; selecting
    /// a new key makes it active and resets the direction to ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }
}
