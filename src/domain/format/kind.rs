// SPDX-License-Identifier: MPL-2.0
//! Format kinds selecting a partition of the configuration table.

use crate::error::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// The closed set of format partitions a configuration entry can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatKind {
    /// Options for the `_date` helper.
    DateTimeFormat,
    /// Options for the `_num` helper.
    NumberFormat,
    /// Options for the `_price` helper.
    PriceFormat,
}

impl FormatKind {
    /// All kinds, in declaration order.
    pub const ALL: [FormatKind; 3] = [
        FormatKind::DateTimeFormat,
        FormatKind::NumberFormat,
        FormatKind::PriceFormat,
    ];

    /// Returns the canonical name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::DateTimeFormat => "DateTimeFormat",
            FormatKind::NumberFormat => "NumberFormat",
            FormatKind::PriceFormat => "PriceFormat",
        }
    }
}

impl FromStr for FormatKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownFormatKind(s.to_string()))
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
