// SPDX-License-Identifier: MPL-2.0
//! Locale formatting port.
//!
//! Option names follow the conventions of platform internationalization
//! APIs (`style`, `currency`, `minimumFractionDigits`, `month`, `hour12`, ...).
//! Unknown options are ignored by implementations.

use crate::domain::date::DateValue;
use crate::domain::format::OptionsBag;

pub trait LocaleFormatter: Send + Sync {
    /// Formats a date. [`DateValue::Invalid`] must still produce a string.
    fn format_date(&self, locale: &str, options: &OptionsBag, date: &DateValue) -> String;

    /// Formats a number. Non-finite values must still produce a string.
    fn format_number(&self, locale: &str, options: &OptionsBag, value: f64) -> String;
}
