// SPDX-License-Identifier: MPL-2.0
//! Built-in locale formatter.
//!
//! A lightweight stand-in for a full ICU stack: CLDR separators and digit
//! grouping come from `num-format`, month and weekday names from `chrono`'s
//! locale tables.
//! Dates are always written in UTC.

mod date;
mod locale;
mod number;

use crate::application::port::LocaleFormatter;
use crate::domain::date::DateValue;
use crate::domain::format::OptionsBag;

pub use date::INVALID_DATE;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntlFormatter;

impl IntlFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LocaleFormatter for IntlFormatter {
    fn format_date(&self, locale: &str, options: &OptionsBag, date: &DateValue) -> String {
        date::format(locale, options, date)
    }

    fn format_number(&self, locale: &str, options: &OptionsBag, value: f64) -> String {
        number::format(locale, options, value)
    }
}
