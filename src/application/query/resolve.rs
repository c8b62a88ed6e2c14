// SPDX-License-Identifier: MPL-2.0
//! Option resolution for the formatting helpers.
//!
//! Every formatting helper picks exactly one option bag, in this order:
//!
//! 1. the inline options of the call, if it named at least one, even when
//!    none of the values could be kept;
//! 2. the bag configured for the kind and the current locale;
//! 3. the bag configured for the kind and the `"all"` locale;
//! 4. an empty bag.
//!
//! Bags are never merged across tiers.

use crate::application::port::{LocaleFormatter, Translator};
use crate::application::store::ConfigStore;
use crate::config::defaults::{ALL_LOCALES, DEFAULT_PRICE_STYLE};
use crate::domain::date::{DateInputForm, DateValue};
use crate::domain::format::{FormatKind, OptionsBag};
use chrono::{DateTime, Utc};
use serde_json::Value as Json;

/// Picks the option bag for a helper call. Pure; see the module docs for the order.
///
/// `inline` is `None` when the call named no options.
pub fn resolve_options(
    store: &ConfigStore,
    kind: FormatKind,
    locale: &str,
    inline: Option<&OptionsBag>,
) -> OptionsBag {
    if let Some(inline) = inline {
        tracing::debug!(%kind, locale, "using inline options");
        return inline.clone();
    }
    if let Some(bag) = store.lookup(kind, locale) {
        tracing::debug!(%kind, locale, "using locale options");
        return bag.clone();
    }
    if let Some(bag) = store.lookup(kind, ALL_LOCALES) {
        tracing::debug!(%kind, locale, "using options configured for all locales");
        return bag.clone();
    }
    OptionsBag::new()
}

/// [`resolve_options`] for prices, with `style = "currency"` added when the
/// resolved bag has no `style`.
pub fn resolve_price_options(
    store: &ConfigStore,
    locale: &str,
    inline: Option<&OptionsBag>,
) -> OptionsBag {
    let mut options = resolve_options(store, FormatKind::PriceFormat, locale, inline);
    if !options.contains_key("style") {
        options.insert("style", DEFAULT_PRICE_STYLE);
    }
    options
}

/// Coerces a template argument to a number the way `Intl` formatters do:
/// numeric strings are parsed, booleans are 0 or 1, anything else is NaN.
pub fn number_input(raw: Option<&Json>) -> f64 {
    match raw {
        Some(Json::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Json::String(s)) if s.trim().is_empty() => 0.0,
        Some(Json::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        Some(Json::Bool(b)) => f64::from(u8::from(*b)),
        _ => f64::NAN,
    }
}

/// Everything a helper invocation needs: the configuration store, the
/// translator and the formatter.
#[derive(Clone, Copy)]
pub struct HelperResolver<'a> {
    store: &'a ConfigStore,
    translator: &'a dyn Translator,
    formatter: &'a dyn LocaleFormatter,
}

impl<'a> HelperResolver<'a> {
    pub fn new(
        store: &'a ConfigStore,
        translator: &'a dyn Translator,
        formatter: &'a dyn LocaleFormatter,
    ) -> Self {
        Self {
            store,
            translator,
            formatter,
        }
    }

    pub fn locale(&self) -> String {
        self.translator.current_locale()
    }

    /// Exact, case-sensitive comparison with the current locale.
    pub fn locale_is(&self, candidate: &str) -> bool {
        self.translator.current_locale() == candidate
    }

    pub fn translate(&self, key: &str, attributes: &OptionsBag) -> String {
        self.translator.translate(key, attributes)
    }

    /// Formats the `_date` argument with the current time as reference.
    pub fn format_date(&self, raw: Option<&Json>, inline: Option<&OptionsBag>) -> String {
        self.format_date_at(raw, inline, Utc::now())
    }

    /// Formats the `_date` argument, using `now` for absent input and keywords.
    pub fn format_date_at(
        &self,
        raw: Option<&Json>,
        inline: Option<&OptionsBag>,
        now: DateTime<Utc>,
    ) -> String {
        let locale = self.locale();
        let date: DateValue = DateInputForm::classify(raw).canonicalize(now);
        let options = resolve_options(self.store, FormatKind::DateTimeFormat, &locale, inline);
        self.formatter.format_date(&locale, &options, &date)
    }

    pub fn format_number(&self, value: f64, inline: Option<&OptionsBag>) -> String {
        let locale = self.locale();
        let options = resolve_options(self.store, FormatKind::NumberFormat, &locale, inline);
        self.formatter.format_number(&locale, &options, value)
    }

    pub fn format_price(&self, value: f64, inline: Option<&OptionsBag>) -> String {
        let locale = self.locale();
        let options = resolve_price_options(self.store, &locale, inline);
        self.formatter.format_number(&locale, &options, value)
    }
}
