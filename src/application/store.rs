// SPDX-License-Identifier: MPL-2.0
//! The per-locale format configuration table.
//!
//! [`ConfigStore`] owns one [`OptionsBag`] per (format kind, locale) pair.
//! Writes replace whole bags; nothing is merged across calls. The locale key
//! [`ALL_LOCALES`] holds the fallback for locales without their own entry.
//!
//! The store does no locking of its own. Configure it through `&mut` during
//! setup, then hand out shared references for rendering.

use crate::config::defaults::{ALL_LOCALES, DEFAULT_CURRENCY, DEFAULT_PRICE_STYLE};
use crate::domain::format::{FormatKind, OptionsBag};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::HashMap;

/// One loosely typed `configure` request, as read from a settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub locale: String,
    pub kind: String,
    #[serde(default)]
    pub options: Json,
}

impl FormatEntry {
    pub fn new(locale: impl Into<String>, kind: impl Into<String>, options: Json) -> Self {
        Self {
            locale: locale.into(),
            kind: kind.into(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    table: HashMap<FormatKind, HashMap<String, OptionsBag>>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Creates a store holding only the built-in price default
    /// (`{style: "currency", currency: "EUR"}` for all locales).
    #[must_use]
    pub fn new() -> Self {
        let mut table: HashMap<FormatKind, HashMap<String, OptionsBag>> = HashMap::new();
        table.entry(FormatKind::PriceFormat).or_default().insert(
            ALL_LOCALES.to_string(),
            OptionsBag::new()
                .with("style", DEFAULT_PRICE_STYLE)
                .with("currency", DEFAULT_CURRENCY),
        );
        Self { table }
    }

    /// Stores `options` for `kind` in `locale`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidLocale`] if `locale` is empty.
    pub fn configure(
        &mut self,
        locale: &str,
        kind: FormatKind,
        options: OptionsBag,
    ) -> Result<(), ConfigurationError> {
        validate_locale(locale)?;
        self.table
            .entry(kind)
            .or_default()
            .insert(locale.to_string(), options);
        Ok(())
    }

    /// Loosely typed [`configure`](Self::configure): the kind is given by
    /// name and the options as a JSON-like value.
    ///
    /// # Errors
    ///
    /// Fails on an empty locale, an unknown kind name, or options that are not
    /// a mapping of scalars, checked in that order.
    pub fn configure_raw(
        &mut self,
        locale: &str,
        kind: &str,
        options: &Json,
    ) -> Result<(), ConfigurationError> {
        validate_locale(locale)?;
        let kind: FormatKind = kind.parse()?;
        let options = OptionsBag::from_json(options)?;
        self.configure(locale, kind, options)
    }

    /// Applies each entry in order. Invalid entries are logged and skipped;
    /// the remaining entries are still applied.
    ///
    /// Returns the number of entries applied.
    pub fn configure_batch<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = FormatEntry>,
    {
        let mut applied = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            match self.configure_raw(&entry.locale, &entry.kind, &entry.options) {
                Ok(()) => applied += 1,
                Err(err) => tracing::warn!(
                    index,
                    argument = err.argument(),
                    "skipping format configuration entry: {err}"
                ),
            }
        }
        applied
    }

    /// Returns the bag stored for `kind` in `locale`, if any.
    pub fn lookup(&self, kind: FormatKind, locale: &str) -> Option<&OptionsBag> {
        self.table.get(&kind).and_then(|by_locale| by_locale.get(locale))
    }
}

fn validate_locale(locale: &str) -> Result<(), ConfigurationError> {
    if locale.is_empty() {
        return Err(ConfigurationError::InvalidLocale(locale.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_store_has_price_default_for_all_locales() {
        let store = ConfigStore::new();
        let price = store
            .lookup(FormatKind::PriceFormat, ALL_LOCALES)
            .expect("price default");
        assert_eq!(price.get_str("style"), Some("currency"));
        assert_eq!(price.get_str("currency"), Some("EUR"));
        assert!(store.lookup(FormatKind::NumberFormat, ALL_LOCALES).is_none());
        assert!(store.lookup(FormatKind::DateTimeFormat, "en").is_none());
    }

    #[test]
    fn configure_then_lookup_returns_same_bag() {
        let mut store = ConfigStore::new();
        let options = OptionsBag::new()
            .with("maximumFractionDigits", 1)
            .with("useGrouping", false);

        for kind in FormatKind::ALL {
            store
                .configure("de", kind, options.clone())
                .expect("valid configuration");
            assert_eq!(store.lookup(kind, "de"), Some(&options));
        }
    }

    #[test]
    fn later_configure_replaces_without_merging() {
        let mut store = ConfigStore::new();
        store
            .configure("fr", FormatKind::NumberFormat, OptionsBag::new().with("a", 1))
            .unwrap();
        store
            .configure("fr", FormatKind::NumberFormat, OptionsBag::new().with("b", 2))
            .unwrap();

        let bag = store.lookup(FormatKind::NumberFormat, "fr").unwrap();
        assert!(!bag.contains_key("a"));
        assert_eq!(bag.get_f64("b"), Some(2.0));
    }

    #[test]
    fn empty_locale_is_rejected_and_store_unchanged() {
        let mut store = ConfigStore::new();
        let before = store.clone();
        let err = store
            .configure("", FormatKind::NumberFormat, OptionsBag::new())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidLocale(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn raw_configure_rejects_unknown_kind() {
        let mut store = ConfigStore::new();
        let before = store.clone();
        let err = store
            .configure_raw("en", "CurrencyFormat", &json!({ "style": "currency" }))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownFormatKind("CurrencyFormat".into()));
        assert_eq!(store, before);
    }

    #[test]
    fn raw_configure_rejects_non_mapping_options() {
        let mut store = ConfigStore::new();
        let before = store.clone();
        for options in [json!(null), json!("currency"), json!(42)] {
            let err = store.configure_raw("en", "NumberFormat", &options).unwrap_err();
            assert_eq!(err.argument(), "options");
        }
        assert_eq!(store, before);
    }

    #[test]
    fn raw_configure_checks_locale_first() {
        let mut store = ConfigStore::new();
        let err = store.configure_raw("", "Nope", &json!(null)).unwrap_err();
        assert_eq!(err.argument(), "locale");
    }

    #[test]
    fn raw_configure_stores_parsed_bag() {
        let mut store = ConfigStore::new();
        store
            .configure_raw("all", "DateTimeFormat", &json!({ "year": "numeric", "month": "long" }))
            .expect("valid raw configuration");
        let bag = store.lookup(FormatKind::DateTimeFormat, "all").unwrap();
        assert_eq!(bag.get_str("month"), Some("long"));
    }

    #[test]
    fn batch_skips_invalid_entries_and_keeps_going() {
        let mut store = ConfigStore::new();
        let applied = store.configure_batch([
            FormatEntry::new("en", "NumberFormat", json!({ "maximumFractionDigits": 2 })),
            FormatEntry::new("de", "Bogus", json!({})),
            FormatEntry::new("", "NumberFormat", json!({})),
            FormatEntry::new("de", "PriceFormat", json!({ "currency": "CHF" })),
        ]);

        assert_eq!(applied, 2);
        assert!(store.lookup(FormatKind::NumberFormat, "en").is_some());
        assert!(store.lookup(FormatKind::NumberFormat, "").is_none());
        assert_eq!(
            store
                .lookup(FormatKind::PriceFormat, "de")
                .and_then(|bag| bag.get_str("currency")),
            Some("CHF")
        );
    }

    #[test]
    fn batch_applies_in_order_so_last_write_wins() {
        let mut store = ConfigStore::new();
        store.configure_batch([
            FormatEntry::new("en", "NumberFormat", json!({ "v": 1 })),
            FormatEntry::new("en", "NumberFormat", json!({ "v": 2 })),
        ]);
        let bag = store.lookup(FormatKind::NumberFormat, "en").unwrap();
        assert_eq!(bag.get_f64("v"), Some(2.0));
    }
}
