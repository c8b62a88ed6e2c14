// SPDX-License-Identifier: MPL-2.0
//! Option bags passed through to the locale formatting primitives.
//!
//! A bag is opaque to the resolver: it is only ever merged by replacement,
//! never interpreted, apart from the `style` default of price formatting.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::btree_map::{self, BTreeMap};

/// A single formatting directive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl OptionValue {
    /// Converts a scalar JSON value. Returns `None` for null, arrays and objects.
    pub fn from_json(value: &Json) -> Option<Self> {
        match value {
            Json::Bool(b) => Some(OptionValue::Bool(*b)),
            Json::Number(n) => n.as_f64().map(OptionValue::Number),
            Json::String(s) => Some(OptionValue::String(s.clone())),
            Json::Null | Json::Array(_) | Json::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; numeric strings are coerced the way `Intl` coerces them.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            OptionValue::String(s) => s.trim().parse().ok(),
            OptionValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::String(s) if s == "true" => Some(true),
            OptionValue::String(s) if s == "false" => Some(false),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(f64::from(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// Mapping from option name to value, e.g. `style`, `currency`,
/// `minimumFractionDigits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsBag(BTreeMap<String, OptionValue>);

impl OptionsBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from a configuration value, which must be a mapping of scalars.
    pub fn from_json(value: &Json) -> Result<Self, ConfigurationError> {
        let Json::Object(map) = value else {
            return Err(ConfigurationError::InvalidOptions(value.to_string()));
        };
        map.iter()
            .map(|(key, value)| {
                OptionValue::from_json(value)
                    .map(|value| (key.clone(), value))
                    .ok_or_else(|| ConfigurationError::InvalidOptions(format!("{key}={value}")))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }

    /// Builds a bag from template call-site arguments, dropping entries that
    /// are not scalars instead of failing the render.
    ///
    /// Returns `None` only when there are no arguments at all. Arguments
    /// whose values were all dropped still give `Some` (possibly empty bag).
    pub fn from_hash<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a Json)>,
    {
        let mut entries = entries.into_iter().peekable();
        entries.peek()?;
        let mut bag = Self::new();
        for (key, value) in entries {
            match OptionValue::from_json(value) {
                Some(value) => {
                    bag.insert(key, value);
                }
                None => tracing::debug!(option = key, "ignoring non-scalar inline option"),
            }
        }
        Some(bag)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(OptionValue::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionsBag {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a OptionsBag {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_accepts_scalar_mapping() {
        let bag = OptionsBag::from_json(&json!({
            "style": "currency",
            "minimumFractionDigits": 2,
            "useGrouping": false
        }))
        .expect("mapping of scalars is valid");

        assert_eq!(bag.get_str("style"), Some("currency"));
        assert_eq!(bag.get_f64("minimumFractionDigits"), Some(2.0));
        assert_eq!(bag.get_bool("useGrouping"), Some(false));
    }

    #[test]
    fn from_json_rejects_non_mappings() {
        for value in [json!(null), json!("currency"), json!(3), json!([1, 2])] {
            let err = OptionsBag::from_json(&value).unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidOptions(_)));
        }
    }

    #[test]
    fn from_json_rejects_nested_values() {
        let err = OptionsBag::from_json(&json!({ "style": { "nested": true } })).unwrap_err();
        assert!(err.received().starts_with("style="));
    }

    #[test]
    fn from_hash_drops_non_scalars() {
        let style = json!("percent");
        let nested = json!({ "x": 1 });
        let bag = OptionsBag::from_hash([("style", &style), ("bogus", &nested)])
            .expect("arguments were given");
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get_str("style"), Some("percent"));
    }

    #[test]
    fn from_hash_distinguishes_no_arguments_from_dropped_ones() {
        let null = Json::Null;
        assert_eq!(OptionsBag::from_hash(std::iter::empty()), None);
        assert_eq!(OptionsBag::from_hash([("digits", &null)]), Some(OptionsBag::new()));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let bag = OptionsBag::new().with("maximumFractionDigits", "1");
        assert_eq!(bag.get_f64("maximumFractionDigits"), Some(1.0));
        assert_eq!(bag.get_str("maximumFractionDigits"), Some("1"));
    }

    #[test]
    fn deserializes_from_toml_table() {
        let bag: OptionsBag = toml::from_str("style = \"currency\"\ncurrency = \"USD\"\nminimumFractionDigits = 0")
            .expect("valid toml table");
        assert_eq!(bag.get_str("currency"), Some("USD"));
        assert_eq!(bag.get_f64("minimumFractionDigits"), Some(0.0));
    }
}
