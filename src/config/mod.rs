// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's settings file: the preferred language,
//! where translation files live, and the format configuration entries to
//! load into a [`ConfigStore`].
//!
//! # Examples
//!
//! ```no_run
//! use handlebars_intl::application::store::ConfigStore;
//! use handlebars_intl::config;
//! use std::path::Path;
//!
//! // Load the settings file from the platform config directory
//! let config = config::load().unwrap_or_default();
//!
//! // Or from a specific path
//! let config = config::load_from_path(Path::new("settings.toml")).unwrap_or_default();
//!
//! // Apply the `[[formats]]` entries; invalid ones are skipped
//! let mut store = ConfigStore::new();
//! let applied = config.apply(&mut store);
//! println!("{applied} format entries applied");
//! ```
//!
//! A settings file looks like this:
//!
//! ```toml
//! language = "de"
//! locales_dir = "locales"
//!
//! [[formats]]
//! locale = "all"
//! kind = "NumberFormat"
//! options = { maximumFractionDigits = 2 }
//!
//! [[formats]]
//! locale = "en"
//! kind = "PriceFormat"
//! options = { style = "currency", currency = "USD" }
//! ```

pub mod defaults;

use crate::application::store::{ConfigStore, FormatEntry};
use crate::error::Result;
use defaults::{APP_NAME, CONFIG_FILE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub locales_dir: Option<PathBuf>,
    #[serde(default)]
    pub formats: Vec<FormatEntry>,
}

impl Config {
    /// Runs a batch `configure` over the `formats` entries, in file order.
    /// Returns the number of entries applied.
    pub fn apply(&self, store: &mut ConfigStore) -> usize {
        store.configure_batch(self.formats.iter().cloned())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Reads a settings file. A file that is not valid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), "ignoring invalid settings file: {err}");
        Config::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::FormatKind;
    use tempfile::tempdir;

    const SETTINGS: &str = r#"
language = "de"
locales_dir = "locales"

[[formats]]
locale = "all"
kind = "NumberFormat"
options = { maximumFractionDigits = 2 }

[[formats]]
locale = "en"
kind = "PriceFormat"
options = { currency = "USD" }
"#;

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, SETTINGS).expect("failed to write settings");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.language.as_deref(), Some("de"));
        assert_eq!(loaded.locales_dir, Some(PathBuf::from("locales")));
        assert_eq!(loaded.formats.len(), 2);
        assert_eq!(loaded.formats[1].kind, "PriceFormat");
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.formats.is_empty());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn apply_configures_store_and_skips_bad_entries() {
        let config: Config = toml::from_str(
            r#"
[[formats]]
locale = "en"
kind = "NumberFormat"
options = { useGrouping = false }

[[formats]]
locale = "en"
kind = "TimeFormat"
options = {}

[[formats]]
locale = "de"
kind = "DateTimeFormat"
options = "long"
"#,
        )
        .expect("valid toml");

        let mut store = ConfigStore::new();
        assert_eq!(config.apply(&mut store), 1);
        assert_eq!(
            store
                .lookup(FormatKind::NumberFormat, "en")
                .and_then(|bag| bag.get_bool("useGrouping")),
            Some(false)
        );
        assert!(store.lookup(FormatKind::DateTimeFormat, "de").is_none());
    }

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.language.is_none());
        assert!(config.locales_dir.is_none());
        assert!(config.formats.is_empty());
    }
}
