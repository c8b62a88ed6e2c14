// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale key whose entries apply when no locale-specific entry exists.
pub const ALL_LOCALES: &str = "all";

/// Locale used when neither the CLI, the config file nor the OS name a loaded one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Price Defaults
// ==========================================================================

/// Number style forced onto price formatting when none is resolved.
pub const DEFAULT_PRICE_STYLE: &str = "currency";

/// Currency of the built-in `PriceFormat` entry for all locales.
pub const DEFAULT_CURRENCY: &str = "EUR";

// ==========================================================================
// Settings File
// ==========================================================================

/// Name of the settings file inside the application config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "handlebars_intl";
