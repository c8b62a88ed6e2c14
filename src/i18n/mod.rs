// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for templates.
//!
//! This module provides translation lookup using the Fluent localization system.
//! It handles language detection, translation file loading, and message formatting.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Loading of `<locale>.ftl` translation files from a directory
//! - Runtime language switching between loaded locales
//! - Fallback to the default locale when a message is missing

pub mod fluent;

pub use fluent::FluentTranslator;
