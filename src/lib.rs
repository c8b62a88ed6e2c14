// SPDX-License-Identifier: MPL-2.0
//! `handlebars_intl` adds internationalization helpers to Handlebars templates.
//!
//! It provides message translation with Fluent, locale checks, and
//! locale-aware date, number and price formatting with per-locale defaults.

#![doc(html_root_url = "https://docs.rs/handlebars_intl/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod infrastructure;
pub mod localization;

pub use helpers::register_helpers;
pub use localization::Localization;
