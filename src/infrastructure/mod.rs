// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`intl`]: Date and number formatting (implements [`LocaleFormatter`])
//!
//! The Fluent translator lives in [`crate::i18n`].
//!
//! [`LocaleFormatter`]: crate::application::port::LocaleFormatter

pub mod intl;

// Re-export main types for convenience
pub use intl::IntlFormatter;
