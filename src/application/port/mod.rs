// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The helpers only know these two interfaces. Infrastructure adapters
//! implement them with Fluent and with the built-in formatter.
//!
//! # Available Ports
//!
//! - [`formatting`]: Locale-aware date and number formatting
//! - [`translation`]: Message lookup and the active locale
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Fluent or Handlebars types)
//! - Traits are `Send + Sync` so helpers holding them can be registered
//! - Methods are infallible: a helper always produces some string
//!
//! # Example
//!
//! ```ignore
//! use handlebars_intl::application::port::Translator;
//! use handlebars_intl::domain::format::OptionsBag;
//!
//! struct Echo;
//! impl Translator for Echo {
//!     fn translate(&self, key: &str, _: &OptionsBag) -> String { key.to_string() }
//!     fn current_locale(&self) -> String { "en".to_string() }
//! }
//! ```

pub mod formatting;
pub mod translation;

// Re-export main types for convenience
pub use formatting::LocaleFormatter;
pub use translation::Translator;
