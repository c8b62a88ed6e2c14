// SPDX-License-Identifier: MPL-2.0
//! Owns the pieces the helpers borrow: the format configuration store, the
//! translator and the locale formatter.
//!
//! # Examples
//!
//! ```
//! use handlebars::Handlebars;
//! use handlebars_intl::domain::format::{FormatKind, OptionsBag};
//! use handlebars_intl::i18n::FluentTranslator;
//! use handlebars_intl::Localization;
//! use serde_json::json;
//!
//! let translator = FluentTranslator::from_sources([("en-US", "hello = Hello { $name }!")])
//!     .expect("valid FTL");
//! let mut localization = Localization::new(translator);
//! localization
//!     .store_mut()
//!     .configure("en-US", FormatKind::NumberFormat, OptionsBag::new().with("maximumFractionDigits", 1))
//!     .expect("valid configuration");
//!
//! let mut hbs = Handlebars::new();
//! localization.register_helpers(&mut hbs);
//! let out = hbs
//!     .render_template(r#"{{__ "hello" name="Ada"}} {{_num 2.46}} {{_price 4999.99}}"#, &json!({}))
//!     .expect("renders");
//! assert_eq!(out, "Hello Ada! 2.5 €4,999.99");
//! ```

use crate::application::port::{LocaleFormatter, Translator};
use crate::application::query::resolve::HelperResolver;
use crate::application::store::ConfigStore;
use crate::helpers;
use crate::i18n::FluentTranslator;
use crate::infrastructure::IntlFormatter;
use handlebars::Handlebars;

pub struct Localization<T = FluentTranslator, F = IntlFormatter> {
    store: ConfigStore,
    translator: T,
    formatter: F,
}

impl<T: Translator> Localization<T, IntlFormatter> {
    /// Uses the built-in formatter and the default format configuration.
    pub fn new(translator: T) -> Self {
        Self::with_formatter(translator, IntlFormatter::new())
    }
}

impl<T: Translator, F: LocaleFormatter> Localization<T, F> {
    pub fn with_formatter(translator: T, formatter: F) -> Self {
        Self::with_store(ConfigStore::new(), translator, formatter)
    }

    pub fn with_store(store: ConfigStore, translator: T, formatter: F) -> Self {
        Self {
            store,
            translator,
            formatter,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Configuration changes made here are seen by later renders only.
    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn translator_mut(&mut self) -> &mut T {
        &mut self.translator
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn resolver(&self) -> HelperResolver<'_> {
        HelperResolver::new(&self.store, &self.translator, &self.formatter)
    }

    /// Registers the helpers on `registry`. The registry borrows `self`
    /// for as long as it lives.
    pub fn register_helpers<'reg>(&'reg self, registry: &mut Handlebars<'reg>) {
        helpers::register_helpers(registry, self.resolver());
    }
}
