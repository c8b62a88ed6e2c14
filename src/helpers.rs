// SPDX-License-Identifier: MPL-2.0
//! Handlebars helpers.
//!
//! | Helper | Example |
//! |---|---|
//! | `__` | `{{__ "cart" count=7}}` |
//! | `_locale` | `{{_locale}}` |
//! | `localeIs` | `{{#if (localeIs "en")}}Hello{{/if}}` |
//! | `_date` | `{{_date "[2020, 2, 11]" month="long"}}` |
//! | `_num` | `{{_num 3000 maximumSignificantDigits=1}}` |
//! | `_price` | `{{_price 4999.99 currency="USD"}}` |
//!
//! Translations are written to the output unescaped. Every other helper
//! returns a value, so it is escaped as usual and can be used in
//! subexpressions. No helper fails a render because of its arguments.

use crate::application::query::resolve::{number_input, HelperResolver};
use crate::domain::format::OptionsBag;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    ScopedJson,
};
use serde_json::Value as Json;

pub const TRANSLATE: &str = "__";
pub const LOCALE: &str = "_locale";
pub const LOCALE_IS: &str = "localeIs";
pub const DATE: &str = "_date";
pub const NUMBER: &str = "_num";
pub const PRICE: &str = "_price";

/// Registers all six helpers, replacing helpers of the same names.
pub fn register_helpers<'reg>(registry: &mut Handlebars<'reg>, resolver: HelperResolver<'reg>) {
    registry.register_helper(TRANSLATE, Box::new(TranslateHelper(resolver)));
    registry.register_helper(LOCALE, Box::new(LocaleHelper(resolver)));
    registry.register_helper(LOCALE_IS, Box::new(LocaleIsHelper(resolver)));
    registry.register_helper(DATE, Box::new(DateHelper(resolver)));
    registry.register_helper(NUMBER, Box::new(NumberHelper(resolver)));
    registry.register_helper(PRICE, Box::new(PriceHelper(resolver)));
}

/// The named (hash) arguments of a call; `None` when it named none.
fn inline_options(h: &Helper<'_>) -> Option<OptionsBag> {
    OptionsBag::from_hash(h.hash().iter().map(|(name, value)| (*name, value.value())))
}

fn first_param<'a>(h: &'a Helper<'_>) -> Option<&'a Json> {
    h.param(0).map(|param| param.value())
}

fn text_param(h: &Helper<'_>) -> String {
    match first_param(h) {
        Some(Json::String(s)) => s.clone(),
        Some(Json::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

struct TranslateHelper<'a>(HelperResolver<'a>);

impl HelperDef for TranslateHelper<'_> {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = self
            .0
            .translate(&text_param(h), &inline_options(h).unwrap_or_default());
        out.write(&text)?;
        Ok(())
    }
}

struct LocaleHelper<'a>(HelperResolver<'a>);

impl HelperDef for LocaleHelper<'_> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        _: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        Ok(ScopedJson::Derived(Json::String(self.0.locale())))
    }
}

struct LocaleIsHelper<'a>(HelperResolver<'a>);

impl HelperDef for LocaleIsHelper<'_> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let matches = matches!(first_param(h), Some(Json::String(candidate)) if self.0.locale_is(candidate));
        Ok(ScopedJson::Derived(Json::Bool(matches)))
    }
}

struct DateHelper<'a>(HelperResolver<'a>);

impl HelperDef for DateHelper<'_> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let text = self.0.format_date(first_param(h), inline_options(h).as_ref());
        Ok(ScopedJson::Derived(Json::String(text)))
    }
}

struct NumberHelper<'a>(HelperResolver<'a>);

impl HelperDef for NumberHelper<'_> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let text = self
            .0
            .format_number(number_input(first_param(h)), inline_options(h).as_ref());
        Ok(ScopedJson::Derived(Json::String(text)))
    }
}

struct PriceHelper<'a>(HelperResolver<'a>);

impl HelperDef for PriceHelper<'_> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let text = self
            .0
            .format_price(number_input(first_param(h)), inline_options(h).as_ref());
        Ok(ScopedJson::Derived(Json::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{LocaleFormatter, Translator};
    use crate::application::store::ConfigStore;
    use crate::domain::date::DateValue;
    use crate::domain::format::FormatKind;
    use serde_json::json;

    struct Echo(&'static str);

    impl Translator for Echo {
        fn translate(&self, key: &str, attributes: &OptionsBag) -> String {
            match attributes.get("count") {
                Some(count) => format!("<b>{key}</b>:{count:?}"),
                None => format!("<b>{key}</b>"),
            }
        }

        fn current_locale(&self) -> String {
            self.0.to_string()
        }
    }

    /// Prints the options it receives so tests can see what was resolved.
    struct Describe;

    impl LocaleFormatter for Describe {
        fn format_date(&self, locale: &str, options: &OptionsBag, date: &DateValue) -> String {
            let date = date
                .instant()
                .map_or("invalid".to_string(), |d| d.format("%Y-%m-%d").to_string());
            format!("{locale}|{}|{date}", keys(options))
        }

        fn format_number(&self, locale: &str, options: &OptionsBag, value: f64) -> String {
            let style = options.get_str("style").unwrap_or("-");
            format!("{locale}|{}|{style}|{value}", keys(options))
        }
    }

    fn keys(options: &OptionsBag) -> String {
        options.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>().join(",")
    }

    fn render(store: &ConfigStore, locale: &'static str, template: &str, data: &Json) -> String {
        let translator = Echo(locale);
        let formatter = Describe;
        let mut registry = Handlebars::new();
        register_helpers(&mut registry, HelperResolver::new(store, &translator, &formatter));
        registry
            .render_template(template, data)
            .expect("template renders")
    }

    #[test]
    fn translation_is_not_escaped() {
        let out = render(&ConfigStore::new(), "en", r#"{{__ "title"}}"#, &json!({}));
        assert_eq!(out, "<b>title</b>");
    }

    #[test]
    fn translation_receives_hash_attributes() {
        let out = render(&ConfigStore::new(), "en", r#"{{__ "cart" count=7}}"#, &json!({}));
        assert_eq!(out, "<b>cart</b>:Number(7.0)");
    }

    #[test]
    fn locale_helpers() {
        let store = ConfigStore::new();
        assert_eq!(render(&store, "en", "{{_locale}}", &json!({})), "en");
        let template = r#"{{#if (localeIs "en")}}yes{{else}}no{{/if}}"#;
        assert_eq!(render(&store, "en", template, &json!({})), "yes");
        assert_eq!(render(&store, "en-US", template, &json!({})), "no");
        let upper = r#"{{#if (localeIs "EN")}}yes{{else}}no{{/if}}"#;
        assert_eq!(render(&store, "en", upper, &json!({})), "no");
    }

    #[test]
    fn number_helper_uses_inline_then_configured_options() {
        let mut store = ConfigStore::new();
        store
            .configure("de", FormatKind::NumberFormat, OptionsBag::new().with("useGrouping", false))
            .unwrap();

        assert_eq!(
            render(&store, "de", "{{_num 3000 maximumSignificantDigits=1}}", &json!({})),
            "de|maximumSignificantDigits|-|3000"
        );
        assert_eq!(render(&store, "de", "{{_num 3000}}", &json!({})), "de|useGrouping|-|3000");
        assert_eq!(render(&store, "fr", "{{_num 3000}}", &json!({})), "fr||-|3000");
    }

    #[test]
    fn price_helper_injects_and_preserves_style() {
        let store = ConfigStore::new();
        assert_eq!(
            render(&store, "en", "{{_price 4999.99}}", &json!({})),
            "en|currency,style|currency|4999.99"
        );
        assert_eq!(
            render(&store, "en", r#"{{_price 0.5 style="percent"}}"#, &json!({})),
            "en|style|percent|0.5"
        );
        assert_eq!(
            render(&store, "en", r#"{{_price 10 currency="USD"}}"#, &json!({})),
            "en|currency,style|currency|10"
        );
    }

    #[test]
    fn date_helper_reads_context_values_and_literals() {
        let store = ConfigStore::new();
        let data = json!({ "created": 1583922952743_i64 });
        assert_eq!(render(&store, "en", "{{_date created}}", &data), "en||2020-03-11");
        assert_eq!(
            render(&store, "en", r#"{{_date "[2020, 2, 11]" month="long"}}"#, &json!({})),
            "en|month|2020-03-11"
        );
        assert_eq!(
            render(&store, "en", r#"{{_date "not a date"}}"#, &json!({})),
            "en||invalid"
        );
    }

    #[test]
    fn named_option_with_missing_value_still_bypasses_configuration() {
        let mut store = ConfigStore::new();
        store
            .configure("en", FormatKind::NumberFormat, OptionsBag::new().with("useGrouping", false))
            .unwrap();
        let template = "{{_num 5 maximumFractionDigits=digits}}";
        assert_eq!(render(&store, "en", template, &json!({})), "en||-|5");
        assert_eq!(
            render(&store, "en", template, &json!({ "digits": 1 })),
            "en|maximumFractionDigits|-|5"
        );
    }

    #[test]
    fn non_numeric_arguments_do_not_abort_rendering() {
        let out = render(&ConfigStore::new(), "en", "{{_num missing}}", &json!({}));
        assert_eq!(out, "en||-|NaN");
    }
}
