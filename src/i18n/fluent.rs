// SPDX-License-Identifier: MPL-2.0
use crate::application::port::Translator;
use crate::config::defaults::DEFAULT_LOCALE;
use crate::config::Config;
use crate::domain::format::{OptionValue, OptionsBag};
use crate::error::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

const FTL_EXTENSION: &str = "ftl";

pub struct FluentTranslator {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for FluentTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl FluentTranslator {
    /// Creates a translator with no messages, set to the default locale.
    pub fn new() -> Self {
        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale.clone(),
            fallback_locale: default_locale,
        }
    }

    /// Builds a translator from `(locale, ftl source)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if a locale tag or an FTL source does not parse.
    pub fn from_sources<I, L, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, S)>,
        L: AsRef<str>,
        S: Into<String>,
    {
        let mut translator = Self::new();
        for (locale, source) in sources {
            let locale = parse_locale(locale.as_ref())?;
            translator.add_resource(locale, source.into())?;
        }
        Ok(translator)
    }

    /// Loads every `<locale>.ftl` file in `dir`. Files whose stem is not a
    /// valid locale tag are skipped.
    ///
    /// # Errors
    ///
    /// Fails if the directory or a file cannot be read, or a file does not parse.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut translator = Self::new();
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == FTL_EXTENSION))
            .collect();
        paths.sort();

        for path in paths {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match stem.parse::<LanguageIdentifier>() {
                Ok(locale) => translator.add_resource(locale, fs::read_to_string(&path)?)?,
                Err(_) => tracing::warn!(path = %path.display(), "skipping translation file with invalid locale name"),
            }
        }
        Ok(translator)
    }

    /// Adds FTL messages for `locale`, creating its bundle on first use.
    ///
    /// # Errors
    ///
    /// Fails if the source does not parse or redefines an existing message.
    pub fn add_resource(&mut self, locale: LanguageIdentifier, source: String) -> Result<()> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::Translation(format!("failed to parse FTL for {locale}: {errors:?}"))
        })?;
        if !self.bundles.contains_key(&locale) {
            self.available_locales.push(locale.clone());
        }
        let bundle = self.bundles.entry(locale.clone()).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            bundle
        });
        bundle.add_resource(resource).map_err(|errors| {
            Error::Translation(format!("failed to add FTL resource for {locale}: {errors:?}"))
        })
    }

    /// Picks the initial locale: CLI flag, then config file, then OS locale,
    /// each only if loaded. Keeps the current locale when none applies.
    pub fn select_locale(&mut self, cli_lang: Option<String>, config: &Config) {
        if let Some(locale) = resolve_locale(cli_lang, config, &self.available_locales) {
            self.current_locale = locale;
        }
    }

    /// Switches to `locale` if it has been loaded. Returns whether it switched.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Formats `key` in the current locale, falling back to the default
    /// locale. `message.attribute` keys address Fluent attributes.
    pub fn tr(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        [&self.current_locale, &self.fallback_locale]
            .into_iter()
            .filter_map(|locale| self.bundles.get(locale))
            .find_map(|bundle| format_message(bundle, key, args))
    }
}

impl Translator for FluentTranslator {
    fn translate(&self, key: &str, attributes: &OptionsBag) -> String {
        let args = fluent_args(attributes);
        self.tr(key, args.as_ref()).unwrap_or_else(|| key.to_string())
    }

    fn current_locale(&self) -> String {
        self.current_locale.to_string()
    }
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs<'_>>,
) -> Option<String> {
    let (id, attribute) = match key.split_once('.') {
        Some((id, attribute)) => (id, Some(attribute)),
        None => (key, None),
    };
    let message = bundle.get_message(id)?;
    let pattern = match attribute {
        Some(name) => message.get_attribute(name)?.value(),
        None => message.value()?,
    };
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        tracing::warn!(key, "Fluent formatting errors: {:?}", errors);
    }
    Some(value.into_owned())
}

fn fluent_args(attributes: &OptionsBag) -> Option<FluentArgs<'_>> {
    if attributes.is_empty() {
        return None;
    }
    let mut args = FluentArgs::new();
    for (name, value) in attributes {
        let value = match value {
            OptionValue::Number(n) => FluentValue::from(*n),
            OptionValue::String(s) => FluentValue::from(s.as_str()),
            OptionValue::Bool(b) => FluentValue::from(b.to_string()),
        };
        args.set(name.as_str(), value);
    }
    Some(args)
}

fn parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    tag.parse()
        .map_err(|_| Error::Translation(format!("invalid locale identifier: {tag}")))
}

/// First loaded locale among the CLI flag, the settings file and the OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.language.clone(), sys_locale::get_locale()]
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
