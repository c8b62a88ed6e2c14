// SPDX-License-Identifier: MPL-2.0
use handlebars::Handlebars;
use handlebars_intl::config::{self, Config};
use handlebars_intl::error::{Error, Result};
use handlebars_intl::i18n::FluentTranslator;
use handlebars_intl::Localization;
use serde_json::Value as Json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Render a Handlebars template with the i18n helpers

USAGE:
  handlebars-intl [OPTIONS] <TEMPLATE>

OPTIONS:
  --lang <LOCALE>     Locale to render in (must have a translation file)
  --config <FILE>     Settings file [default: platform config directory]
  --locales <DIR>     Directory of <locale>.ftl translation files
  --data <FILE>       JSON file used as the template context
  -h, --help          Print this help
";

struct Args {
    lang: Option<String>,
    config: Option<PathBuf>,
    locales: Option<PathBuf>,
    data: Option<PathBuf>,
    template: PathBuf,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let invalid = |err: pico_args::Error| Error::Config(err.to_string());
    let parsed = Args {
        lang: args.opt_value_from_str("--lang").map_err(invalid)?,
        config: args.opt_value_from_str("--config").map_err(invalid)?,
        locales: args.opt_value_from_str("--locales").map_err(invalid)?,
        data: args.opt_value_from_str("--data").map_err(invalid)?,
        template: args.free_from_str().map_err(invalid)?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("ignoring extra arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn run(args: Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut translator = match args.locales.as_ref().or(config.locales_dir.as_ref()) {
        Some(dir) => FluentTranslator::from_dir(dir)?,
        None => FluentTranslator::new(),
    };
    translator.select_locale(args.lang, &config);
    tracing::info!(locale = %translator.locale(), "rendering");

    let mut localization = Localization::new(translator);
    apply_formats(&config, &mut localization);

    let template = fs::read_to_string(&args.template)?;
    let data: Json = match &args.data {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Json::Object(Default::default()),
    };

    let mut hbs = Handlebars::new();
    localization.register_helpers(&mut hbs);
    Ok(hbs.render_template(&template, &data)?)
}

fn apply_formats(config: &Config, localization: &mut Localization) {
    let applied = config.apply(localization.store_mut());
    tracing::debug!(applied, total = config.formats.len(), "format configuration loaded");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
