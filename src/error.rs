// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Translation(String),
    Configuration(ConfigurationError),
    Render(String),
}

/// Rejection reasons for a `configure` call.
/// The store is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The locale argument was empty.
    InvalidLocale(String),

    /// The format kind is not one of `DateTimeFormat`, `NumberFormat`, `PriceFormat`.
    UnknownFormatKind(String),

    /// The options argument was not a mapping of scalar values.
    InvalidOptions(String),
}

impl ConfigurationError {
    /// Name of the `configure` argument that failed validation.
    pub fn argument(&self) -> &'static str {
        match self {
            ConfigurationError::InvalidLocale(_) => "locale",
            ConfigurationError::UnknownFormatKind(_) => "kind",
            ConfigurationError::InvalidOptions(_) => "options",
        }
    }

    /// The offending value as it was received.
    pub fn received(&self) -> &str {
        match self {
            ConfigurationError::InvalidLocale(value)
            | ConfigurationError::UnknownFormatKind(value)
            | ConfigurationError::InvalidOptions(value) => value,
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::InvalidLocale(value) => write!(
                f,
                "invalid locale [{value}]: expected a non-empty language code such as \"en\" or \"all\""
            ),
            ConfigurationError::UnknownFormatKind(value) => write!(
                f,
                "invalid format kind [{value}]: expected \"DateTimeFormat\", \"NumberFormat\" or \"PriceFormat\""
            ),
            ConfigurationError::InvalidOptions(value) => write!(
                f,
                "invalid options [{value}]: expected a table of string, number or boolean values"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation(e) => write!(f, "Translation Error: {}", e),
            Error::Configuration(e) => write!(f, "Configuration Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::Configuration(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Self {
        Error::Render(err.to_string())
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Error::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
