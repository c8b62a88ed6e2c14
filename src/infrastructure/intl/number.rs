// SPDX-License-Identifier: MPL-2.0
//! Number, percent and currency formatting.
//!
//! Supported options: `style` (`decimal`, `percent`, `currency`), `currency`,
//! `currencyDisplay` (`symbol`, `code`), `minimumFractionDigits`,
//! `maximumFractionDigits`, `maximumSignificantDigits`, `useGrouping`.

use super::locale;
use crate::config::defaults::DEFAULT_CURRENCY;
use crate::domain::format::OptionsBag;
use num_format::ToFormattedString;

const MAX_FRACTION_DIGITS: usize = 20;
const NO_BREAK_SPACE: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Decimal,
    Percent,
    Currency,
}

impl Style {
    fn from_options(options: &OptionsBag) -> Self {
        match options.get_str("style") {
            Some("percent") => Style::Percent,
            Some("currency") => Style::Currency,
            _ => Style::Decimal,
        }
    }
}

pub(crate) fn format(locale: &str, options: &OptionsBag, value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let language = locale::language(locale);
    let style = Style::from_options(options);
    let currency = options
        .get_str("currency")
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_uppercase();

    let scaled = if style == Style::Percent { value * 100.0 } else { value };
    let digits = if scaled.is_infinite() {
        "∞".to_string()
    } else {
        localized_digits(locale, options, style, &currency, scaled.abs())
    };
    let negative = scaled.is_sign_negative() && digits.chars().any(|c| matches!(c, '1'..='9' | '∞'));
    let sign = if negative { "-" } else { "" };

    match style {
        Style::Decimal => format!("{sign}{digits}"),
        Style::Percent if locale::symbol_leads(&language) => format!("{sign}{digits}%"),
        Style::Percent => format!("{sign}{digits}{NO_BREAK_SPACE}%"),
        Style::Currency => {
            let symbol = match options.get_str("currencyDisplay") {
                Some("code") | Some("name") => currency.clone(),
                _ => currency_symbol(&currency).map_or_else(|| currency.clone(), str::to_string),
            };
            let alphabetic = symbol.chars().all(|c| c.is_ascii_alphabetic());
            if locale::symbol_leads(&language) {
                let gap = if alphabetic { NO_BREAK_SPACE.to_string() } else { String::new() };
                format!("{sign}{symbol}{gap}{digits}")
            } else {
                format!("{sign}{digits}{NO_BREAK_SPACE}{symbol}")
            }
        }
    }
}

/// Rounds `value` (non-negative, finite) and renders it with the locale's separators.
fn localized_digits(
    locale: &str,
    options: &OptionsBag,
    style: Style,
    currency: &str,
    value: f64,
) -> String {
    let plain = match options.get_f64("maximumSignificantDigits") {
        Some(significant) => round_significant(value, clamp_digits(significant, 1, 21)),
        None => {
            let (min, max) = fraction_digits(options, style, currency);
            trim_fraction(format!("{value:.max$}"), min)
        }
    };

    let data = locale::number_locale(locale);
    let (integer, fraction) = plain.split_once('.').unwrap_or((&plain, ""));
    let integer = if options.get_bool("useGrouping").unwrap_or(true) {
        grouped(integer, &data)
    } else {
        integer.to_string()
    };
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}{}{fraction}", data.decimal())
    }
}

/// Groups an integer digit string with the locale's separator and grouping
/// style. Digit strings beyond `u128` are left ungrouped.
fn grouped(integer: &str, data: &num_format::Locale) -> String {
    integer
        .parse::<u128>()
        .map_or_else(|_| integer.to_string(), |n| n.to_formatted_string(data))
}

/// Effective (minimum, maximum) fraction digits, reconciling the options
/// with the style defaults the way `Intl.NumberFormat` does.
fn fraction_digits(options: &OptionsBag, style: Style, currency: &str) -> (usize, usize) {
    let (default_min, default_max) = match style {
        Style::Decimal => (0, 3),
        Style::Percent => (0, 0),
        Style::Currency => {
            let minor = currency_minor_units(currency);
            (minor, minor)
        }
    };
    let min = options
        .get_f64("minimumFractionDigits")
        .map(|d| clamp_digits(d, 0, MAX_FRACTION_DIGITS));
    let max = options
        .get_f64("maximumFractionDigits")
        .map(|d| clamp_digits(d, 0, MAX_FRACTION_DIGITS));

    match (min, max) {
        (Some(min), Some(max)) => (min.min(max), max),
        (Some(min), None) => (min, default_max.max(min)),
        (None, Some(max)) => (default_min.min(max), max),
        (None, None) => (default_min, default_max),
    }
}

fn clamp_digits(value: f64, min: usize, max: usize) -> usize {
    if value.is_nan() {
        return min;
    }
    (value.trunc().max(0.0) as usize).clamp(min, max)
}

fn round_significant(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let integer_digits = value.log10().floor() as i64 + 1;
    let decimals = significant as i64 - integer_digits;
    if decimals >= 0 {
        let decimals = decimals as usize;
        trim_fraction(format!("{value:.decimals$}"), 0)
    } else {
        let factor = 10f64.powi(i32::try_from(-decimals).unwrap_or(i32::MAX));
        format!("{:.0}", (value / factor).round() * factor)
    }
}

/// Drops trailing fraction zeros while more than `min` fraction digits remain.
fn trim_fraction(mut text: String, min: usize) -> String {
    let Some(dot) = text.find('.') else {
        return text;
    };
    while text.len() - dot - 1 > min && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "RUB" => "₽",
        "PLN" => "zł",
        "TRY" => "₺",
        "ILS" => "₪",
        _ => return None,
    })
}

fn currency_minor_units(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "TND" | "JOD" => 3,
        _ => 2,
    }
}
