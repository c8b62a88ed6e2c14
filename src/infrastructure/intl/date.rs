// SPDX-License-Identifier: MPL-2.0
//! Date and time formatting (UTC).
//!
//! Supported options: `weekday`, `year`, `month`, `day`, `hour`, `minute`,
//! `second`, `hour12`, and the shorthands `dateStyle` / `timeStyle`
//! (`full`, `long`, `medium`, `short`). Without any component option the
//! date is written as numeric year, month and day.

use super::locale;
use crate::domain::date::DateValue;
use crate::domain::format::OptionsBag;
use chrono::{DateTime, Datelike, Timelike, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// How a single field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Numeric,
    TwoDigit,
    Long,
    Short,
    Narrow,
}

impl Width {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "numeric" => Some(Width::Numeric),
            "2-digit" => Some(Width::TwoDigit),
            "long" => Some(Width::Long),
            "short" => Some(Width::Short),
            "narrow" => Some(Width::Narrow),
            _ => None,
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Width::Long | Width::Short | Width::Narrow)
    }
}

/// The fields requested by an option bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Fields {
    weekday: Option<Width>,
    year: Option<Width>,
    month: Option<Width>,
    day: Option<Width>,
    hour: Option<Width>,
    minute: Option<Width>,
    second: Option<Width>,
}

impl Fields {
    fn from_options(options: &OptionsBag) -> Self {
        let field = |name: &str| options.get_str(name).and_then(Width::parse);
        let mut fields = Fields {
            weekday: field("weekday"),
            year: field("year"),
            month: field("month"),
            day: field("day"),
            hour: field("hour"),
            minute: field("minute"),
            second: field("second"),
        };

        if let Some(style) = options.get_str("dateStyle") {
            let (weekday, month) = match style {
                "full" => (Some(Width::Long), Width::Long),
                "long" => (None, Width::Long),
                "medium" => (None, Width::Short),
                _ => (None, Width::Numeric),
            };
            fields.weekday = weekday;
            fields.year = Some(Width::Numeric);
            fields.month = Some(month);
            fields.day = Some(Width::Numeric);
        }
        if let Some(style) = options.get_str("timeStyle") {
            fields.hour = Some(Width::Numeric);
            fields.minute = Some(Width::TwoDigit);
            fields.second = (style != "short").then_some(Width::TwoDigit);
        }

        if fields.is_empty() {
            fields.year = Some(Width::Numeric);
            fields.month = Some(Width::Numeric);
            fields.day = Some(Width::Numeric);
        }
        fields
    }

    fn is_empty(&self) -> bool {
        *self == Fields::default()
    }

    fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}

pub(crate) fn format(locale: &str, options: &OptionsBag, date: &DateValue) -> String {
    let DateValue::Valid(instant) = date else {
        return INVALID_DATE.to_string();
    };
    let language = locale::language(locale);
    let region = locale::region(locale);
    let names = locale::chrono_locale(&language, region.as_deref());
    let fields = Fields::from_options(options);

    let weekday = fields
        .weekday
        .map(|width| text_field(instant, width, "%A", "%a", names));
    let date_text = fields
        .has_date()
        .then(|| date_part(instant, &fields, &language, region.as_deref(), names));
    let time_text = fields.has_time().then(|| {
        let twelve_hour = options
            .get_bool("hour12")
            .unwrap_or_else(|| locale::uses_12_hour_clock(&language, region.as_deref()));
        time_part(instant, &fields, twelve_hour)
    });

    let leading = match (weekday, date_text) {
        (Some(weekday), Some(date)) => Some(format!("{weekday}, {date}")),
        (weekday, date) => weekday.or(date),
    };
    match (leading, time_text) {
        (Some(date), Some(time)) => format!("{date}, {time}"),
        (date, time) => date.or(time).unwrap_or_default(),
    }
}

fn date_part(
    instant: &DateTime<Utc>,
    fields: &Fields,
    language: &str,
    region: Option<&str>,
    names: chrono::Locale,
) -> String {
    let year = fields.year.map(|width| match width {
        Width::TwoDigit => format!("{:02}", instant.year().rem_euclid(100)),
        _ => instant.year().to_string(),
    });
    let day = fields.day.map(|width| numeric(instant.day(), width));

    match fields.month {
        Some(width) if width.is_text() => {
            let month = text_field(instant, width, "%B", "%b", names);
            written_date(language, day, month, year)
        }
        month => {
            let month = month.map(|width| numeric(instant.month(), width));
            numeric_date(language, region, day, month, year)
        }
    }
}

/// "March 11, 2020", "11. März 2020", "11 mars 2020".
fn written_date(language: &str, day: Option<String>, month: String, year: Option<String>) -> String {
    match (language, day, year) {
        ("en", Some(day), Some(year)) => format!("{month} {day}, {year}"),
        ("en", Some(day), None) => format!("{month} {day}"),
        ("de", Some(day), year) => join(&[Some(format!("{day}.")), Some(month), year], " "),
        (_, day, year) => join(&[day, Some(month), year], " "),
    }
}

/// Numeric dates in the field order and separator customary for the locale.
fn numeric_date(
    language: &str,
    region: Option<&str>,
    day: Option<String>,
    month: Option<String>,
    year: Option<String>,
) -> String {
    match (language, region) {
        ("en", None | Some("US")) => join(&[month, day, year], "/"),
        ("de" | "ru" | "pl", _) => join(&[day, month, year], "."),
        ("nl", _) => join(&[day, month, year], "-"),
        ("ja" | "zh" | "ko", _) => join(&[year, month, day], "/"),
        ("en" | "fr" | "es" | "it" | "pt", _) => join(&[day, month, year], "/"),
        _ => join(&[year, month, day], "-"),
    }
}

fn time_part(instant: &DateTime<Utc>, fields: &Fields, twelve_hour: bool) -> String {
    let (hour, meridiem) = if twelve_hour {
        let (pm, hour) = instant.hour12();
        (hour, Some(if pm { "PM" } else { "AM" }))
    } else {
        (instant.hour(), None)
    };

    let mut parts = Vec::with_capacity(3);
    if let Some(width) = fields.hour {
        let width = if twelve_hour { width } else { Width::TwoDigit };
        parts.push(numeric(hour, width));
    }
    if fields.minute.is_some() {
        parts.push(format!("{:02}", instant.minute()));
    }
    if fields.second.is_some() {
        parts.push(format!("{:02}", instant.second()));
    }

    let clock = parts.join(":");
    match meridiem {
        Some(meridiem) if fields.hour.is_some() => format!("{clock} {meridiem}"),
        _ => clock,
    }
}

fn text_field(
    instant: &DateTime<Utc>,
    width: Width,
    long: &str,
    short: &str,
    names: chrono::Locale,
) -> String {
    match width {
        Width::Short => instant.format_localized(short, names).to_string(),
        Width::Narrow => instant
            .format_localized(long, names)
            .to_string()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        _ => instant.format_localized(long, names).to_string(),
    }
}

fn numeric(value: u32, width: Width) -> String {
    match width {
        Width::TwoDigit => format!("{:02}", value % 100),
        _ => value.to_string(),
    }
}

fn join(parts: &[Option<String>], separator: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
