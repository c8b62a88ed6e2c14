// SPDX-License-Identifier: MPL-2.0
//! Classification of the raw `_date` argument.

use super::{parse, DateValue};
use chrono::{DateTime, Utc};
use serde_json::Value as Json;

/// Words that stand for the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKeyword {
    Now,
    Today,
}

impl DateKeyword {
    /// Case-insensitive match against `now` and `today`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("now") {
            Some(DateKeyword::Now)
        } else if text.eq_ignore_ascii_case("today") {
            Some(DateKeyword::Today)
        } else {
            None
        }
    }
}

/// The shape of the argument given to the date helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInputForm {
    /// Milliseconds since the Unix epoch.
    Epoch(i64),
    /// Year, 0-based month, day, hour, minute, second, millisecond.
    /// Trailing components may be omitted.
    ComponentArray(Vec<i64>),
    Keyword(DateKeyword),
    FreeformString(String),
    Absent,
}

impl DateInputForm {
    /// Classifies a template argument. `None`, `null` and any value that is
    /// neither a number nor a string count as absent.
    pub fn classify(raw: Option<&Json>) -> Self {
        match raw {
            Some(Json::Number(n)) => Self::from_number(n),
            Some(Json::String(s)) => Self::from_text(s),
            _ => DateInputForm::Absent,
        }
    }

    /// Classifies a string argument.
    pub fn from_text(text: &str) -> Self {
        if let Some(components) = bracketed_components(text) {
            return DateInputForm::ComponentArray(components);
        }
        if let Some(keyword) = DateKeyword::parse(text) {
            return DateInputForm::Keyword(keyword);
        }
        DateInputForm::FreeformString(text.to_string())
    }

    fn from_number(n: &serde_json::Number) -> Self {
        match n.as_i64() {
            Some(millis) => DateInputForm::Epoch(millis),
            // `as` saturates; out-of-range values become invalid on conversion
            None => DateInputForm::Epoch(n.as_f64().map_or(i64::MAX, |f| f.trunc() as i64)),
        }
    }

    /// Converts to a point in time, using `now` for the keyword and absent forms.
    pub fn canonicalize(&self, now: DateTime<Utc>) -> DateValue {
        match self {
            DateInputForm::Epoch(millis) => DateValue::from_epoch_millis(*millis),
            DateInputForm::ComponentArray(components) => parse::from_components(components),
            DateInputForm::Keyword(_) | DateInputForm::Absent => DateValue::new(now),
            DateInputForm::FreeformString(text) => parse::freeform(text),
        }
    }
}

/// `"[2020, 2, 11]"` → `[2020, 2, 11]`. Returns `None` unless the text is
/// bracketed and every component is an integer.
fn bracketed_components(text: &str) -> Option<Vec<i64>> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    let compact: String = inner.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .map(|part| part.parse::<i64>().ok())
        .collect()
}
