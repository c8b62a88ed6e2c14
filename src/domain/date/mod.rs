// SPDX-License-Identifier: MPL-2.0
//! Date helper input types.
//!
//! The `_date` helper accepts a number, a bracketed component list, a keyword
//! or any date string. [`DateInputForm`] classifies the raw argument and
//! [`DateInputForm::canonicalize`] turns it into a [`DateValue`].

pub mod input;
mod parse;

pub use input::{DateInputForm, DateKeyword};

use chrono::{DateTime, Utc};

/// Largest distance from the epoch, in milliseconds, that a date may have
/// (100 000 000 days either side).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// A canonical point in time, or the invalid-date sentinel.
///
/// Invalid dates are not errors: they are carried through to formatting,
/// which renders them as `"Invalid Date"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Valid(DateTime<Utc>),
    Invalid,
}

impl DateValue {
    /// Wraps an instant, rejecting values outside the supported epoch range.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        if instant.timestamp_millis().abs() <= MAX_EPOCH_MILLIS {
            DateValue::Valid(instant)
        } else {
            DateValue::Invalid
        }
    }

    /// Interprets `millis` as milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_epoch_millis(millis: i64) -> Self {
        if millis.abs() > MAX_EPOCH_MILLIS {
            return DateValue::Invalid;
        }
        DateTime::from_timestamp_millis(millis).map_or(DateValue::Invalid, DateValue::Valid)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, DateValue::Valid(_))
    }

    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Valid(instant) => Some(*instant),
            DateValue::Invalid => None,
        }
    }
}

impl From<Option<DateTime<Utc>>> for DateValue {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(DateValue::Invalid, DateValue::new)
    }
}
