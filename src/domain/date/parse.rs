// SPDX-License-Identifier: MPL-2.0
//! Calendar construction and free-form parsing.
//!
//! Naive (zone-less) inputs are interpreted as UTC.

use super::DateValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%Y/%m/%d", "%m/%d/%Y"];

/// Builds a date from (year, month0, day, hour, minute, second, millisecond).
///
/// Out-of-range components roll over into the next larger unit, so
/// `[2020, 12, 1]` is January 2021 and `[2020, 2, 0]` is the last day of
/// February. Years 0 to 99 mean 1900 to 1999. Components past the seventh
/// are ignored.
pub(super) fn from_components(components: &[i64]) -> DateValue {
    build_from_components(components).into()
}

fn build_from_components(components: &[i64]) -> Option<DateTime<Utc>> {
    let component = |index: usize, default: i64| components.get(index).copied().unwrap_or(default);

    let mut year = *components.first()?;
    if (0..=99).contains(&year) {
        year += 1900;
    }
    let total_months = year.checked_mul(12)?.checked_add(component(1, 0))?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(total_months.div_euclid(12)).ok()?,
        u32::try_from(total_months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    let offset = TimeDelta::try_days(component(2, 1).checked_sub(1)?)?
        .checked_add(&TimeDelta::try_hours(component(3, 0))?)?
        .checked_add(&TimeDelta::try_minutes(component(4, 0))?)?
        .checked_add(&TimeDelta::try_seconds(component(5, 0))?)?
        .checked_add(&TimeDelta::try_milliseconds(component(6, 0))?)?;

    first_of_month
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(offset)
        .map(|naive| naive.and_utc())
}

/// Parses the date formats commonly accepted by general-purpose date parsers:
/// RFC 3339 / ISO 8601, RFC 2822, and a handful of written forms such as
/// `March 11, 2020 03:24:00`.
pub(super) fn freeform(text: &str) -> DateValue {
    parse_freeform(text.trim()).into()
}

fn parse_freeform(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Some(instant.with_timezone(&Utc));
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn ymd_hms(value: DateValue) -> (i32, u32, u32, u32, u32, u32) {
        let t = value.instant().expect("expected a valid date");
        (t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second())
    }

    #[test]
    fn full_component_list() {
        let value = from_components(&[2020, 2, 11, 3, 24, 5, 250]);
        assert_eq!(ymd_hms(value), (2020, 3, 11, 3, 24, 5));
        assert_eq!(value.instant().unwrap().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn year_only_defaults_to_first_of_january() {
        assert_eq!(ymd_hms(from_components(&[2021])), (2021, 1, 1, 0, 0, 0));
    }

    #[test]
    fn month_overflow_rolls_into_next_year() {
        assert_eq!(ymd_hms(from_components(&[2020, 12, 1])), (2021, 1, 1, 0, 0, 0));
        assert_eq!(ymd_hms(from_components(&[2020, -1, 1])), (2019, 12, 1, 0, 0, 0));
    }

    #[test]
    fn day_zero_is_last_day_of_previous_month() {
        assert_eq!(ymd_hms(from_components(&[2020, 2, 0])), (2020, 2, 29, 0, 0, 0));
    }

    #[test]
    fn two_digit_years_are_twentieth_century() {
        assert_eq!(ymd_hms(from_components(&[99, 0, 1])), (1999, 1, 1, 0, 0, 0));
    }

    #[test]
    fn extra_components_are_ignored() {
        assert_eq!(
            from_components(&[2020, 0, 1, 0, 0, 0, 0, 42]),
            from_components(&[2020, 0, 1])
        );
    }

    #[test]
    fn absurd_components_are_invalid() {
        assert_eq!(from_components(&[i64::MAX, 0, 1]), DateValue::Invalid);
        assert_eq!(from_components(&[]), DateValue::Invalid);
    }

    #[test]
    fn iso_date_time_without_zone() {
        assert_eq!(ymd_hms(freeform("2020-03-11T03:24:00")), (2020, 3, 11, 3, 24, 0));
    }

    #[test]
    fn rfc3339_with_offset_is_normalized_to_utc() {
        let value = freeform("2020-03-11T03:24:00+02:00");
        assert_eq!(
            value.instant(),
            Some(Utc.with_ymd_and_hms(2020, 3, 11, 1, 24, 0).unwrap())
        );
    }

    #[test]
    fn written_month_names() {
        assert_eq!(ymd_hms(freeform("March 11, 2020 03:24:00")), (2020, 3, 11, 3, 24, 0));
        assert_eq!(ymd_hms(freeform("Mar 11, 2020")), (2020, 3, 11, 0, 0, 0));
    }

    #[test]
    fn date_only() {
        assert_eq!(ymd_hms(freeform(" 1995-12-17 ")), (1995, 12, 17, 0, 0, 0));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(freeform("not a date"), DateValue::Invalid);
        assert_eq!(freeform(""), DateValue::Invalid);
        assert_eq!(freeform("2020-13-45"), DateValue::Invalid);
    }
}
