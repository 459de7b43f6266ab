//! Parsing of the loosely formatted dates the results feed emits.
//!
//! Competition dates arrive as display strings (`"12-15 Dec"`, `"28 Nov-2 Dec 2024"`),
//! races as ISO dates and runs as a bare time of day. Everything here returns `None`
//! on malformed input; callers treat that as "not scheduled" instead of failing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Abbreviations the feed uses during the winter season.
const MONTH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
];

const DATE_FORMATS: &[&str] = &["%d %B %Y", "%B %d %Y", "%B %d, %Y"];

const RACE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the last day of a competition date range.
///
/// Only the segment after the last `-` is considered. When it carries no year, the
/// year placing the date closest to `reference` is used, so a `"3 Jan"` seen in
/// December lands in the following season.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use results::dates::parse_end_date;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// assert_eq!(
///     parse_end_date("12-15 Dec", reference),
///     NaiveDate::from_ymd_opt(2024, 12, 15)
/// );
/// ```
pub fn parse_end_date(raw: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let last_segment = raw.rsplit('-').next()?.trim();
    let normalized = expand_month_names(last_segment);

    if normalized.is_empty() {
        return None;
    }

    parse_full_date(&normalized).or_else(|| closest_year(&normalized, reference))
}

/// Date portion of a race date (`2024-12-10` or `2024-12-10T09:30:00`).
pub fn race_day(race_date: &str) -> Option<NaiveDate> {
    let day = race_date.split('T').next()?.trim();
    NaiveDate::parse_from_str(day, RACE_DATE_FORMAT).ok()
}

/// Joins a race date with a run's time of day.
pub fn combine_date_time(race_date: &str, time: &str) -> Option<NaiveDateTime> {
    let day = race_day(race_date)?;
    let time = parse_time_of_day(time.trim())?;

    Some(day.and_time(time))
}

fn parse_time_of_day(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Whole-word substitution, so names already spelled out are left alone.
fn expand_month_names(segment: &str) -> String {
    segment
        .split_whitespace()
        .map(|token| {
            MONTH_ABBREVIATIONS
                .iter()
                .find(|(abbreviation, _)| *abbreviation == token)
                .map_or(token, |(_, full)| *full)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_full_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

fn closest_year(value: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let year = reference.year();

    [year - 1, year, year + 1]
        .into_iter()
        .filter_map(|candidate| parse_full_date(&format!("{} {}", value, candidate)))
        .min_by_key(|date| (*date - reference).num_days().abs())
}
