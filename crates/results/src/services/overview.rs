use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{dates::parse_end_date, models::Competition};

/// Calendar listing: live competitions first, then by last day.
///
/// A competition counts as past once its last day's midnight is behind `now`.
/// Competitions with an unreadable date are never treated as past and sort last.
pub fn overview(
    competitions: Vec<Competition>,
    now: NaiveDateTime,
    include_past: bool,
) -> Vec<Competition> {
    let today = now.date();

    let mut dated: Vec<(Option<NaiveDate>, Competition)> = competitions
        .into_iter()
        .map(|competition| (parse_end_date(&competition.date, today), competition))
        .filter(|(end, _)| include_past || !is_past(*end, now))
        .collect();

    dated.sort_by(|(a_end, a), (b_end, b)| {
        b.is_live
            .cmp(&a.is_live)
            .then_with(|| compare_end_dates(*a_end, *b_end))
    });

    dated.into_iter().map(|(_, competition)| competition).collect()
}

fn is_past(end: Option<NaiveDate>, now: NaiveDateTime) -> bool {
    end.and_then(|end| end.and_hms_opt(0, 0, 0))
        .is_some_and(|midnight| midnight < now)
}

fn compare_end_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
