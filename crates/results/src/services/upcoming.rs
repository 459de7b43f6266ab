use chrono::{Days, NaiveDateTime};
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::{
    CompetitionSource, Result,
    dates::{combine_date_time, parse_end_date, race_day},
    dto::upcoming::{RaceContext, RunWithContext},
    models::{Competition, CompetitionDetail},
};

/// Length of the look-ahead window, counted from today's midnight.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Competitions whose last day falls in `[today, today + 7 days)`.
pub fn competitions_in_window(
    competitions: &[Competition],
    now: NaiveDateTime,
) -> Vec<&Competition> {
    let today = now.date();
    let Some(window_end) = today.checked_add_days(Days::new(UPCOMING_WINDOW_DAYS)) else {
        return Vec::new();
    };

    competitions
        .iter()
        .filter(|competition| {
            parse_end_date(&competition.date, today)
                .is_some_and(|end| end >= today && end < window_end)
        })
        .collect()
}

/// Flattens every run of every race, keeps the ones starting after `now` and
/// orders them by start. Runs sharing a start keep their input order.
pub fn flatten_runs(details: &[CompetitionDetail], now: NaiveDateTime) -> Vec<RunWithContext> {
    let today = now.date();

    let mut runs: Vec<RunWithContext> = details
        .iter()
        .flat_map(|detail| {
            let comp_id = &detail.competition.event_id;

            detail.races.iter().flat_map(move |race| {
                let context = RaceContext {
                    race: race.clone(),
                    comp_id: comp_id.clone(),
                };
                let is_today = race_day(&race.date) == Some(today);

                race.runs.iter().map(move |run| RunWithContext {
                    run: run.clone(),
                    race: context.clone(),
                    date: combine_date_time(&race.date, &run.time),
                    id: format!("{}{}", race.codex, run.number),
                    is_today,
                })
            })
        })
        .filter(|run| run.is_after(now))
        .collect();

    runs.sort_by_key(|run| run.date);
    runs
}

/// Builds the upcoming-runs list: one calendar fetch, then every relevant
/// competition detail concurrently. A single failed detail fails the whole call.
pub async fn upcoming_runs<S>(source: &S, now: NaiveDateTime) -> Result<Vec<RunWithContext>>
where
    S: CompetitionSource + ?Sized,
{
    let competitions = source.list_competitions().await?;
    let relevant = competitions_in_window(&competitions, now);

    info!(
        "{} of {} competitions end within the next {} days",
        relevant.len(),
        competitions.len(),
        UPCOMING_WINDOW_DAYS
    );

    let details = try_join_all(
        relevant
            .iter()
            .map(|competition| source.competition_detail(&competition.event_id)),
    )
    .await?;

    let runs = flatten_runs(&details, now);
    debug!("{} upcoming runs after {}", runs.len(), now);

    Ok(runs)
}
