use std::fmt::Write;

use results::{
    ViewState,
    dto::upcoming::RunWithContext,
    models::{Competition, CompetitionDetail, Race},
};

/// Renders a settled view; errors are handed back so the caller can exit non-zero.
pub fn view<T>(state: &ViewState<T>, ready: impl FnOnce(&T) -> String) -> Result<String, String> {
    match state {
        ViewState::Loading => Ok("Loading...\n".to_string()),
        ViewState::Error(message) => Err(message.clone()),
        ViewState::Ready(data) => Ok(ready(data)),
    }
}

pub fn competitions(competitions: &[Competition], include_past: bool) -> String {
    if competitions.is_empty() {
        return if include_past {
            "No events found\n".to_string()
        } else {
            "No upcoming events found\n".to_string()
        };
    }

    let rows = competitions
        .iter()
        .map(|competition| {
            vec![
                competition.status().to_string(),
                competition.date.clone(),
                competition.location.clone(),
                competition.country.clone(),
                competition.disciplines_label(),
                competition.category.clone(),
                competition.gender.clone(),
            ]
        })
        .collect();

    table(
        &[
            "Status",
            "Date",
            "Location",
            "Country",
            "Discipline",
            "Category",
            "Gender",
        ],
        rows,
    )
}

pub fn upcoming_runs(runs: &[RunWithContext]) -> String {
    if runs.is_empty() {
        return "No upcoming runs found\n".to_string();
    }

    let rows = runs
        .iter()
        .map(|run| {
            let marker = if run.is_today { "*" } else { "" };
            let date = run
                .date
                .map(|date| date.format("%a %d %b %H:%M").to_string())
                .unwrap_or_default();

            vec![
                marker.to_string(),
                date,
                run.race.race.discipline.clone(),
                run.race.race.gender.clone(),
                run.race.comp_id.clone(),
            ]
        })
        .collect();

    table(&["", "Date", "Discipline", "Gender", "Competition"], rows)
}

pub fn competition_detail(detail: &CompetitionDetail) -> String {
    let competition = &detail.competition;
    let mut out = String::new();

    let _ = writeln!(out, "{}, {}", competition.location, competition.country);
    let _ = writeln!(out, "Date:        {}", competition.date);
    let _ = writeln!(out, "Category:    {}", competition.category);
    let _ = writeln!(out, "Disciplines: {}", competition.disciplines_label());
    let status = if competition.cancelled {
        "Cancelled"
    } else {
        "Active"
    };
    let _ = writeln!(out, "Status:      {}", status);

    for race in detail.competition_races() {
        out.push('\n');
        out.push_str(&race_summary(race));
    }

    if !detail.broadcasters.is_empty() {
        let names: Vec<&str> = detail.broadcasters.iter().map(|b| b.name.as_str()).collect();
        let _ = writeln!(out, "\nBroadcasters: {}", names.join(", "));
    }

    out
}

fn race_summary(race: &Race) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} - {}", race.discipline, race.gender);
    let _ = writeln!(out, "  Date: {}", race.date.split('T').next().unwrap_or_default());
    for run in &race.runs {
        let _ = writeln!(out, "  Run {}: {} - {}", run.number, run.time, run.status);
    }
    if let Some(url) = race.live_timing() {
        let _ = writeln!(out, "  Live timing: {}", url);
    }

    if !race.has_results() {
        return out;
    }

    out.push_str("  Podium\n");
    for (place, result) in race.podium().iter().enumerate() {
        let _ = writeln!(
            out,
            "    {}. {} ({}) {}",
            place + 1,
            result.name,
            result.nation,
            result.diff.as_deref().unwrap_or_default()
        );
    }

    let mut headers = vec!["Rank", "Athlete", "Nation"];
    if race.has_run_splits() {
        headers.extend(["Run 1", "Run 2", "Total"]);
    } else {
        headers.push("Time");
    }
    headers.extend(["Diff", "FIS Points", "Cup Points"]);

    let rows = race
        .results
        .iter()
        .flatten()
        .map(|result| {
            let mut row = vec![
                result.rank.map(|rank| rank.to_string()).unwrap_or_default(),
                result.name.clone(),
                result.nation.clone(),
            ];
            if race.has_run_splits() {
                row.push(result.run1.clone().unwrap_or_default());
                row.push(result.run2.clone().unwrap_or_default());
            }
            row.push(result.total.clone().unwrap_or_default());
            row.push(result.diff.clone().unwrap_or_default());
            row.push(points(result.fis_points));
            row.push(points(result.cup_points));
            row
        })
        .collect();

    out.push_str(&table(&headers, rows));
    out
}

fn points(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Left-aligned columns sized to their widest cell.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
