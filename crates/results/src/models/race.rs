use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RaceResult;

/// Disciplines raced over two runs, shown with per-run columns.
const TECHNICAL_DISCIPLINES: &[&str] = &["SL", "GS"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Race {
    pub race_id: String,
    pub codex: String,
    /// ISO date, optionally followed by `T` and a time portion.
    pub date: String,
    #[serde(default)]
    pub discipline: String,
    #[serde(default)]
    pub is_training: bool,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub has_live_timing: bool,
    pub live_timing_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RaceResult>>,
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Run {
    pub number: u32,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub info: String,
}

impl Race {
    /// Top three of the classification, in upstream order.
    pub fn podium(&self) -> &[RaceResult] {
        match &self.results {
            Some(results) => &results[..results.len().min(3)],
            None => &[],
        }
    }

    pub fn has_results(&self) -> bool {
        self.results.as_ref().is_some_and(|r| !r.is_empty())
    }

    pub fn has_run_splits(&self) -> bool {
        TECHNICAL_DISCIPLINES.contains(&self.discipline.as_str())
    }

    pub fn live_timing(&self) -> Option<&str> {
        if self.has_live_timing {
            self.live_timing_url.as_deref().filter(|url| !url.is_empty())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(athlete_id: &str, rank: u32) -> RaceResult {
        RaceResult {
            athlete_id: athlete_id.to_string(),
            rank: Some(rank),
            name: format!("Athlete {}", athlete_id),
            nation: "SUI".to_string(),
            run1: None,
            run2: None,
            total: None,
            diff: None,
            fis_points: None,
            cup_points: None,
        }
    }

    fn sample_race(discipline: &str, results: Option<Vec<RaceResult>>) -> Race {
        Race {
            race_id: "r1".to_string(),
            codex: "0042".to_string(),
            date: "2024-12-10".to_string(),
            discipline: discipline.to_string(),
            is_training: false,
            gender: "W".to_string(),
            has_live_timing: false,
            live_timing_url: None,
            results,
            runs: Vec::new(),
        }
    }

    #[test]
    fn test_podium_keeps_upstream_order() {
        // upstream order is authoritative even when ranks look shuffled
        let results = vec![result("a", 1), result("b", 3), result("c", 2), result("d", 4)];
        let race = sample_race("SL", Some(results));

        let podium: Vec<&str> = race.podium().iter().map(|r| r.athlete_id.as_str()).collect();
        assert_eq!(podium, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_podium_short_classification() {
        let race = sample_race("DH", Some(vec![result("a", 1)]));
        assert_eq!(race.podium().len(), 1);

        let race_without = sample_race("DH", None);
        assert!(race_without.podium().is_empty());
        assert!(!race_without.has_results());
    }

    #[test]
    fn test_run_splits_for_technical_disciplines() {
        assert!(sample_race("SL", None).has_run_splits());
        assert!(sample_race("GS", None).has_run_splits());
        assert!(!sample_race("SG", None).has_run_splits());
        assert!(!sample_race("DH", None).has_run_splits());
    }

    #[test]
    fn test_live_timing_requires_flag_and_url() {
        let mut race = sample_race("GS", None);
        race.live_timing_url = Some("https://live.example".to_string());
        assert_eq!(race.live_timing(), None);

        race.has_live_timing = true;
        assert_eq!(race.live_timing(), Some("https://live.example"));

        race.live_timing_url = Some(String::new());
        assert_eq!(race.live_timing(), None);
    }

    #[test]
    fn test_picture_url() {
        assert_eq!(
            result("123456", 1).picture_url(),
            "https://data.fis-ski.com/general/load-competitor-picture/123456.html"
        );
    }
}
