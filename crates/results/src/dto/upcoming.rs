use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Race, Run};

/// A race together with the competition it belongs to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RaceContext {
    #[serde(flatten)]
    pub race: Race,
    pub comp_id: String,
}

/// A run flattened out of its race, as listed on the upcoming-races view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunWithContext {
    #[serde(flatten)]
    pub run: Run,
    pub race: RaceContext,
    /// Race day joined with the run's time; `None` when either is malformed.
    pub date: Option<NaiveDateTime>,
    /// Race codex followed by the run number.
    pub id: String,
    pub is_today: bool,
}

impl RunWithContext {
    pub fn is_after(&self, now: NaiveDateTime) -> bool {
        self.date.is_some_and(|date| date > now)
    }
}
