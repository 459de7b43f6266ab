use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Broadcaster, Race};

/// One entry of the upstream competition calendar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Competition {
    pub event_id: String,
    /// Human formatted range such as `"12-15 Dec"`, see [`crate::dates::parse_end_date`].
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub discipline: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub is_live: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CompetitionStatus {
    Live,
    Cancelled,
    Scheduled,
}

impl CompetitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Cancelled => "Cancelled",
            Self::Scheduled => "Scheduled",
        }
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Competition {
    /// Live wins over cancelled, anything else is scheduled.
    pub fn status(&self) -> CompetitionStatus {
        if self.is_live {
            CompetitionStatus::Live
        } else if self.cancelled {
            CompetitionStatus::Cancelled
        } else {
            CompetitionStatus::Scheduled
        }
    }

    pub fn disciplines_label(&self) -> String {
        self.discipline.join(", ")
    }
}

/// Full document returned by the per-competition endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDetail {
    pub competition: Competition,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub broadcasters: Vec<Broadcaster>,
    #[serde(default)]
    pub documents: HashMap<String, String>,
}

impl CompetitionDetail {
    /// Races that count for results, training runs excluded.
    pub fn competition_races(&self) -> impl Iterator<Item = &Race> {
        self.races.iter().filter(|race| !race.is_training)
    }
}
