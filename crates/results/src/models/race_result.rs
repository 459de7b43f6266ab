use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const COMPETITOR_PICTURE_URL: &str = "https://data.fis-ski.com/general/load-competitor-picture";

/// A classified athlete. Lists keep the upstream ranking order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub athlete_id: String,
    pub rank: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nation: String,
    pub run1: Option<String>,
    pub run2: Option<String>,
    pub total: Option<String>,
    pub diff: Option<String>,
    pub fis_points: Option<f64>,
    pub cup_points: Option<f64>,
}

impl RaceResult {
    pub fn picture_url(&self) -> String {
        format!("{}/{}.html", COMPETITOR_PICTURE_URL, self.athlete_id)
    }
}
