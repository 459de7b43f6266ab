use axum::{Router, routing::get};
use upstream::SkiDataClient;

use super::handlers::upcoming_races;

pub fn routes() -> Router<SkiDataClient> {
    Router::new().route("/upcoming", get(upcoming_races))
}
