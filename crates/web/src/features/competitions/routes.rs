use axum::{Router, routing::get};
use upstream::SkiDataClient;

use super::handlers::{competition_overview, get_competition, list_competitions};

pub fn routes() -> Router<SkiDataClient> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/overview", get(competition_overview))
        .route("/:id", get(get_competition))
}
