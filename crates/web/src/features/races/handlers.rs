use axum::{Json, extract::State, response::Response};
use results::{dto::upcoming::RunWithContext, services::upcoming};
use upstream::SkiDataClient;

use crate::{cache::no_store, error::WebResult};

#[utoipa::path(
    get,
    path = "/api/races/upcoming",
    responses(
        (status = 200, description = "Runs starting within the coming week, earliest first", body = Vec<RunWithContext>),
        (status = 500, description = "Calendar or one of the competition details could not be fetched")
    ),
    tag = "races"
)]
pub async fn upcoming_races(State(client): State<SkiDataClient>) -> WebResult<Response> {
    let now = chrono::Local::now().naive_local();
    let runs = upcoming::upcoming_runs(&client, now).await?;

    Ok(no_store(Json(runs)))
}
