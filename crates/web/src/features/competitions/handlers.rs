use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use results::{models::Competition, services::overview};
use serde::Deserialize;
use upstream::SkiDataClient;
use utoipa::IntoParams;

use crate::{cache::CachePolicy, error::WebResult};

use super::services;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverviewQuery {
    /// Keep competitions that already ended
    #[serde(default)]
    pub include_past: bool,
}

#[utoipa::path(
    get,
    path = "/api/competitions",
    responses(
        (status = 200, description = "Competition calendar, passed through from the upstream API", body = Vec<Competition>),
        (status = 500, description = "Upstream unavailable")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(State(client): State<SkiDataClient>) -> WebResult<Response> {
    let payload = client.fetch_competitions_raw().await?;

    Ok(CachePolicy::competition_list().apply(Json(payload)))
}

#[utoipa::path(
    get,
    path = "/api/competitions/overview",
    params(OverviewQuery),
    responses(
        (status = 200, description = "Calendar with live competitions first, then by end date", body = Vec<Competition>),
        (status = 500, description = "Upstream unavailable")
    ),
    tag = "competitions"
)]
pub async fn competition_overview(
    State(client): State<SkiDataClient>,
    Query(query): Query<OverviewQuery>,
) -> WebResult<Response> {
    let competitions = client.fetch_competitions().await?;
    let now = chrono::Local::now().naive_local();

    let listed = overview::overview(competitions, now, query.include_past);

    Ok(CachePolicy::competition_list().apply(Json(listed)))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = String, Path, description = "Competition event id")
    ),
    responses(
        (status = 200, description = "Competition detail, passed through from the upstream API", body = results::models::CompetitionDetail),
        (status = 400, description = "Malformed competition id"),
        (status = 404, description = "Competition not found"),
        (status = 500, description = "Upstream unavailable")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(client): State<SkiDataClient>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::validate_event_id(&id)?;

    let payload = client.fetch_competition_raw(&id).await?;
    let policy = CachePolicy::competition_detail(services::is_live(&payload));

    tracing::debug!("Competition {} served with '{}'", id, policy);

    Ok(policy.apply(Json(payload)))
}
