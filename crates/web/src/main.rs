use anyhow::Context;
use upstream::SkiDataClient;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cache;
mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::competition_overview,
        features::competitions::handlers::get_competition,
        features::races::handlers::upcoming_races,
    ),
    components(
        schemas(
            results::models::Competition,
            results::models::CompetitionDetail,
            results::models::CompetitionStatus,
            results::models::Race,
            results::models::Run,
            results::models::RaceResult,
            results::models::Broadcaster,
            results::dto::upcoming::RaceContext,
            results::dto::upcoming::RunWithContext,
        )
    ),
    tags(
        (name = "competitions", description = "Competition calendar and details, proxied from the results API"),
        (name = "races", description = "Derived race schedules"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting ski results proxy");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let client =
        SkiDataClient::new(&config.api_base_url).context("Failed to build upstream client")?;
    tracing::info!("Proxying results API at {}", client.base_url());

    let app = routes::router(client).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
