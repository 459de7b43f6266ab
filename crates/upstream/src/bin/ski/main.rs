use anyhow::Context;
use clap::{Parser, Subcommand};
use results::{ViewState, services};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upstream::{DEFAULT_BASE_URL, SkiDataClient};

mod render;

#[derive(Parser)]
#[command(name = "ski")]
#[command(about = "Ski race calendar and results from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Competition calendar, live events first
    Competitions {
        #[arg(long)]
        past: bool,
    },
    /// Runs starting within the coming week
    Upcoming,
    /// Races, runs and podiums of one competition
    Competition { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "ski={},upstream={},results={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = SkiDataClient::new(&cli.base_url).context("Failed to build HTTP client")?;
    tracing::debug!("Using API at {}", client.base_url());

    let now = chrono::Local::now().naive_local();

    let output = match cli.command {
        Commands::Competitions { past } => {
            let outcome = client
                .fetch_competitions()
                .await
                .map(|competitions| services::overview::overview(competitions, now, past));
            let state = ViewState::Loading.settle(outcome.map_err(|e| {
                tracing::error!("{}", e);
                "Failed to fetch competitions"
            }));
            render::view(&state, |competitions| {
                render::competitions(competitions, past)
            })
        }
        Commands::Upcoming => {
            let outcome = services::upcoming::upcoming_runs(&client, now).await;
            let state = ViewState::Loading.settle(outcome.map_err(|e| {
                tracing::error!("{}", e);
                "Failed to fetch competition data"
            }));
            render::view(&state, |runs| render::upcoming_runs(runs))
        }
        Commands::Competition { id } => {
            let outcome = match client.fetch_competition(&id).await {
                Ok(detail) => Ok(Some(detail)),
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => {
                    tracing::error!("{}", e);
                    Err("Failed to fetch competition details")
                }
            };
            let state = ViewState::Loading.settle(outcome);
            render::view(&state, |detail| match detail {
                Some(detail) => render::competition_detail(detail),
                None => "Competition not found\n".to_string(),
            })
        }
    };

    match output {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(message) => anyhow::bail!(message),
    }
}
