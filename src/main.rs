use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nfl_roster_api::config::Config;
use nfl_roster_api::{build_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    let config = Config::from_env().expect("Invalid configuration");

    let state = AppState::from_config(&config).expect("Failed to build HTTP client");

    tracing::info!(
        season = config.season,
        roster_concurrency = config.roster_concurrency,
        timeout_secs = config.http_timeout.as_secs(),
        "ESPN client ready."
    );

    let addr = config.socket_addr();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
