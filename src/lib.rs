use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod espn;
pub mod models;
pub mod roster;
pub mod routes;
pub mod stats;

use config::Config;
use espn::EspnClient;

/// Shared handler state. Each request builds its own accumulators; only the
/// HTTP connection pool inside `client` is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: EspnClient,
    pub roster_concurrency: usize,
}

impl AppState {
    pub fn new(client: EspnClient, roster_concurrency: usize) -> Self {
        Self {
            client,
            roster_concurrency,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(EspnClient::new(config)?, config.roster_concurrency))
    }
}

pub fn build_router(state: AppState) -> Router {
    // CORS configuration for the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "NFL Roster API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/teams", get(routes::teams::get_teams))
        .route("/teams/{id}", get(routes::teams::get_team_by_id))
        .route("/teams/{id}/players", get(routes::teams::get_team_roster))

        // Player endpoints
        .route("/players/{id}/stats", get(routes::players::get_player_stats))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
