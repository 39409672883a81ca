use axum::{extract::State, response::Json};
use serde::Serialize;
use crate::AppState;

/// Liveness plus the upstream settings this instance relays from
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    season: u16,
    site_url: String,
    core_url: String,
    roster_concurrency: usize,
}

// GET /health - Does not call ESPN
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp(),
        season: state.client.season(),
        site_url: state.client.site_url().to_string(),
        core_url: state.client.core_url().to_string(),
        roster_concurrency: state.roster_concurrency,
    })
}
