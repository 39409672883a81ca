use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use crate::models::StatLine;
use crate::stats;
use crate::AppState;

// Query parameters for player stats
#[derive(Deserialize)]
pub struct PlayerStatsQuery {
    /// Position abbreviation, e.g. "QB"
    position: String,
}

// GET /players/{id}/stats?position=QB - Position-specific season stats, or null
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Query(params): Query<PlayerStatsQuery>,
) -> Json<Option<StatLine>> {
    let stats = stats::fetch_position_stats(&state.client, &player_id, &params.position).await;

    Json(stats)
}
