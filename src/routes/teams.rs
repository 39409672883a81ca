use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::error::ApiError;
use crate::models::{self, RosterResponse, TeamResponse, TeamsResponse};
use crate::roster::RosterAggregator;
use crate::AppState;

// GET /teams - List all NFL teams
pub async fn get_teams(
    State(state): State<AppState>,
) -> Result<Json<TeamsResponse>, ApiError> {
    let listing = state.client.teams().await?;

    let teams = models::teams_from_listing(&listing);
    let total = teams.len();

    Ok(Json(TeamsResponse { teams, total }))
}

// GET /teams/{id} - Get team header and record breakdown
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let detail = state.client.team(&team_id).await?;

    let team = models::team_from_detail(&detail)
        .ok_or_else(|| ApiError::NotFound("Team or record data not found".to_string()))?;

    Ok(Json(team))
}

// GET /teams/{id}/players - Get the full roster, ordered by position group and jersey
pub async fn get_team_roster(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<RosterResponse>, ApiError> {
    let roster = RosterAggregator::new(&state.client)
        .with_concurrency(state.roster_concurrency)
        .fetch_roster(&team_id)
        .await?;

    Ok(Json(roster))
}
