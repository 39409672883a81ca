use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stat name to value, as returned by the player stats endpoint.
pub type StatLine = BTreeMap<String, f64>;

/// Team entry for the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub location: Option<String>,
}

/// Response wrapper for GET /teams
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamSummary>,
    pub total: usize,
}

/// Team header for the single-team endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}

/// One record split (overall, home, road, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecordItem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub stats: Value,
}

/// Response wrapper for GET /teams/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: TeamInfo,
    pub record: Vec<TeamRecordItem>,
}

/// A resolved roster entry. Wire names match what the frontend already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "jersey")]
    pub jersey_number: Option<u32>,
    #[serde(rename = "position")]
    pub position_display_name: Option<String>,
    pub position_abbreviation: Option<String>,
    #[serde(rename = "headshot")]
    pub headshot_url: Option<String>,
}

/// Response wrapper for GET /teams/{id}/players
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterResponse {
    pub total: usize,
    pub players: Vec<PlayerRecord>,
    pub positions: Vec<String>,
}

impl TeamSummary {
    pub fn from_espn(team: &Value) -> Self {
        Self {
            id: string_at(team, "/id"),
            display_name: string_at(team, "/displayName"),
            logo: string_at(team, "/logos/0/href"),
            abbreviation: string_at(team, "/abbreviation"),
            location: string_at(team, "/location"),
        }
    }
}

impl TeamInfo {
    pub fn from_espn(team: &Value) -> Self {
        Self {
            id: string_at(team, "/id"),
            display_name: string_at(team, "/displayName"),
            abbreviation: string_at(team, "/abbreviation"),
            location: string_at(team, "/location"),
            logo: string_at(team, "/logos/0/href"),
        }
    }
}

impl TeamRecordItem {
    pub fn from_espn(item: &Value) -> Self {
        Self {
            kind: string_at(item, "/type"),
            description: string_at(item, "/description"),
            summary: string_at(item, "/summary"),
            stats: item
                .get("stats")
                .filter(|stats| !stats.is_null())
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }
}

impl PlayerRecord {
    /// Build a record from an athlete detail document. Absent or oddly typed
    /// fields become `None`; nothing here fails.
    pub fn from_detail(detail: &Value) -> Self {
        Self {
            id: string_at(detail, "/id"),
            name: string_at(detail, "/displayName"),
            jersey_number: detail.pointer("/jersey").and_then(jersey_number),
            position_display_name: string_at(detail, "/position/displayName"),
            position_abbreviation: string_at(detail, "/position/abbreviation"),
            headshot_url: string_at(detail, "/headshot/href"),
        }
    }
}

/// Teams under `sports[0].leagues[0].teams[*].team`; an absent path yields no teams.
pub fn teams_from_listing(listing: &Value) -> Vec<TeamSummary> {
    listing
        .pointer("/sports/0/leagues/0/teams")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("team"))
                .map(TeamSummary::from_espn)
                .collect()
        })
        .unwrap_or_default()
}

/// Reshape a team detail document. `None` when the team or its record is missing.
pub fn team_from_detail(detail: &Value) -> Option<TeamResponse> {
    let team = detail.get("team").filter(|v| is_present(v))?;
    let record = team.get("record").filter(|v| is_present(v))?;

    let record = record
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(TeamRecordItem::from_espn).collect())
        .unwrap_or_default();

    Some(TeamResponse {
        team: TeamInfo::from_espn(team),
        record,
    })
}

/// String at a JSON pointer. Numbers are rendered in decimal so numeric ids survive.
pub(crate) fn string_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ESPN sends jerseys as strings ("7"); accept plain numbers too.
fn jersey_number(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}
