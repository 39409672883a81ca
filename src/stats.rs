//! Season statistics for a single athlete, filtered per position.

use serde_json::Value;
use tracing::warn;

use crate::espn::EspnClient;
use crate::models::StatLine;

const GENERAL_STATS: &[&str] = &["gamesPlayed"];

const PASSING_STATS: &[&str] = &[
    "completionPct",
    "completions",
    "interceptionPct",
    "interceptions",
    "netPassingYardsPerGame",
];

/// Positions with a stat allow-list. Anything else gets no stats at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatPosition {
    Quarterback,
}

impl StatPosition {
    pub fn parse(position: &str) -> Option<Self> {
        match position {
            "QB" => Some(Self::Quarterback),
            _ => None,
        }
    }

    /// Allow-list for a category of the statistics document.
    fn allowed(self, category: &str) -> &'static [&'static str] {
        match (self, category) {
            (Self::Quarterback, "passing") => PASSING_STATS,
            (Self::Quarterback, "general") => GENERAL_STATS,
            _ => &[],
        }
    }
}

/// Fetch and filter a player's season stats. Returns `None` for positions
/// without an allow-list (no request is made) and for any upstream failure.
pub async fn fetch_position_stats(
    client: &EspnClient,
    player_id: &str,
    position: &str,
) -> Option<StatLine> {
    let position = StatPosition::parse(position)?;

    match client.athlete_statistics(player_id).await {
        Ok(document) => extract_stats(position, &document),
        Err(err) => {
            warn!(player_id, error = %err, "failed to fetch athlete statistics");
            None
        }
    }
}

/// Copy allow-listed stats out of `splits.categories`. `None` when the
/// document has no category list.
pub fn extract_stats(position: StatPosition, document: &Value) -> Option<StatLine> {
    let categories = document.pointer("/splits/categories")?.as_array()?;

    let mut line = StatLine::new();
    for category in categories {
        let Some(name) = category.get("name").and_then(Value::as_str) else {
            continue;
        };
        let allowed = position.allowed(name);
        if allowed.is_empty() {
            continue;
        }

        let stats = category.get("stats").and_then(Value::as_array);
        for stat in stats.into_iter().flatten() {
            let (Some(stat_name), Some(value)) = (
                stat.get("name").and_then(Value::as_str),
                stat.get("value").and_then(Value::as_f64),
            ) else {
                continue;
            };

            if allowed.iter().any(|allowed_name| *allowed_name == stat_name) {
                line.insert(stat_name.to_string(), value);
            }
        }
    }

    Some(line)
}
