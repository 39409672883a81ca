//! Team roster assembly.
//!
//! The athlete listing is paginated and only carries `$ref` links. Every page is
//! walked and each link resolved before the roster is ordered by position group
//! and jersey number.

use futures::{StreamExt, TryStreamExt, stream};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::espn::EspnClient;
use crate::models::{PlayerRecord, RosterResponse};

/// Rank given to positions missing from [`POSITION_RANKS`], and to missing jerseys.
pub const SENTINEL_RANK: u32 = 999;

/// Sort priority per position. Full names and abbreviations are separate keys
/// and matching is exact, so "quarterback" does not match.
pub static POSITION_RANKS: &[(&str, u32)] = &[
    // Offense
    ("Quarterback", 1),
    ("QB", 1),
    ("Running Back", 2),
    ("RB", 2),
    ("Wide Receiver", 3),
    ("WR", 3),
    ("Tight End", 4),
    ("TE", 4),
    ("Center", 5),
    ("C", 5),
    ("Guard", 6),
    ("G", 6),
    ("Offensive Tackle", 7),
    ("OT", 7),
    ("Long Snapper", 8),
    ("LS", 8),
    // Defense
    ("Defensive End", 9),
    ("DE", 9),
    ("Defensive Tackle", 10),
    ("DT", 10),
    ("Linebacker", 11),
    ("LB", 11),
    ("Cornerback", 12),
    ("CB", 12),
    ("Safety", 13),
    ("S", 13),
    // Special teams
    ("Place Kicker", 14),
    ("K", 14),
    ("Punter", 15),
    ("P", 15),
];

pub fn position_rank(position: Option<&str>) -> u32 {
    position
        .and_then(|name| POSITION_RANKS.iter().find(|(key, _)| *key == name))
        .map(|(_, rank)| *rank)
        .unwrap_or(SENTINEL_RANK)
}

/// Stable sort by position rank, then jersey number; missing jerseys go last.
pub fn sort_players(players: &mut [PlayerRecord]) {
    players.sort_by_key(|player| {
        (
            position_rank(player.position_display_name.as_deref()),
            player.jersey_number.unwrap_or(SENTINEL_RANK),
        )
    });
}

/// Position display names in first-seen order, without duplicates.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DistinctPositions(Vec<String>);

impl DistinctPositions {
    pub fn observe(&mut self, position: Option<&str>) {
        if let Some(position) = position {
            if !self.0.iter().any(|seen| seen == position) {
                self.0.push(position.to_string());
            }
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

pub struct RosterAggregator<'a> {
    client: &'a EspnClient,
    concurrency: usize,
}

impl<'a> RosterAggregator<'a> {
    /// Resolves athlete details one at a time.
    pub fn new(client: &'a EspnClient) -> Self {
        Self {
            client,
            concurrency: 1,
        }
    }

    /// Keep up to `limit` detail lookups in flight per listing page. Results are
    /// still consumed in listing order.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    /// Walk every listing page for `team_id`, resolve each athlete and return the
    /// ordered roster. A listing page without `items` (an error page included)
    /// ends pagination; any other upstream failure aborts the whole roster.
    pub async fn fetch_roster(&self, team_id: &str) -> Result<RosterResponse, ApiError> {
        let mut players = Vec::new();
        let mut positions = DistinctPositions::default();
        let mut page = 1u32;

        loop {
            let listing = self.client.athletes_page(team_id, page).await?;

            let Some(items) = listing.get("items").and_then(Value::as_array) else {
                break;
            };

            let references = athlete_references(items);
            for detail in self.resolve_all(references).await? {
                let player = PlayerRecord::from_detail(&detail);
                positions.observe(player.position_display_name.as_deref());
                players.push(player);
            }

            page += 1;

            match listing.get("pageCount").and_then(Value::as_u64) {
                Some(page_count) if u64::from(page) <= page_count => continue,
                _ => break,
            }
        }

        sort_players(&mut players);
        info!(team_id, positions = ?positions.as_slice(), "roster assembled");

        Ok(RosterResponse {
            total: players.len(),
            players,
            positions: positions.into_vec(),
        })
    }

    async fn resolve_all(&self, references: Vec<String>) -> Result<Vec<Value>, ApiError> {
        if self.concurrency <= 1 {
            let mut details = Vec::with_capacity(references.len());
            for reference in references {
                details.push(self.client.resolve_ref(reference).await?);
            }
            return Ok(details);
        }

        let client = self.client.clone();
        stream::iter(references)
            .map(move |reference| {
                let client = client.clone();
                async move { client.resolve_ref(reference).await }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}

fn athlete_references(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| {
            let reference = item.get("$ref").and_then(Value::as_str);
            if reference.is_none() {
                warn!("listing item without $ref skipped");
            }
            reference.map(str::to_string)
        })
        .collect()
}
