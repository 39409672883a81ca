use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::ApiError;

const SITE_NFL_PATH: &str = "apis/site/v2/sports/football/nfl";
const CORE_NFL_PATH: &str = "v2/sports/football/leagues/nfl";
const LOCALE: [(&str, &str); 2] = [("lang", "en"), ("region", "us")];

/// Read-only client for ESPN's public site and core APIs.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    site_url: String,
    core_url: String,
    season: u16,
}

impl EspnClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self::with_client(
            http,
            &config.site_url,
            &config.core_url,
            config.season,
        ))
    }

    pub fn with_client(http: Client, site_url: &str, core_url: &str, season: u16) -> Self {
        Self {
            http,
            site_url: site_url.trim_end_matches('/').to_string(),
            core_url: core_url.trim_end_matches('/').to_string(),
            season,
        }
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn core_url(&self) -> &str {
        &self.core_url
    }

    // GET /apis/site/v2/sports/football/nfl/teams
    #[instrument(skip(self))]
    pub async fn teams(&self) -> Result<Value, ApiError> {
        let url = format!("{}/{SITE_NFL_PATH}/teams", self.site_url);
        self.fetch(self.http.get(&url)).await
    }

    // GET /apis/site/v2/sports/football/nfl/teams/{id}
    #[instrument(skip(self))]
    pub async fn team(&self, team_id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{SITE_NFL_PATH}/teams/{team_id}", self.site_url);
        self.fetch(self.http.get(&url)).await
    }

    /// One page of the season's athlete listing for a team. Pages start at 1.
    ///
    /// The status is not checked: an error page decodes to a document without
    /// `items`, which ends pagination. A body that is not JSON is still an error.
    #[instrument(skip(self))]
    pub async fn athletes_page(&self, team_id: &str, page: u32) -> Result<Value, ApiError> {
        let url = format!(
            "{}/{CORE_NFL_PATH}/seasons/{}/teams/{team_id}/athletes",
            self.core_url, self.season
        );
        let request = self
            .http
            .get(&url)
            .query(&LOCALE)
            .query(&[("page", page)]);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %response.url(), %status, "athlete listing returned an error status");
        }

        Ok(response.json::<Value>().await?)
    }

    /// Follow a `$ref` link taken from a listing item.
    #[instrument(skip(self))]
    pub async fn resolve_ref(&self, reference: String) -> Result<Value, ApiError> {
        self.fetch(self.http.get(reference)).await
    }

    #[instrument(skip(self))]
    pub async fn athlete_statistics(&self, player_id: &str) -> Result<Value, ApiError> {
        let url = format!(
            "{}/{CORE_NFL_PATH}/athletes/{player_id}/statistics/0",
            self.core_url
        );
        self.fetch(self.http.get(&url).query(&LOCALE)).await
    }

    async fn fetch(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "upstream response");

        if !status.is_success() {
            return Err(ApiError::UpstreamUnavailable {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
