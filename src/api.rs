// HTTP client for the Fleaflicker API.
//
// This is deliberately a thin fetcher: it dispatches one GET per call,
// surfaces transport and status failures as `ApiError`, and hands parsed
// JSON to the model layer. No retries, no caching, no auth.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Production API base. Tests point the client at a local stub instead.
pub const API_BASE: &str = "https://www.fleaflicker.com/api";

/// Per-request timeout. The upstream API can be slow on cold scoreboards.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {endpoint} response body: {source}")]
    Decode {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

/// Lightweight wrapper around the Fleaflicker endpoints used by the
/// dashboard: roster, free-agent listing, scoreboard, standings.
#[derive(Debug, Clone)]
pub struct FleaflickerClient {
    http: reqwest::Client,
    base_url: String,
    league_id: String,
    team_id: Option<String>,
    sport: String,
}

impl FleaflickerClient {
    pub fn new(
        league_id: impl Into<String>,
        team_id: Option<String>,
        sport: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(FleaflickerClient {
            http,
            base_url: API_BASE.to_string(),
            league_id: league_id.into(),
            team_id,
            sport: sport.into(),
        })
    }

    /// Point the client at a different base URL (local stub servers in
    /// tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn league_id(&self) -> &str {
        &self.league_id
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    async fn get(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "fetching");
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        response
            .json::<Value>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }

    /// Fetch the roster for the given team, falling back to the configured
    /// team id. Returns `Ok(None)` when neither is set; no team means no
    /// roster, not an error.
    pub async fn fetch_roster(&self, team_id: Option<&str>) -> Result<Option<Value>, ApiError> {
        let Some(team) = team_id.or(self.team_id.as_deref()) else {
            return Ok(None);
        };
        let payload = self
            .get(
                "FetchRoster",
                &[
                    ("league_id", &self.league_id),
                    ("team_id", team),
                    ("sport", &self.sport),
                ],
            )
            .await?;
        Ok(Some(payload))
    }

    /// Fetch the free-agent listing, optionally filtered by position. The
    /// listing is requested pre-sorted by projection; the model layer makes
    /// no sorting assumption of its own.
    pub async fn fetch_free_agents(&self, position: Option<&str>) -> Result<Value, ApiError> {
        let mut params = vec![
            ("league_id", self.league_id.as_str()),
            ("sport", self.sport.as_str()),
            ("filter.free_agent_only", "true"),
            ("sort", "SORT_PROJECTIONS"),
        ];
        if let Some(position) = position {
            params.push(("filter.position.eligibility", position));
        }
        self.get("FetchPlayerListing", &params).await
    }

    /// Fetch the league scoreboard, optionally for a specific scoring
    /// period.
    pub async fn fetch_scoreboard(&self, scoring_period: Option<u32>) -> Result<Value, ApiError> {
        let period;
        let mut params = vec![
            ("league_id", self.league_id.as_str()),
            ("sport", self.sport.as_str()),
        ];
        if let Some(p) = scoring_period {
            period = p.to_string();
            params.push(("scoring_period", &period));
        }
        self.get("FetchLeagueScoreboard", &params).await
    }

    /// Fetch the league standings.
    pub async fn fetch_standings(&self) -> Result<Value, ApiError> {
        self.get(
            "FetchLeagueStandings",
            &[
                ("league_id", &self.league_id),
                ("sport", &self.sport),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roster_without_team_id_is_none_not_error() {
        let client = FleaflickerClient::new("12345", None, "NFL").unwrap();
        let roster = client.fetch_roster(None).await.unwrap();
        assert!(roster.is_none());
    }

    #[test]
    fn base_url_override() {
        let client = FleaflickerClient::new("12345", None, "NFL")
            .unwrap()
            .with_base_url("http://127.0.0.1:9/api");
        assert_eq!(client.base_url, "http://127.0.0.1:9/api");
        assert_eq!(client.league_id(), "12345");
        assert_eq!(client.sport(), "NFL");
    }
}
