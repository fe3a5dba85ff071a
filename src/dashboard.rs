// Dashboard snapshot assembly.
//
// One snapshot is one full pass over the API: fetch all four payloads, run
// them through the model layer, and package the results into a serializable
// structure every surface (CLI tables, TUI, web JSON) can consume without
// further interpretation. Snapshots are rebuilt from scratch on every call;
// there is no cross-call state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{ApiError, FleaflickerClient};
use crate::model::{
    free_agent_players, recommend_upgrades, roster_players, scoreboard_rows, standings_rows,
    GameRow, Player, Recommendation, StandingsRow,
};

/// Round to one decimal for display-friendly player values.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimals for score differentials.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// A player flattened for presentation. Values are rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub position: String,
    pub team: String,
    pub projection: f64,
    pub last_three: f64,
    pub score: f64,
}

impl PlayerSummary {
    pub fn from_player(player: &Player) -> Self {
        PlayerSummary {
            name: player.name(),
            position: player.position(),
            team: player.team(),
            projection: round1(player.projection()),
            last_three: round1(player.last_three()),
            score: round1(player.score()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub free_agent: PlayerSummary,
    pub replace: PlayerSummary,
    pub diff: f64,
}

impl RecommendationSummary {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        RecommendationSummary {
            free_agent: PlayerSummary::from_player(&rec.free_agent),
            replace: PlayerSummary::from_player(&rec.replace),
            diff: round2(rec.diff),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMeta {
    pub league: String,
    pub team: Option<String>,
    pub sport: String,
    /// Position filter in effect, or `"Any"`.
    pub position: String,
    pub generated_at: DateTime<Utc>,
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub meta: SnapshotMeta,
    pub roster: Vec<PlayerSummary>,
    pub free_agents: Vec<PlayerSummary>,
    pub recommendations: Vec<RecommendationSummary>,
    pub scoreboard: Vec<GameRow>,
    pub standings: Vec<StandingsRow>,
}

/// Fetch every payload and assemble a full snapshot.
///
/// Position-constrained recommendation matching is enabled exactly when a
/// position filter is given, mirroring how the free-agent pool was narrowed.
pub async fn build_snapshot(
    client: &FleaflickerClient,
    position: Option<&str>,
) -> Result<DashboardSnapshot, ApiError> {
    let roster_json = client.fetch_roster(None).await?;
    let free_agents_json = client.fetch_free_agents(position).await?;
    let scoreboard_json = client.fetch_scoreboard(None).await?;
    let standings_json = client.fetch_standings().await?;

    let roster = roster_players(roster_json.as_ref());
    let free_agents = free_agent_players(&free_agents_json);
    let recommendations = recommend_upgrades(&roster, &free_agents, position.is_some());

    Ok(DashboardSnapshot {
        meta: SnapshotMeta {
            league: client.league_id().to_string(),
            team: client.team_id().map(str::to_string),
            sport: client.sport().to_string(),
            position: position.unwrap_or("Any").to_string(),
            generated_at: Utc::now(),
        },
        roster: roster.iter().map(PlayerSummary::from_player).collect(),
        free_agents: free_agents
            .iter()
            .map(PlayerSummary::from_player)
            .collect(),
        recommendations: recommendations
            .iter()
            .map(RecommendationSummary::from_recommendation)
            .collect(),
        scoreboard: scoreboard_rows(&scoreboard_json),
        standings: standings_rows(&standings_json),
    })
}
