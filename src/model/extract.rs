// Payload extraction: raw API responses to flat sequences.
//
// Each function walks one payload shape and produces output in traversal
// order. Missing or null collections yield empty results, never errors.

use serde::Serialize;
use serde_json::Value;

use crate::model::player::Player;
use crate::model::score::score_value;

/// Iterate an array-valued key, or nothing when it is absent/not an array.
fn array<'a>(record: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    record
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn str_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

// ---------------------------------------------------------------------------
// Roster / free agents
// ---------------------------------------------------------------------------

/// Flatten a roster payload into players.
///
/// The payload is a sequence of groups, each holding a sequence of slots; an
/// occupied slot carries the player record under `league_player`. Group
/// order, then slot order within each group, is preserved; empty slots are
/// skipped. A missing payload (no team configured) yields an empty vec.
pub fn roster_players(roster_json: Option<&Value>) -> Vec<Player> {
    let mut players = Vec::new();
    let Some(roster) = roster_json.filter(|v| !v.is_null()) else {
        return players;
    };
    for group in array(roster, "groups") {
        for slot in array(group, "slots") {
            if let Some(league_player) = slot.get("league_player").filter(|v| !v.is_null()) {
                players.push(Player::new(league_player.clone()));
            }
        }
    }
    players
}

/// Flatten a free-agent listing payload into players.
///
/// Upstream ordering is preserved as-is; the API is expected to have sorted
/// by projection already, but no sorting assumption is made here.
pub fn free_agent_players(players_json: &Value) -> Vec<Player> {
    array(players_json, "players")
        .map(|record| Player::new(record.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Scoreboard
// ---------------------------------------------------------------------------

/// One scoreboard matchup, flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRow {
    pub home: String,
    pub home_score: f64,
    pub away: String,
    pub away_score: f64,
}

/// Flatten a scoreboard payload into rows.
///
/// Two upstream shapes exist: a `games` list with team names at the top of
/// each side, and a `matchups` list nesting the name one level deeper under
/// `team`. The `games` shape is tried first; `matchups` is consulted only
/// when it produced zero rows. The shapes are never merged.
pub fn scoreboard_rows(scoreboard_json: &Value) -> Vec<GameRow> {
    let mut rows: Vec<GameRow> = array(scoreboard_json, "games")
        .map(|game| {
            let home = game.get("home").unwrap_or(&Value::Null);
            let away = game.get("away").unwrap_or(&Value::Null);
            GameRow {
                home: str_field(home, "name"),
                home_score: home.get("score").map(score_value).unwrap_or(0.0),
                away: str_field(away, "name"),
                away_score: away.get("score").map(score_value).unwrap_or(0.0),
            }
        })
        .collect();
    if !rows.is_empty() {
        return rows;
    }

    for matchup in array(scoreboard_json, "matchups") {
        let home = matchup.get("home").unwrap_or(&Value::Null);
        let away = matchup.get("away").unwrap_or(&Value::Null);
        rows.push(GameRow {
            home: nested_team_name(home),
            home_score: home.get("score").map(score_value).unwrap_or(0.0),
            away: nested_team_name(away),
            away_score: away.get("score").map(score_value).unwrap_or(0.0),
        });
    }
    rows
}

/// Matchup sides nest the name under `team`, with a top-level `name` as the
/// fallback.
fn nested_team_name(side: &Value) -> String {
    side.get("team")
        .and_then(|team| team.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| str_field(side, "name"))
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// One standings entry, flattened from the division/team nesting.
///
/// `ties` defaults to 0 when absent while `wins`/`losses` pass through as
/// `None`. That asymmetry matches the upstream behavior exactly and is kept
/// deliberately (see `ties_default_quirk` below).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub rank: Option<u64>,
    pub name: Option<String>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: i64,
}

/// Flatten a standings payload into rows, division by division.
///
/// The win/loss/tie record lives under `record`, or `recordOverall` when the
/// `record` key itself is absent (an empty `record` does not fall back).
pub fn standings_rows(standings_json: &Value) -> Vec<StandingsRow> {
    let mut rows = Vec::new();
    for division in array(standings_json, "divisions") {
        for team in array(division, "teams") {
            let record = team.get("record").or_else(|| team.get("recordOverall"));
            let record_field = |key: &str| record.and_then(|r| r.get(key)).and_then(Value::as_i64);
            rows.push(StandingsRow {
                rank: team.get("rank").and_then(Value::as_u64),
                name: team
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                wins: record_field("wins"),
                losses: record_field("losses"),
                ties: record_field("ties").unwrap_or(0),
            });
        }
    }
    rows
}
