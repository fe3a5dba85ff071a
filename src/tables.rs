// Plain-text table rendering for CLI output.
//
// Thin presentation over the snapshot types; nothing here interprets the
// data beyond formatting.

use tabled::{Table, Tabled};

use crate::dashboard::{PlayerSummary, RecommendationSummary};
use crate::model::{GameRow, StandingsRow};

#[derive(Tabled)]
struct PlayerDisplay {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Proj")]
    projection: String,
    #[tabled(rename = "Last3")]
    last_three: String,
    #[tabled(rename = "Score")]
    score: String,
}

impl From<&PlayerSummary> for PlayerDisplay {
    fn from(player: &PlayerSummary) -> Self {
        PlayerDisplay {
            name: player.name.clone(),
            position: player.position.clone(),
            team: player.team.clone(),
            projection: format!("{:.1}", player.projection),
            last_three: format!("{:.1}", player.last_three),
            score: format!("{:.1}", player.score),
        }
    }
}

/// Render a roster or free-agent listing.
pub fn player_table(players: &[PlayerSummary]) -> String {
    let rows: Vec<PlayerDisplay> = players.iter().map(PlayerDisplay::from).collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct RecommendationDisplay {
    #[tabled(rename = "Free Agent")]
    free_agent: String,
    #[tabled(rename = "Replace")]
    replace: String,
    #[tabled(rename = "Diff")]
    diff: String,
}

/// Render upgrade recommendations.
pub fn recommendations_table(recommendations: &[RecommendationSummary]) -> String {
    let rows: Vec<RecommendationDisplay> = recommendations
        .iter()
        .map(|rec| RecommendationDisplay {
            free_agent: rec.free_agent.name.clone(),
            replace: rec.replace.name.clone(),
            diff: format!("{:+.2}", rec.diff),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct GameDisplay {
    #[tabled(rename = "Home Team")]
    home: String,
    #[tabled(rename = "Home Score")]
    home_score: String,
    #[tabled(rename = "Away Team")]
    away: String,
    #[tabled(rename = "Away Score")]
    away_score: String,
}

/// Render the league scoreboard.
pub fn scoreboard_table(rows: &[GameRow]) -> String {
    let rows: Vec<GameDisplay> = rows
        .iter()
        .map(|game| GameDisplay {
            home: game.home.clone(),
            home_score: format!("{:.1}", game.home_score),
            away: game.away.clone(),
            away_score: format!("{:.1}", game.away_score),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct StandingsDisplay {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Team")]
    name: String,
    #[tabled(rename = "Wins")]
    wins: String,
    #[tabled(rename = "Losses")]
    losses: String,
    #[tabled(rename = "Ties")]
    ties: String,
}

fn opt_display<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Render the league standings. Absent wins/losses render as blanks; ties
/// always render (defaulted to 0 upstream of here).
pub fn standings_table(rows: &[StandingsRow]) -> String {
    let rows: Vec<StandingsDisplay> = rows
        .iter()
        .map(|entry| StandingsDisplay {
            rank: opt_display(&entry.rank),
            name: entry.name.clone().unwrap_or_default(),
            wins: opt_display(&entry.wins),
            losses: opt_display(&entry.losses),
            ties: entry.ties.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}
