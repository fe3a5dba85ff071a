// Command-line interface: argument tree and command handlers.
//
// Every command resolves its league/team/sport from flags first, then the
// optional dashboard.toml, and builds a `FleaflickerClient` for one-shot
// fetches. Data commands render text tables by default or JSON with --json.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::api::FleaflickerClient;
use crate::config::DashboardConfig;
use crate::dashboard::{self, PlayerSummary, RecommendationSummary};
use crate::model::{
    free_agent_players, recommend_upgrades, roster_players, scoreboard_rows, standings_rows,
};
use crate::tables;
use crate::tui;
use crate::web;

#[derive(Debug, Parser)]
#[command(name = "fleadash")]
#[command(about = "Fleaflicker league dashboard: roster, free agents, upgrades, scores")]
#[command(version)]
pub struct Cli {
    /// Path to a dashboard.toml config file (default: ./dashboard.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of tables (data commands only).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// League identity shared by every subcommand.
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// Fleaflicker league ID.
    #[arg(long)]
    pub league: Option<String>,

    /// Sport code (NFL, NBA, MLB, ...).
    #[arg(long)]
    pub sport: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a team roster.
    Roster {
        #[command(flatten)]
        league: LeagueArgs,
        /// Team ID whose roster to show.
        #[arg(long)]
        team: Option<String>,
    },

    /// List available free agents.
    FreeAgents {
        #[command(flatten)]
        league: LeagueArgs,
        /// Filter free agents by position eligibility.
        #[arg(long)]
        position: Option<String>,
    },

    /// Show the league scoreboard.
    Scoreboard {
        #[command(flatten)]
        league: LeagueArgs,
        /// Scoring period to show (defaults to the current one).
        #[arg(long)]
        scoring_period: Option<u32>,
    },

    /// Show league standings.
    Standings {
        #[command(flatten)]
        league: LeagueArgs,
    },

    /// Compare your roster against free agents and recommend upgrades.
    Compare {
        #[command(flatten)]
        league: LeagueArgs,
        /// Your team ID.
        #[arg(long)]
        team: Option<String>,
        /// Restrict free agents (and matching) to a position.
        #[arg(long)]
        position: Option<String>,
    },

    /// Launch the live terminal dashboard.
    Tui {
        #[command(flatten)]
        league: LeagueArgs,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        position: Option<String>,
        /// Refresh interval in seconds.
        #[arg(long)]
        refresh: Option<u64>,
    },

    /// Serve the web dashboard (JSON API + HTML page).
    Serve {
        #[command(flatten)]
        league: LeagueArgs,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        position: Option<String>,
        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind.
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Command {
    /// Whether this command drives a TUI (logging must stay off the
    /// terminal).
    pub fn owns_terminal(&self) -> bool {
        matches!(self, Command::Tui { .. })
    }
}

// ---------------------------------------------------------------------------
// Flag/config resolution
// ---------------------------------------------------------------------------

fn build_client(
    league: &LeagueArgs,
    team: Option<&String>,
    config: &DashboardConfig,
) -> anyhow::Result<FleaflickerClient> {
    let league_id = league
        .league
        .clone()
        .or_else(|| config.league.id.clone());
    let Some(league_id) = league_id else {
        bail!("no league ID given; pass --league or set league.id in dashboard.toml");
    };
    let sport = league
        .sport
        .clone()
        .or_else(|| config.league.sport.clone())
        .unwrap_or_else(|| "NFL".to_string());
    let team_id = team.cloned().or_else(|| config.league.team.clone());
    FleaflickerClient::new(league_id, team_id, sport).context("failed to build API client")
}

fn require_team(client: &FleaflickerClient) -> anyhow::Result<()> {
    if client.team_id().is_none() {
        bail!("no team ID given; pass --team or set league.team in dashboard.toml");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DashboardConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    let json = cli.json;

    match cli.command {
        Command::Roster { league, team } => {
            let client = build_client(&league, team.as_ref(), &config)?;
            require_team(&client)?;
            let roster_json = client.fetch_roster(None).await?;
            let players: Vec<PlayerSummary> = roster_players(roster_json.as_ref())
                .iter()
                .map(PlayerSummary::from_player)
                .collect();
            if json {
                print_json(&players)?;
            } else {
                println!("{}", tables::player_table(&players));
            }
        }

        Command::FreeAgents { league, position } => {
            let client = build_client(&league, None, &config)?;
            let listing = client.fetch_free_agents(position.as_deref()).await?;
            let players: Vec<PlayerSummary> = free_agent_players(&listing)
                .iter()
                .map(PlayerSummary::from_player)
                .collect();
            if json {
                print_json(&players)?;
            } else {
                println!("{}", tables::player_table(&players));
            }
        }

        Command::Scoreboard {
            league,
            scoring_period,
        } => {
            let client = build_client(&league, None, &config)?;
            let payload = client.fetch_scoreboard(scoring_period).await?;
            let rows = scoreboard_rows(&payload);
            if json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                println!("No scoreboard data available.");
            } else {
                println!("{}", tables::scoreboard_table(&rows));
            }
        }

        Command::Standings { league } => {
            let client = build_client(&league, None, &config)?;
            let payload = client.fetch_standings().await?;
            let rows = standings_rows(&payload);
            if json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                println!("No standings data available.");
            } else {
                println!("{}", tables::standings_table(&rows));
            }
        }

        Command::Compare {
            league,
            team,
            position,
        } => {
            let client = build_client(&league, team.as_ref(), &config)?;
            require_team(&client)?;
            compare(&client, position.as_deref(), json).await?;
        }

        Command::Tui {
            league,
            team,
            position,
            refresh,
        } => {
            let client = build_client(&league, team.as_ref(), &config)?;
            let refresh_secs = refresh.unwrap_or(config.tui.refresh_secs);
            if refresh_secs == 0 {
                bail!("--refresh must be greater than 0");
            }
            tui::run_dashboard(client, position, refresh_secs).await?;
        }

        Command::Serve {
            league,
            team,
            position,
            port,
            bind,
        } => {
            let client = build_client(&league, team.as_ref(), &config)?;
            let bind = bind.unwrap_or_else(|| config.web.bind.clone());
            let port = port.unwrap_or(config.web.port);
            if port == 0 {
                bail!("--port must be greater than 0");
            }
            web::serve(client, position, &bind, port).await?;
        }
    }

    Ok(())
}

/// The `compare` command: roster table, free-agent table, then ranked
/// upgrade recommendations. Position-constrained matching is on exactly
/// when a position filter was given.
async fn compare(
    client: &FleaflickerClient,
    position: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let snapshot = dashboard::build_snapshot(client, position).await?;
        return print_json(&snapshot);
    }

    let roster_json = client.fetch_roster(None).await?;
    let free_agents_json = client.fetch_free_agents(position).await?;

    let roster = roster_players(roster_json.as_ref());
    let free_agents = free_agent_players(&free_agents_json);

    let roster_rows: Vec<PlayerSummary> =
        roster.iter().map(PlayerSummary::from_player).collect();
    if roster_rows.is_empty() {
        println!("No roster data available.");
    } else {
        println!("Roster");
        println!("{}", tables::player_table(&roster_rows));
    }

    let fa_rows: Vec<PlayerSummary> = free_agents
        .iter()
        .map(PlayerSummary::from_player)
        .collect();
    println!("Free Agents");
    println!("{}", tables::player_table(&fa_rows));

    let recommendations: Vec<RecommendationSummary> =
        recommend_upgrades(&roster, &free_agents, position.is_some())
            .iter()
            .map(RecommendationSummary::from_recommendation)
            .collect();
    if recommendations.is_empty() {
        println!("No upgrades recommended.");
    } else {
        println!("Upgrade Recommendations");
        println!("{}", tables::recommendations_table(&recommendations));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compare_with_position() {
        let cli = Cli::parse_from([
            "fleadash", "compare", "--league", "197529", "--team", "1437996", "--position", "WR",
        ]);
        match cli.command {
            Command::Compare {
                league,
                team,
                position,
            } => {
                assert_eq!(league.league.as_deref(), Some("197529"));
                assert_eq!(team.as_deref(), Some("1437996"));
                assert_eq!(position.as_deref(), Some("WR"));
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn parses_free_agents_json_mode() {
        let cli = Cli::parse_from([
            "fleadash",
            "free-agents",
            "--league",
            "1",
            "--sport",
            "NBA",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Command::FreeAgents { league, position } => {
                assert_eq!(league.sport.as_deref(), Some("NBA"));
                assert!(position.is_none());
            }
            other => panic!("expected free-agents, got {other:?}"),
        }
    }

    #[test]
    fn tui_owns_terminal() {
        let cli = Cli::parse_from(["fleadash", "tui", "--league", "1", "--team", "2"]);
        assert!(cli.command.owns_terminal());
        let cli = Cli::parse_from(["fleadash", "standings", "--league", "1"]);
        assert!(!cli.command.owns_terminal());
    }

    #[test]
    fn client_resolution_prefers_flags_over_config() {
        let config = DashboardConfig::from_toml_str(
            "[league]\nid = \"config-league\"\nteam = \"config-team\"\nsport = \"NBA\"\n",
            std::path::Path::new("dashboard.toml"),
        )
        .unwrap();
        let args = LeagueArgs {
            league: Some("flag-league".into()),
            sport: None,
        };
        let client = build_client(&args, None, &config).unwrap();
        assert_eq!(client.league_id(), "flag-league");
        assert_eq!(client.sport(), "NBA");
        assert_eq!(client.team_id(), Some("config-team"));
    }

    #[test]
    fn missing_league_is_an_error() {
        let config = DashboardConfig::default();
        let args = LeagueArgs {
            league: None,
            sport: None,
        };
        assert!(build_client(&args, None, &config).is_err());
    }
}
