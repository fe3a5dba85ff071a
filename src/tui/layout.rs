// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the league dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +----------------+----------------+----------------+
// | Roster (34%)   | Free Agents    | Upgrades (33%) |
// |                | (33%)          |                |
// +----------------+----------------+----------------+
// | Scoreboard (50%)        | Standings (50%)        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: league identity, refresh status, last update time.
    pub status_bar: Rect,
    /// Upper-left: the configured team's roster.
    pub roster: Rect,
    /// Upper-middle: the free-agent pool.
    pub free_agents: Rect,
    /// Upper-right: ranked upgrade recommendations.
    pub recommendations: Rect,
    /// Lower-left: league scoreboard.
    pub scoreboard: Rect,
    /// Lower-right: league standings.
    pub standings: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
///
/// Fixed single-row bars at the top and bottom; the remaining space is
/// split 60/40 between the player panels and the league panels.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // status bar
            Constraint::Percentage(60), // player panels
            Constraint::Min(6),         // league panels
            Constraint::Length(1),      // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let players = vertical[1];
    let league = vertical[2];
    let help_bar = vertical[3];

    let player_panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(players);

    let league_panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(league);

    AppLayout {
        status_bar,
        roster: player_panels[0],
        free_agents: player_panels[1],
        recommendations: player_panels[2],
        scoreboard: league_panels[0],
        standings: league_panels[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
