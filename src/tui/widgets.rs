// Dashboard table widgets.
//
// Each render function draws one bordered table panel from the snapshot
// data. No interpretation happens here; the core already shaped everything.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::dashboard::{PlayerSummary, RecommendationSummary};
use crate::model::{GameRow, StandingsRow};

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|t| Cell::from(*t)).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn panel(title: String) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Render a roster or free-agent panel.
pub fn render_players(frame: &mut Frame, area: Rect, title: &str, players: &[PlayerSummary]) {
    let rows: Vec<Row> = players
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.position.clone()),
                Cell::from(p.team.clone()),
                Cell::from(format!("{:.1}", p.projection)),
                Cell::from(format!("{:.1}", p.last_three)),
                Cell::from(format!("{:.1}", p.score)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["Name", "Pos", "Team", "Proj", "Last3", "Score"]))
        .block(panel(format!("{title} ({})", players.len())));
    frame.render_widget(table, area);
}

/// Render the upgrade recommendations panel.
pub fn render_recommendations(frame: &mut Frame, area: Rect, recs: &[RecommendationSummary]) {
    let rows: Vec<Row> = recs
        .iter()
        .map(|rec| {
            Row::new(vec![
                Cell::from(rec.free_agent.name.clone()),
                Cell::from(rec.replace.name.clone()),
                Cell::from(format!("{:+.2}", rec.diff))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Length(7),
    ];

    let title = if recs.is_empty() {
        "Upgrades (none)".to_string()
    } else {
        format!("Upgrades ({})", recs.len())
    };
    let table = Table::new(rows, widths)
        .header(header(&["Free Agent", "Replace", "Diff"]))
        .block(panel(title));
    frame.render_widget(table, area);
}

/// Render the scoreboard panel.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, games: &[GameRow]) {
    let rows: Vec<Row> = games
        .iter()
        .map(|game| {
            Row::new(vec![
                Cell::from(game.home.clone()),
                Cell::from(format!("{:.1}", game.home_score)),
                Cell::from(game.away.clone()),
                Cell::from(format!("{:.1}", game.away_score)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(7),
        Constraint::Min(12),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["Home", "Score", "Away", "Score"]))
        .block(panel("Scoreboard".to_string()));
    frame.render_widget(table, area);
}

/// Render the standings panel. Absent wins/losses show as blanks.
pub fn render_standings(frame: &mut Frame, area: Rect, standings: &[StandingsRow]) {
    let rows: Vec<Row> = standings
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.rank.map(|r| r.to_string()).unwrap_or_default()),
                Cell::from(entry.name.clone().unwrap_or_default()),
                Cell::from(entry.wins.map(|w| w.to_string()).unwrap_or_default()),
                Cell::from(entry.losses.map(|l| l.to_string()).unwrap_or_default()),
                Cell::from(entry.ties.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(4),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["Rank", "Team", "W", "L", "T"]))
        .block(panel("Standings".to_string()));
    frame.render_widget(table, area);
}
