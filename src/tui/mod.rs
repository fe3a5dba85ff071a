// Live terminal dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the most recent dashboard snapshot. A
// background fetch task polls the API on a fixed interval and pushes
// `UiUpdate` messages over an mpsc channel; the render loop applies them and
// redraws. The core stays pure: all polling lives out here.

pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::FleaflickerClient;
use crate::dashboard::{self, DashboardSnapshot};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Updates pushed from the fetch task to the render loop.
#[derive(Debug)]
pub enum UiUpdate {
    /// A freshly assembled snapshot.
    Snapshot(Box<DashboardSnapshot>),
    /// A fetch failed; the previous snapshot stays on screen.
    FetchError(String),
}

/// Commands sent from the render loop to the fetch task.
#[derive(Debug, PartialEq)]
pub enum UserCommand {
    Refresh,
    Quit,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state mirrored from the latest snapshot for rendering.
pub struct ViewState {
    pub snapshot: Option<DashboardSnapshot>,
    pub error: Option<String>,
    pub refreshing: bool,
    pub refresh_secs: u64,
}

impl ViewState {
    fn new(refresh_secs: u64) -> Self {
        ViewState {
            snapshot: None,
            error: None,
            refreshing: true,
            refresh_secs,
        }
    }

    fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Snapshot(snapshot) => {
                self.snapshot = Some(*snapshot);
                self.error = None;
                self.refreshing = false;
            }
            UiUpdate::FetchError(message) => {
                // Keep showing stale data; the error lands in the status bar.
                self.error = Some(message);
                self.refreshing = false;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch task
// ---------------------------------------------------------------------------

/// Poll the API on the refresh interval, and immediately on `Refresh`.
/// Exits on `Quit` or when either channel closes.
async fn fetch_loop(
    client: FleaflickerClient,
    position: Option<String>,
    refresh_secs: u64,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
) {
    let mut tick = tokio::time::interval(Duration::from_secs(refresh_secs));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick.tick() => {}
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Refresh) => {
                        // Fall through to fetch now; the interval keeps its
                        // own schedule.
                    }
                    Some(UserCommand::Quit) | None => break,
                }
            }
        }

        let update = match dashboard::build_snapshot(&client, position.as_deref()).await {
            Ok(snapshot) => UiUpdate::Snapshot(Box::new(snapshot)),
            Err(e) => {
                warn!("dashboard fetch failed: {e}");
                UiUpdate::FetchError(e.to_string())
            }
        };
        if ui_tx.send(update).await.is_err() {
            break;
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    render_status_bar(frame, layout.status_bar, state);

    if let Some(snapshot) = &state.snapshot {
        widgets::render_players(frame, layout.roster, "Roster", &snapshot.roster);
        widgets::render_players(frame, layout.free_agents, "Free Agents", &snapshot.free_agents);
        widgets::render_recommendations(frame, layout.recommendations, &snapshot.recommendations);
        widgets::render_scoreboard(frame, layout.scoreboard, &snapshot.scoreboard);
        widgets::render_standings(frame, layout.standings, &snapshot.standings);
    } else {
        let text = if state.error.is_some() {
            "Fetch failed; retrying on the next interval."
        } else {
            "Loading league data..."
        };
        frame.render_widget(Paragraph::new(text), layout.roster);
    }

    render_help_bar(frame, layout.help_bar);
}

fn render_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let mut text = match &state.snapshot {
        Some(snapshot) => format!(
            " League {} | {} | Pos: {} | Updated {}",
            snapshot.meta.league,
            snapshot.meta.sport,
            snapshot.meta.position,
            snapshot.meta.generated_at.format("%H:%M:%S UTC"),
        ),
        None => " Connecting...".to_string(),
    };
    if state.refreshing {
        text.push_str(" | refreshing");
    }
    let style = if let Some(error) = &state.error {
        text = format!(" Error: {error} |{text}");
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(Line::from(Span::raw(text))).style(style);
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect) {
    let text = " q:Quit | r:Refresh";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the live dashboard.
///
/// 1. Spawns the fetch task (first fetch fires immediately).
/// 2. Initializes the terminal and installs a panic hook that restores it.
/// 3. Runs the select loop: snapshot updates, keyboard input, render ticks.
/// 4. Restores the terminal on exit.
pub async fn run_dashboard(
    client: FleaflickerClient,
    position: Option<String>,
    refresh_secs: u64,
) -> anyhow::Result<()> {
    info!(
        "starting TUI dashboard: league={}, refresh={}s",
        client.league_id(),
        refresh_secs
    );

    let (ui_tx, mut ui_rx) = mpsc::channel(16);
    let (cmd_tx, cmd_rx) = mpsc::channel(16);

    let fetch_handle = tokio::spawn(fetch_loop(client, position, refresh_secs, ui_tx, cmd_rx));

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(refresh_secs);
    let mut event_stream = EventStream::new();

    // Data changes on the order of seconds; 4 fps is plenty.
    let mut render_tick = tokio::time::interval(Duration::from_millis(250));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(update) => view_state.apply(update),
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        let quit = key.code == KeyCode::Char('q')
                            || (key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL));
                        if quit {
                            let _ = cmd_tx.send(UserCommand::Quit).await;
                            break;
                        }
                        if key.code == KeyCode::Char('r') {
                            view_state.refreshing = true;
                            let _ = cmd_tx.send(UserCommand::Refresh).await;
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize/mouse events: the next render tick handles it.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    // Make sure the fetch task winds down before returning.
    drop(cmd_tx);
    let _ = tokio::time::timeout(Duration::from_secs(2), fetch_handle).await;

    info!("TUI dashboard shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SnapshotMeta;
    use chrono::Utc;

    fn empty_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            meta: SnapshotMeta {
                league: "1".into(),
                team: None,
                sport: "NFL".into(),
                position: "Any".into(),
                generated_at: Utc::now(),
            },
            roster: vec![],
            free_agents: vec![],
            recommendations: vec![],
            scoreboard: vec![],
            standings: vec![],
        }
    }

    #[test]
    fn snapshot_clears_error_and_refreshing() {
        let mut state = ViewState::new(10);
        state.error = Some("boom".into());
        state.refreshing = true;
        state.apply(UiUpdate::Snapshot(Box::new(empty_snapshot())));
        assert!(state.error.is_none());
        assert!(!state.refreshing);
        assert!(state.snapshot.is_some());
    }

    #[test]
    fn fetch_error_keeps_stale_snapshot() {
        let mut state = ViewState::new(10);
        state.apply(UiUpdate::Snapshot(Box::new(empty_snapshot())));
        state.apply(UiUpdate::FetchError("timeout".into()));
        assert!(state.snapshot.is_some());
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }
}
