// Web dashboard: JSON API plus a small HTML page that polls it.
//
// The snapshot is rebuilt from the upstream API on every request; nothing is
// cached. A fetch failure surfaces as 502 with the error message, never as a
// stale or partial payload.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::api::FleaflickerClient;
use crate::dashboard::{self, DashboardSnapshot};

/// Shared state for request handlers.
pub struct WebContext {
    pub client: FleaflickerClient,
    pub position: Option<String>,
}

/// Build the application router.
pub fn router(ctx: Arc<WebContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(api_dashboard))
        .with_state(ctx)
}

async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn api_dashboard(
    State(ctx): State<Arc<WebContext>>,
) -> Result<Json<DashboardSnapshot>, (StatusCode, String)> {
    dashboard::build_snapshot(&ctx.client, ctx.position.as_deref())
        .await
        .map(Json)
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}

/// Bind and serve until the process is stopped.
pub async fn serve(
    client: FleaflickerClient,
    position: Option<String>,
    bind: &str,
    port: u16,
) -> anyhow::Result<()> {
    let ctx = Arc::new(WebContext { client, position });
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .with_context(|| format!("failed to bind {bind}:{port}"))?;
    info!("web dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .context("web server error")?;
    Ok(())
}

/// Minimal page: fetches `/api/dashboard` every 30 seconds and renders the
/// payload as tables.
const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Fleaflicker Live Dashboard</title>
  <style>
    body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 2rem; }
    h1 { font-size: 1.3rem; }
    h2 { font-size: 1rem; margin-top: 1.5rem; }
    table { border-collapse: collapse; margin-top: 0.4rem; }
    th, td { border: 1px solid #334155; padding: 4px 10px; text-align: left; font-size: 0.85rem; }
    th { background: #1e293b; }
    #meta { color: #94a3b8; font-size: 0.8rem; }
  </style>
</head>
<body>
  <h1>Fleaflicker Live Dashboard</h1>
  <div id="meta">Loading...</div>
  <div id="panels"></div>
  <script>
    function table(title, headers, rows) {
      let html = '<h2>' + title + '</h2><table><tr>';
      for (const h of headers) html += '<th>' + h + '</th>';
      html += '</tr>';
      for (const row of rows) {
        html += '<tr>';
        for (const cell of row) html += '<td>' + (cell ?? '') + '</td>';
        html += '</tr>';
      }
      return html + '</table>';
    }
    function playerRows(players) {
      return players.map(p => [p.name, p.position, p.team, p.projection, p.last_three, p.score]);
    }
    async function refresh() {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        document.getElementById('meta').textContent = 'Fetch failed: HTTP ' + res.status;
        return;
      }
      const data = await res.json();
      document.getElementById('meta').textContent =
        'League ' + data.meta.league + ' | ' + data.meta.sport +
        ' | Position: ' + data.meta.position + ' | Updated ' + data.meta.generated_at;
      const headers = ['Name', 'Pos', 'Team', 'Proj', 'Last3', 'Score'];
      document.getElementById('panels').innerHTML =
        table('Roster', headers, playerRows(data.roster)) +
        table('Free Agents', headers, playerRows(data.free_agents)) +
        table('Upgrade Recommendations', ['Free Agent', 'Replace', 'Diff'],
          data.recommendations.map(r => [r.free_agent.name, r.replace.name, '+' + r.diff])) +
        table('Scoreboard', ['Home', 'Score', 'Away', 'Score'],
          data.scoreboard.map(g => [g.home, g.home_score, g.away, g.away_score])) +
        table('Standings', ['Rank', 'Team', 'W', 'L', 'T'],
          data.standings.map(s => [s.rank, s.name, s.wins, s.losses, s.ties]));
    }
    refresh();
    setInterval(refresh, 30000);
  </script>
</body>
</html>
"#;
