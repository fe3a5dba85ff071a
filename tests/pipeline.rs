// End-to-end pipeline tests.
//
// A local stub of the upstream API serves fixture payloads over real HTTP;
// the client fetches them and snapshot assembly runs the full model layer.

use std::collections::HashMap;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use flea_dashboard::api::{ApiError, FleaflickerClient};
use flea_dashboard::dashboard::build_snapshot;

// ---------------------------------------------------------------------------
// Stub upstream
// ---------------------------------------------------------------------------

fn stud_qb() -> Value {
    json!({
        "pro_player": {"name_full": "Stud QB", "position": "QB", "pro_team_abbreviation": "BUF"},
        "projections": {"value": 30.0},
        "last_x_points": [{"value": 12.0}, {"value": 12.0}, {"value": 12.0}]
    })
}

fn meh_wr() -> Value {
    json!({
        "pro_player": {"name_full": "Meh WR", "position": "WR", "pro_team_abbreviation": "DAL"},
        "projections": {"value": 5.0}
    })
}

async fn roster_handler() -> Json<Value> {
    Json(json!({
        "groups": [
            {"slots": [
                {"league_player": {
                    "pro_player": {"name_full": "Starter QB", "position": "QB",
                                   "pro_team_abbreviation": "KC"},
                    "projections": {"value": 20.0},
                    "last_x_points": [{"value": 10.0}, {"value": 10.0}, {"value": 10.0}]
                }},
                {}
            ]},
            {"slots": [
                {"league_player": {
                    "pro_player": {"name_full": "Weak WR", "position": "WR",
                                   "pro_team_abbreviation": "NYJ"},
                    "projections": {"value": 8.0}
                }}
            ]}
        ]
    }))
}

// Honors the position filter the way the real listing endpoint does.
async fn listing_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let pool = vec![stud_qb(), meh_wr()];
    let players: Vec<Value> = match params.get("filter.position.eligibility") {
        Some(position) => pool
            .into_iter()
            .filter(|p| p["pro_player"]["position"] == position.as_str())
            .collect(),
        None => pool,
    };
    Json(json!({ "players": players }))
}

async fn scoreboard_handler() -> Json<Value> {
    Json(json!({
        "games": [
            {
                "home": {"name": "Hawks", "score": {"value": 101.5}},
                "away": {"name": "Wolves", "score": 88.0}
            }
        ]
    }))
}

async fn standings_handler() -> Json<Value> {
    Json(json!({
        "divisions": [
            {"teams": [
                {"rank": 1, "name": "Alpha", "record": {"wins": 9, "losses": 2, "ties": 1}}
            ]},
            {"teams": [
                {"rank": 2, "name": "Beta", "recordOverall": {"wins": 7, "losses": 4}}
            ]}
        ]
    }))
}

/// Start the stub on an ephemeral port and return its base URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/FetchRoster", get(roster_handler))
        .route("/FetchPlayerListing", get(listing_handler))
        .route("/FetchLeagueScoreboard", get(scoreboard_handler))
        .route("/FetchLeagueStandings", get(standings_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn stub_client(base: &str, team: Option<&str>) -> FleaflickerClient {
    FleaflickerClient::new("4321", team.map(str::to_string), "NFL")
        .expect("build client")
        .with_base_url(base)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_snapshot_without_position_filter() {
    let base = spawn_stub().await;
    let client = stub_client(&base, Some("777"));

    let snapshot = build_snapshot(&client, None).await.expect("snapshot");

    assert_eq!(snapshot.meta.league, "4321");
    assert_eq!(snapshot.meta.team.as_deref(), Some("777"));
    assert_eq!(snapshot.meta.sport, "NFL");
    assert_eq!(snapshot.meta.position, "Any");

    // Roster in group/slot order, values rounded to one decimal.
    let roster: Vec<(&str, f64)> = snapshot
        .roster
        .iter()
        .map(|p| (p.name.as_str(), p.score))
        .collect();
    assert_eq!(roster, [("Starter QB", 17.0), ("Weak WR", 5.6)]);
    assert_eq!(snapshot.roster[0].team, "KC");

    let free_agents: Vec<(&str, f64)> = snapshot
        .free_agents
        .iter()
        .map(|p| (p.name.as_str(), p.score))
        .collect();
    assert_eq!(free_agents, [("Stud QB", 24.6), ("Meh WR", 3.5)]);

    // Unconstrained matching targets only the worst roster player. The only
    // free agent strictly better than Weak WR (5.6) is Stud QB (24.6).
    assert_eq!(snapshot.recommendations.len(), 1);
    let rec = &snapshot.recommendations[0];
    assert_eq!(rec.free_agent.name, "Stud QB");
    assert_eq!(rec.replace.name, "Weak WR");
    assert_eq!(rec.diff, 19.0);

    assert_eq!(snapshot.scoreboard.len(), 1);
    assert_eq!(snapshot.scoreboard[0].home, "Hawks");
    assert_eq!(snapshot.scoreboard[0].home_score, 101.5);
    assert_eq!(snapshot.scoreboard[0].away, "Wolves");
    assert_eq!(snapshot.scoreboard[0].away_score, 88.0);

    assert_eq!(snapshot.standings.len(), 2);
    assert_eq!(snapshot.standings[0].name.as_deref(), Some("Alpha"));
    assert_eq!(snapshot.standings[0].wins, Some(9));
    assert_eq!(snapshot.standings[0].ties, 1);
    assert_eq!(snapshot.standings[1].wins, Some(7));
    assert_eq!(snapshot.standings[1].ties, 0);
}

#[tokio::test]
async fn position_filter_constrains_pool_and_matching() {
    let base = spawn_stub().await;
    let client = stub_client(&base, Some("777"));

    let snapshot = build_snapshot(&client, Some("QB")).await.expect("snapshot");

    assert_eq!(snapshot.meta.position, "QB");

    // The stub honors the eligibility filter, so only the QB comes back.
    assert_eq!(snapshot.free_agents.len(), 1);
    assert_eq!(snapshot.free_agents[0].name, "Stud QB");

    // Position matching pairs the QB free agent with the roster QB, not the
    // weaker WR. 24.6 - 17.0 = 7.6.
    assert_eq!(snapshot.recommendations.len(), 1);
    let rec = &snapshot.recommendations[0];
    assert_eq!(rec.replace.name, "Starter QB");
    assert_eq!(rec.free_agent.name, "Stud QB");
    assert_eq!(rec.diff, 7.6);
}

#[tokio::test]
async fn missing_team_gives_empty_roster_and_no_recommendations() {
    let base = spawn_stub().await;
    let client = stub_client(&base, None);

    let snapshot = build_snapshot(&client, None).await.expect("snapshot");

    assert!(snapshot.meta.team.is_none());
    assert!(snapshot.roster.is_empty());
    assert!(snapshot.recommendations.is_empty());

    // League-wide panels still populate without a team.
    assert_eq!(snapshot.free_agents.len(), 2);
    assert_eq!(snapshot.scoreboard.len(), 1);
    assert_eq!(snapshot.standings.len(), 2);
}

#[tokio::test]
async fn snapshot_is_deterministic_for_identical_payloads() {
    let base = spawn_stub().await;
    let client = stub_client(&base, Some("777"));

    let first = build_snapshot(&client, None).await.expect("first snapshot");
    let second = build_snapshot(&client, None).await.expect("second snapshot");

    assert_eq!(first.roster, second.roster);
    assert_eq!(first.free_agents, second.free_agents);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.scoreboard, second.scoreboard);
    assert_eq!(first.standings, second.standings);
}

#[tokio::test]
async fn upstream_http_error_surfaces_as_status() {
    let base = spawn_stub().await;
    // An unknown path under the stub returns 404 for every endpoint.
    let client = stub_client(&format!("{base}/nope"), Some("777"));

    let err = build_snapshot(&client, None)
        .await
        .expect_err("404 must fail the snapshot");
    match err {
        ApiError::Status { endpoint, status } => {
            assert_eq!(endpoint, "FetchRoster");
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
