// Upgrade recommendations: roster players vs. the free-agent pool.

use std::cmp::Ordering;

use crate::model::player::Player;

/// A suggested pickup: add `free_agent`, drop `replace`. `diff` is the score
/// differential and is strictly positive by construction.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub free_agent: Player,
    pub replace: Player,
    pub diff: f64,
}

/// Rank upgrade opportunities for a roster against a free-agent pool.
///
/// The roster is ordered worst-first and the pool best-first; both sorts are
/// stable so equal scores keep their upstream relative order and the output
/// is deterministic.
///
/// The two modes are intentionally asymmetric:
/// - `match_position == false` answers "what is my single biggest upgrade
///   opportunity": only the worst roster player is a replacement target, and
///   every free agent strictly outscoring them is emitted, best first.
/// - `match_position == true` answers "what upgrades exist at each
///   position": every roster player is compared, worst-to-best, against the
///   free agents whose `position` string matches exactly.
///
/// Do not collapse the modes into one; the difference is observable output.
pub fn recommend_upgrades(
    roster: &[Player],
    free_agents: &[Player],
    match_position: bool,
) -> Vec<Recommendation> {
    if roster.is_empty() || free_agents.is_empty() {
        return Vec::new();
    }

    // Scores are computed once per player; NaN (not producible from the
    // accessors' defaults) would compare as equal and keep input order.
    let mut roster_sorted: Vec<(&Player, f64)> =
        roster.iter().map(|p| (p, p.score())).collect();
    roster_sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut pool_sorted: Vec<(&Player, f64)> =
        free_agents.iter().map(|p| (p, p.score())).collect();
    pool_sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut recommendations = Vec::new();

    if match_position {
        for (roster_player, roster_score) in &roster_sorted {
            let position = roster_player.position();
            for (free_agent, pool_score) in &pool_sorted {
                if free_agent.position() != position {
                    continue;
                }
                let diff = pool_score - roster_score;
                if diff > 0.0 {
                    recommendations.push(Recommendation {
                        free_agent: (*free_agent).clone(),
                        replace: (*roster_player).clone(),
                        diff,
                    });
                }
            }
        }
    } else {
        let (worst, worst_score) = roster_sorted[0];
        for (free_agent, pool_score) in &pool_sorted {
            let diff = pool_score - worst_score;
            if diff > 0.0 {
                recommendations.push(Recommendation {
                    free_agent: (*free_agent).clone(),
                    replace: worst.clone(),
                    diff,
                });
            }
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A player whose projection equals `score` and with no recent points,
    /// so `score()` is `score * 0.7`. The raw projection values below are
    /// chosen so relative order matches the scenario being described.
    fn player(name: &str, position: &str, projection: f64) -> Player {
        Player::new(json!({
            "name": name,
            "position": position,
            "projections": {"value": projection}
        }))
    }

    fn names(recs: &[Recommendation]) -> Vec<(String, String)> {
        recs.iter()
            .map(|r| (r.free_agent.name(), r.replace.name()))
            .collect()
    }

    #[test]
    fn empty_inputs_yield_no_recommendations() {
        let pool = vec![player("FA", "QB", 10.0)];
        let roster = vec![player("RP", "QB", 5.0)];
        assert!(recommend_upgrades(&[], &pool, false).is_empty());
        assert!(recommend_upgrades(&roster, &[], false).is_empty());
        assert!(recommend_upgrades(&[], &[], true).is_empty());
    }

    // Unconstrained mode targets only the single worst roster player.
    #[test]
    fn unconstrained_mode_compares_worst_player_only() {
        let roster = vec![
            player("R10", "QB", 10.0),
            player("R20", "WR", 20.0),
            player("R30", "RB", 30.0),
        ];
        let pool = vec![
            player("F25", "WR", 25.0),
            player("F15", "RB", 15.0),
            player("F40", "QB", 40.0),
        ];
        let recs = recommend_upgrades(&roster, &pool, false);
        assert_eq!(
            names(&recs),
            vec![
                ("F40".to_string(), "R10".to_string()),
                ("F25".to_string(), "R10".to_string()),
                ("F15".to_string(), "R10".to_string()),
            ]
        );
        let diffs: Vec<f64> = recs.iter().map(|r| r.diff).collect();
        for (got, want) in diffs.iter().zip([30.0 * 0.7, 15.0 * 0.7, 5.0 * 0.7]) {
            assert!((got - want).abs() < 1e-9, "diff {got} != {want}");
        }
    }

    // Constrained mode considers every roster player but filters the pool
    // by exact position match.
    #[test]
    fn constrained_mode_filters_by_position_across_all_players() {
        let roster = vec![player("QB-10", "QB", 10.0), player("WR-20", "WR", 20.0)];
        let pool = vec![
            player("QB-15", "QB", 15.0),
            player("WR-5", "WR", 5.0),
            player("QB-8", "QB", 8.0),
        ];
        let recs = recommend_upgrades(&roster, &pool, true);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].free_agent.name(), "QB-15");
        assert_eq!(recs[0].replace.name(), "QB-10");
        assert!((recs[0].diff - 5.0 * 0.7).abs() < 1e-12);
    }

    #[test]
    fn constrained_mode_requires_exact_position_string() {
        let roster = vec![player("Flex", "W/R", 1.0)];
        let pool = vec![player("Wideout", "WR", 50.0)];
        assert!(recommend_upgrades(&roster, &pool, true).is_empty());
    }

    #[test]
    fn diffs_are_strictly_positive() {
        let roster = vec![player("R", "QB", 10.0)];
        let pool = vec![
            player("Equal", "QB", 10.0),
            player("Worse", "QB", 4.0),
            player("Better", "QB", 11.0),
        ];
        for mode in [false, true] {
            let recs = recommend_upgrades(&roster, &pool, mode);
            assert_eq!(recs.len(), 1);
            assert_eq!(recs[0].free_agent.name(), "Better");
            assert!(recs[0].diff > 0.0);
        }
    }

    // Stable sorting: free agents with equal scores keep upstream order.
    #[test]
    fn equal_scores_preserve_upstream_order() {
        let roster = vec![player("R", "QB", 1.0)];
        let pool = vec![
            player("TieA", "QB", 9.0),
            player("TieB", "QB", 9.0),
            player("Top", "QB", 12.0),
        ];
        let recs = recommend_upgrades(&roster, &pool, false);
        let order: Vec<String> = recs.iter().map(|r| r.free_agent.name()).collect();
        assert_eq!(order, ["Top", "TieA", "TieB"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let roster = vec![player("A", "QB", 3.0), player("B", "WR", 8.0)];
        let pool = vec![player("C", "QB", 6.0), player("D", "WR", 10.0)];
        let first = names(&recommend_upgrades(&roster, &pool, true));
        let second = names(&recommend_upgrades(&roster, &pool, true));
        assert_eq!(first, second);
    }
}
