// Core data model: normalization, scoring, extraction, recommendations.
//
// Everything in this module is a pure function of its JSON inputs. The
// Fleaflicker API returns structurally different payloads per sport and
// schema version, so every accessor resolves fields through a documented
// fallback chain and degrades to a default instead of erroring.

pub mod extract;
pub mod player;
pub mod recommend;
pub mod score;

pub use extract::{
    free_agent_players, roster_players, scoreboard_rows, standings_rows, GameRow, StandingsRow,
};
pub use player::Player;
pub use recommend::{recommend_upgrades, Recommendation};
pub use score::score_value;
