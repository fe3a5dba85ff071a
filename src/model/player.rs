// Player normalization.
//
// A `Player` is an immutable view over one raw JSON record. The same logical
// player arrives in two shapes: roster slots wrap the interesting fields in
// a "pro player" sub-object, free-agent listings put some of them at the top
// level, and key spellings drift between snake_case and camelCase across
// sports and API versions. Each accessor documents its exact resolution
// order because that order encodes observed upstream schema drift.

use serde_json::Value;

use crate::model::score::score_value;

/// Weight on the projected points in the blended score.
const PROJECTION_WEIGHT: f64 = 0.7;
/// Weight on the recent-performance average in the blended score.
const LAST_THREE_WEIGHT: f64 = 0.3;

/// Python-style truthiness, used by the fallback chains: the upstream feed
/// distinguishes "present but empty" from "present" inconsistently, so empty
/// strings/objects/arrays, null, false, and zero all fall through to the
/// next candidate key.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(m) => !m.is_empty(),
    }
}

/// First truthy value among the given keys, in order.
fn first_truthy<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| record.get(k))
        .find(|v| truthy(v))
}

/// First non-empty string among the given keys, in order. Non-string values
/// are treated as absent.
fn first_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| record.get(k))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

/// Uniform view over one raw player record.
///
/// Construction never fails and accessors never panic: a missing or
/// unexpectedly shaped field resolves to the documented default. The
/// underlying record is never mutated, so repeated calls return identical
/// values.
#[derive(Debug, Clone)]
pub struct Player {
    data: Value,
}

impl Player {
    pub fn new(data: Value) -> Self {
        Player { data }
    }

    /// The nested pro-player sub-object, under either key spelling.
    fn pro(&self) -> Option<&Value> {
        first_truthy(&self.data, &["pro_player", "proPlayer"])
    }

    /// Display name.
    ///
    /// Resolution order: `name_full`/`nameFull`/`name` on the pro sub-object,
    /// then `name_full`/`nameFull`/`displayName`/`name` on the record itself,
    /// then the `"Unknown"` sentinel.
    pub fn name(&self) -> String {
        self.pro()
            .and_then(|pro| first_str(pro, &["name_full", "nameFull", "name"]))
            .or_else(|| first_str(&self.data, &["name_full", "nameFull", "displayName", "name"]))
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Position string, empty when absent.
    pub fn position(&self) -> String {
        self.pro()
            .and_then(|pro| first_str(pro, &["position"]))
            .or_else(|| first_str(&self.data, &["position"]))
            .unwrap_or("")
            .to_string()
    }

    /// Pro-team abbreviation, empty when absent. Only the pro sub-object is
    /// consulted; the feed has been seen using five different key spellings.
    pub fn team(&self) -> String {
        self.pro()
            .and_then(|pro| {
                first_str(
                    pro,
                    &[
                        "pro_team_abbreviation",
                        "proTeamAbbreviation",
                        "pro_team",
                        "team_abbreviation",
                        "teamAbbreviation",
                    ],
                )
            })
            .unwrap_or("")
            .to_string()
    }

    /// Projected points.
    ///
    /// Reads the first truthy of `projections`/`projection`. A non-null
    /// `value` key wins; otherwise the first truthy of the nested `weekly`/
    /// `season` sub-objects is consulted for its own `value` key. Anything
    /// unresolved is 0.0. Negative projections pass through unclamped.
    pub fn projection(&self) -> f64 {
        let Some(projections) = first_truthy(&self.data, &["projections", "projection"]) else {
            return 0.0;
        };
        if let Some(direct) = projections.get("value").filter(|v| !v.is_null()) {
            return score_value(direct);
        }
        match first_truthy(projections, &["weekly", "season"]) {
            Some(nested @ Value::Object(_)) => {
                nested.get("value").map(score_value).unwrap_or(0.0)
            }
            Some(scalar) => score_value(scalar),
            None => 0.0,
        }
    }

    /// Average of the most recent scores.
    ///
    /// `last_x_points` is assumed chronological oldest-to-newest. With three
    /// or more entries the final three are averaged; with one or two only
    /// the last entry's value is used (no averaging); with none, 0.0.
    pub fn last_three(&self) -> f64 {
        let Some(entries) = self.data.get("last_x_points").and_then(Value::as_array) else {
            return 0.0;
        };
        let values: Vec<f64> = entries
            .iter()
            .map(|entry| entry.get("value").map(score_value).unwrap_or(0.0))
            .collect();
        if values.len() >= 3 {
            values[values.len() - 3..].iter().sum::<f64>() / 3.0
        } else if let Some(last) = values.last() {
            *last
        } else {
            0.0
        }
    }

    /// Blended comparison score: fixed 70/30 mix of projection and recent
    /// form. Pure function of the two accessors above.
    pub fn score(&self) -> f64 {
        self.projection() * PROJECTION_WEIGHT + self.last_three() * LAST_THREE_WEIGHT
    }
}
