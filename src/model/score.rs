// Score value coercion.
//
// Some endpoints return a bare scalar score, others wrap it in an object
// (`{"value": 12.5}`), occasionally more than one level deep. This helper
// accepts either and degrades everything else to 0.0.

use serde_json::Value;

/// Coerce a score blob into a plain `f64`.
///
/// Numbers pass through; objects are followed through their `value` key
/// recursively; any other shape (string, array, bool, null, missing `value`)
/// yields 0.0. Recursion terminates because each step strips one object
/// layer.
pub fn score_value(blob: &Value) -> f64 {
    match blob {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Object(map) => map.get("value").map(score_value).unwrap_or(0.0),
        _ => 0.0,
    }
}
