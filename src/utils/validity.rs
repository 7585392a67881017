//! Validity window coercion.
//!
//! Clients send `validity` as whatever JSON they like: `30`, `"30"`,
//! `2.5`, or garbage. Anything numeric-like becomes whole minutes (truncated
//! toward zero); anything else falls back to the default window.

use serde_json::Value;

/// Validity applied when the client sends none, or nothing numeric.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Coerces a raw JSON `validity` into whole minutes.
///
/// Returns `None` when the value is absent, `null`, or not numeric-like, in
/// which case the caller applies [`DEFAULT_VALIDITY_MINUTES`]. Zero and
/// negative results are passed through unchanged.
pub fn coerce_minutes(raw: Option<&Value>) -> Option<i64> {
    match raw? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(finite_minutes)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(finite_minutes),
        _ => None,
    }
}

fn finite_minutes(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}
