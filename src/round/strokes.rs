use crate::Strokes;
use serde_json::Map;
use serde_json::Value;

/// Parses one stored stroke cell.
///
/// Accepts positive integers stored as JSON numbers, as integral floats,
/// as numeric strings, or wrapped in an object under `strokes`. Everything
/// else (missing, zero, negative, blank, fractional, garbage) is unrecorded.
pub fn strokes(value: &Value) -> Option<Strokes> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .filter(|f| f.fract() == 0.0)
                    .filter(|f| *f >= 1.0 && *f <= Strokes::MAX as f64)
                    .map(|f| f as u64)
            })
            .and_then(|n| Strokes::try_from(n).ok())
            .filter(|n| *n > 0),
        Value::String(s) => s.trim().parse::<Strokes>().ok().filter(|n| *n > 0),
        Value::Object(o) => o.get("strokes").and_then(strokes),
        _ => None,
    }
}

/// Finds the per-player mapping inside one stored hole entry.
///
/// Looks for a `scores` object, then a `strokes` object, and otherwise
/// treats the entry itself as keyed by player id.
pub fn scores(entry: &Value) -> Option<&Map<String, Value>> {
    let object = entry.as_object()?;
    match (object.get("scores"), object.get("strokes")) {
        (Some(Value::Object(scores)), _) => Some(scores),
        (_, Some(Value::Object(strokes))) => Some(strokes),
        _ => Some(object),
    }
}
