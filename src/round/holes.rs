use crate::HOLES;
use crate::Hole;
use serde_json::Map;
use serde_json::Value;

/// The stored hole layouts a round record may use.
///
/// Rounds were saved either as an object keyed by hole number or as an
/// array of eighteen entries (index 0 is hole 1). Anything else carries
/// no strokes at all.
#[derive(Debug, Clone, Copy)]
pub enum Holes<'a> {
    Keyed(&'a Map<String, Value>),
    Listed(&'a [Value]),
    Blank,
}

impl<'a> From<&'a Value> for Holes<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Keyed(map),
            Value::Array(vec) => Self::Listed(vec),
            _ => Self::Blank,
        }
    }
}

impl<'a> Holes<'a> {
    /// Stored entries paired with their hole number, restricted to 1..=18.
    pub fn entries(&self) -> Vec<(Hole, &'a Value)> {
        match *self {
            Self::Keyed(map) => map
                .iter()
                .filter_map(|(k, v)| k.trim().parse::<Hole>().ok().map(|h| (h, v)))
                .filter(|(h, _)| (1..=HOLES).contains(h))
                .collect(),
            Self::Listed(vec) => vec
                .iter()
                .take(HOLES)
                .enumerate()
                .map(|(i, v)| (i + 1, v))
                .collect(),
            Self::Blank => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyed_by_hole_number() {
        let value = json!({ "1": {}, "18": {}, "19": {}, "0": {}, "front": {} });
        let holes = Holes::from(&value);
        let mut numbers = holes.entries().iter().map(|(h, _)| *h).collect::<Vec<_>>();
        numbers.sort();
        assert!(matches!(holes, Holes::Keyed(_)));
        assert!(numbers == vec![1, 18]);
    }

    #[test]
    fn listed_from_hole_one() {
        let value = json!((0..20).map(|i| json!({ "i": i })).collect::<Vec<_>>());
        let holes = Holes::from(&value);
        let entries = holes.entries();
        assert!(matches!(holes, Holes::Listed(_)));
        assert!(entries.len() == HOLES);
        assert!(entries[0].0 == 1);
        assert!(entries[0].1 == &json!({ "i": 0 }));
        assert!(entries[17].0 == 18);
    }

    #[test]
    fn anything_else_is_blank() {
        assert!(Holes::from(&json!(null)).entries().is_empty());
        assert!(Holes::from(&json!("holes")).entries().is_empty());
        assert!(Holes::from(&json!(18)).entries().is_empty());
    }
}
