use crate::PlayerId;

/// A golfer in the round.
///
/// Only the `id` matters for settlement. The `name` rides along for
/// display by whoever renders the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Player {
    id: PlayerId,
    #[serde(default)]
    name: String,
}

impl Player {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
    /// Round-unique identifier.
    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    /// Display name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Player {
    fn from(id: &str) -> Self {
        Self::new(id, id)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
