/// House rule for skins still carrying after the eighteenth hole.
///
/// - `Forfeit`: nobody collects them
/// - `Last`: the most recent outright skin winner collects them
/// - `Split`: players who shared low on the final tied hole split them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carry {
    #[default]
    Forfeit,
    Last,
    Split,
}

impl TryFrom<&str> for Carry {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "forfeit" => Ok(Self::Forfeit),
            "last" => Ok(Self::Last),
            "split" => Ok(Self::Split),
            _ => Err(anyhow::anyhow!("unknown carry policy: {}", s)),
        }
    }
}

impl std::fmt::Display for Carry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Forfeit => write!(f, "forfeit"),
            Self::Last => write!(f, "last"),
            Self::Split => write!(f, "split"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policies() {
        assert!(Carry::try_from("forfeit").unwrap() == Carry::Forfeit);
        assert!(Carry::try_from(" Last ").unwrap() == Carry::Last);
        assert!(Carry::try_from("SPLIT").unwrap() == Carry::Split);
        assert!(Carry::try_from("double").is_err());
    }

    #[test]
    fn forfeit_by_default() {
        assert!(Carry::default() == Carry::Forfeit);
        assert!(serde_json::from_str::<Carry>("\"split\"").unwrap() == Carry::Split);
    }
}
