use super::*;
use crate::PlayerId;
use crate::Strokes;
use crate::money::Balance;
use crate::round::Ledger;

/// A configured game that can be played out over a round's strokes.
///
/// Returns `None` when the game is off or unstaked, in which case it
/// contributes neither a balance nor a detail entry.
pub trait Wager: Sync {
    fn play(&self, ledger: &Ledger) -> Option<Game>;
}

/// One game's result, tagged by game type for the payouts display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Game {
    Skins(Skins),
    Nassau(Nassau),
    PerStroke(PerStroke),
    Kps(Unavailable),
}

impl Game {
    /// This game's money movement, if it moves money at all.
    pub fn balances(&self) -> Option<&Balance> {
        match self {
            Self::Skins(game) => Some(game.balances()),
            Self::Nassau(game) => Some(game.balances()),
            Self::PerStroke(game) => Some(game.balances()),
            Self::Kps(_) => None,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skins(_) => "skins",
            Self::Nassau(_) => "nassau",
            Self::PerStroke(_) => "perStroke",
            Self::Kps(_) => "kps",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Skins(game) => write!(f, "{}", game),
            Self::Nassau(game) => write!(f, "{}", game),
            Self::PerStroke(game) => write!(f, "{}", game),
            Self::Kps(game) => write!(f, "{}", game),
        }
    }
}

/// A player's stroke count over some stretch of holes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Total {
    pub player: PlayerId,
    pub strokes: Strokes,
}

/// Per-player totals over a stretch of holes, in seating order.
pub(crate) fn totals<F>(ledger: &Ledger, sum: F) -> Vec<Total>
where
    F: Fn(&str) -> Strokes,
{
    ledger
        .players()
        .iter()
        .map(|p| Total {
            player: p.id().clone(),
            strokes: sum(p.id()),
        })
        .collect()
}

/// Players sharing the lowest total, in seating order, with that total.
pub(crate) fn leaders(totals: &[Total]) -> (Vec<PlayerId>, Strokes) {
    let low = totals.iter().map(|t| t.strokes).min().unwrap_or(0);
    let ids = totals
        .iter()
        .filter(|t| t.strokes == low)
        .map(|t| t.player.clone())
        .collect();
    (ids, low)
}
