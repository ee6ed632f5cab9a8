use super::*;
use crate::Money;
use crate::round::Ledger;
use crate::wager::KpsWager;

const NOTE: &str = "not computable: no closest-to-pin winners recorded";

/// Closest-to-the-pin, acknowledged but not settled.
///
/// Strokes say nothing about who was closest, so this passes through to
/// the payouts display with a note instead of a balance.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Unavailable {
    stake: Money,
    note: &'static str,
}

impl From<Money> for Unavailable {
    fn from(stake: Money) -> Self {
        Self { stake, note: NOTE }
    }
}

impl Unavailable {
    pub fn stake(&self) -> Money {
        self.stake
    }
    pub fn note(&self) -> &str {
        self.note
    }
}

impl Wager for KpsWager {
    fn play(&self, _: &Ledger) -> Option<Game> {
        self.stake().map(Unavailable::from).map(Game::Kps)
    }
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "kps        {:>8.2}        {}", self.stake, self.note)
    }
}
