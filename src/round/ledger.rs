use super::*;
use crate::HOLES;
use crate::Hole;
use crate::PlayerId;
use crate::Strokes;
use std::ops::RangeInclusive;

/// A player's eighteen holes. Zero marks a hole that was never recorded.
pub type Card = [Strokes; HOLES];

/// Dense stroke grid, one [`Card`] per player in seating order.
///
/// Whatever layout the round was stored in, it is read exactly once here.
/// Every lookup afterwards is an index, and nothing in here can fail:
/// unknown players, out-of-range holes, and garbage cells all read as the
/// unrecorded sentinel `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    players: Vec<Player>,
    cards: Vec<Card>,
}

impl From<&Round> for Ledger {
    fn from(round: &Round) -> Self {
        let players = round.players().to_vec();
        let mut cards = vec![[0; HOLES]; players.len()];
        for (hole, entry) in round.holes().entries() {
            if let Some(scores) = scores(entry) {
                for (i, player) in players.iter().enumerate() {
                    if let Some(n) = scores.get(player.id()).and_then(strokes) {
                        cards[i][hole - 1] = n;
                    }
                }
            }
        }
        Self { players, cards }
    }
}

impl From<(Vec<Player>, Vec<Card>)> for Ledger {
    fn from((players, mut cards): (Vec<Player>, Vec<Card>)) -> Self {
        cards.resize(players.len(), [0; HOLES]);
        Self { players, cards }
    }
}

impl Ledger {
    /// Players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    /// Seat index of a player id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }
    /// Card for the player at a seat index.
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }
    /// Strokes on a hole, or `0` if unrecorded.
    pub fn strokes(&self, hole: Hole, id: &str) -> Strokes {
        self.recorded(hole, id).unwrap_or(0)
    }
    /// Strokes on a hole, if recorded.
    pub fn recorded(&self, hole: Hole, id: &str) -> Option<Strokes> {
        let index = self.position(id)?;
        let slot = hole.checked_sub(1)?;
        self.cards[index].get(slot).copied().filter(|s| *s > 0)
    }
    /// Sum of recorded strokes over eighteen holes.
    pub fn total(&self, id: &str) -> Strokes {
        self.segment(crate::TOTAL, id)
    }
    /// Sum of recorded strokes over a range of holes, saturating at `Strokes::MAX`.
    pub fn segment(&self, holes: RangeInclusive<Hole>, id: &str) -> Strokes {
        holes
            .map(|hole| self.strokes(hole, id))
            .fold(0, Strokes::saturating_add)
    }
    /// Every player's strokes on a hole, in seating order.
    pub fn hole(&self, hole: Hole) -> Vec<Strokes> {
        self.cards
            .iter()
            .map(|card| card.get(hole.wrapping_sub(1)).copied().unwrap_or(0))
            .collect()
    }
    /// True if every player has a recorded score on the hole.
    pub fn complete(&self, hole: Hole) -> bool {
        self.hole(hole).iter().all(|s| *s > 0)
    }
    /// Unrecorded (hole, player) cells, hole-major.
    pub fn missing(&self) -> Vec<(Hole, &PlayerId)> {
        crate::TOTAL
            .flat_map(|hole| {
                self.players
                    .iter()
                    .zip(self.cards.iter())
                    .filter(move |(_, card)| card[hole - 1] == 0)
                    .map(move |(player, _)| (hole, player.id()))
            })
            .collect()
    }
}
