use super::*;
use crate::BACK;
use crate::FRONT;
use crate::Hole;
use crate::MIN_PLAYERS;
use crate::Money;
use crate::PlayerId;
use crate::TOTAL;
use crate::money::Balance;
use crate::round::Ledger;
use crate::wager::NassauWager;
use std::ops::RangeInclusive;

/// One wagered stretch of the round and how its pot was split.
///
/// Every non-winner pays `stake`. Co-winners divide what was paid
/// evenly, so `pot = stake * losers` and `share = pot / winners`.
/// `pot` is what the losers actually paid, so an all-way tie reports
/// a zero pot and a zero share.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Segment {
    pub label: &'static str,
    pub holes: [Hole; 2],
    pub stake: Money,
    pub totals: Vec<Total>,
    pub winners: Vec<PlayerId>,
    pub pot: Money,
    pub share: Money,
}

impl Segment {
    fn play(
        ledger: &Ledger,
        label: &'static str,
        holes: RangeInclusive<Hole>,
        stake: Money,
        balances: &mut Balance,
    ) -> Self {
        let totals = totals(ledger, |id| ledger.segment(holes.clone(), id));
        let (winners, low) = leaders(&totals);
        let losers = ledger.len() - winners.len();
        let pot = stake * losers as Money;
        let share = pot / winners.len() as Money;
        for total in totals.iter() {
            if winners.contains(&total.player) {
                balances.add(&total.player, share);
            } else {
                balances.add(&total.player, -stake);
            }
        }
        log::debug!(
            "nassau {:<6} low {:>3} by {} for {:.2}",
            label,
            low,
            winners.join(","),
            pot
        );
        Self {
            label,
            holes: [*holes.start(), *holes.end()],
            stake,
            totals,
            winners,
            pot,
            share,
        }
    }
}

/// Nassau result: whichever of front, back, and total were wagered.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Nassau {
    segments: Vec<Segment>,
    balances: Balance,
}

impl Wager for NassauWager {
    fn play(&self, ledger: &Ledger) -> Option<Game> {
        Some(self)
            .filter(|w| w.active())
            .map(|w| Nassau::from((ledger, w)))
            .map(Game::Nassau)
    }
}

impl From<(&Ledger, &NassauWager)> for Nassau {
    fn from((ledger, wager): (&Ledger, &NassauWager)) -> Self {
        if ledger.len() < MIN_PLAYERS {
            return Self::default();
        }
        let mut balances = Balance::zeroed(ledger.players());
        let segments = [
            ("front", FRONT, wager.front()),
            ("back", BACK, wager.back()),
            ("total", TOTAL, wager.total()),
        ]
        .into_iter()
        .filter_map(|(label, holes, stake)| stake.map(|s| (label, holes, s)))
        .map(|(label, holes, stake)| Segment::play(ledger, label, holes, stake, &mut balances))
        .collect();
        Self { segments, balances }
    }
}

impl Nassau {
    /// Wagered segments in front, back, total order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn balances(&self) -> &Balance {
        &self.balances
    }
}

impl std::fmt::Display for Nassau {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "nassau    ")?;
        for segment in self.segments.iter() {
            write!(
                f,
                "  {} {:.2} to {}",
                segment.label,
                segment.stake,
                segment.winners.join("/")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::HOLES;
    use crate::Strokes;
    use crate::round::Player;
    use crate::round::Round;

    fn ledger(cards: Vec<[Strokes; HOLES]>) -> Ledger {
        let players = (0..cards.len())
            .map(|i| Player::from(format!("p{}", i).as_str()))
            .collect::<Vec<Player>>();
        Ledger::from((players, cards))
    }

    /// Card with its own front and back nine scores per hole.
    fn card(front: Strokes, back: Strokes) -> [Strokes; HOLES] {
        std::array::from_fn(|i| if i < 9 { front } else { back })
    }

    #[test]
    fn outright_winner_collects_from_each_loser() {
        let ledger = ledger(vec![card(4, 5), card(5, 4), card(5, 5)]);
        let nassau = Nassau::from((&ledger, &NassauWager::from((10.0, 10.0, 20.0))));
        let segments = nassau.segments();
        assert!(segments.len() == 3);
        assert!(segments[0].winners == vec!["p0".to_string()]);
        assert!(segments[0].pot == 20.0);
        assert!(segments[1].winners == vec!["p1".to_string()]);
        assert!(segments[2].winners == vec!["p0".to_string(), "p1".to_string()]);
        assert!(segments[2].pot == 20.0);
        assert!(segments[2].share == 10.0);
        assert!(nassau.balances().get("p0") == 20.0 - 10.0 + 10.0);
        assert!(nassau.balances().get("p1") == -10.0 + 20.0 + 10.0);
        assert!(nassau.balances().get("p2") == -10.0 - 10.0 - 20.0);
        assert!(nassau.balances().conserved());
    }

    #[test]
    fn all_way_tie_nets_to_zero() {
        let ledger = ledger(vec![card(4, 4), card(4, 4)]);
        let nassau = Nassau::from((&ledger, &NassauWager::from((10.0, 0.0, 0.0))));
        assert!(nassau.segments().len() == 1);
        assert!(nassau.segments()[0].winners.len() == 2);
        assert!(nassau.segments()[0].pot == 0.0);
        assert!(nassau.segments()[0].share == 0.0);
        assert!(nassau.balances().settled());
    }

    #[test]
    fn unwagered_segments_are_omitted() {
        let ledger = ledger(vec![card(4, 5), card(5, 4)]);
        let nassau = Nassau::from((&ledger, &NassauWager::from((0.0, 5.0, 0.0))));
        assert!(nassau.segments().len() == 1);
        assert!(nassau.segments()[0].label == "back");
        assert!(nassau.segments()[0].holes == [10, 18]);
        assert!(nassau.balances().get("p1") == 5.0);
    }

    #[test]
    fn wager_without_stakes_does_not_play() {
        let ledger = ledger(vec![card(4, 5), card(5, 4)]);
        assert!(NassauWager::from((0.0, 0.0, 0.0)).play(&ledger).is_none());
        assert!(NassauWager::default().play(&ledger).is_none());
    }

    #[test]
    fn lone_player_moves_nothing() {
        let ledger = ledger(vec![card(4, 4)]);
        let nassau = Nassau::from((&ledger, &NassauWager::from((1.0, 1.0, 1.0))));
        assert!(nassau.segments().is_empty());
        assert!(nassau.balances().is_empty());
    }

    #[test]
    fn conserved_for_random_rounds() {
        for _ in 0..128 {
            let ledger = Round::random().ledger();
            let nassau = Nassau::from((&ledger, &NassauWager::from((5.0, 5.0, 10.0))));
            assert!(nassau.balances().conserved());
        }
    }
}
