use super::*;
use crate::HOLES;
use crate::Hole;
use crate::MIN_PLAYERS;
use crate::Money;
use crate::PlayerId;
use crate::money::Balance;
use crate::round::Ledger;
use crate::wager::Carry;
use crate::wager::SkinsWager;

/// What happened on one contested hole.
///
/// `carry` is how many tied holes were riding on this one, so the pot
/// each loser owes is `stake * (1 + carry)`. A `None` winner means the
/// low score was shared and the pot carries to the next hole.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Skin {
    pub hole: Hole,
    pub winner: Option<PlayerId>,
    pub pot: Money,
    pub carry: usize,
}

/// Skins result for the round.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Skins {
    stake: Money,
    holes: Vec<Skin>,
    unclaimed: usize,
    carry: Carry,
    recipients: Vec<PlayerId>,
    balances: Balance,
}

impl Wager for SkinsWager {
    fn play(&self, ledger: &Ledger) -> Option<Game> {
        self.stake()
            .map(|stake| Skins::from((ledger, stake, self.carry())))
            .map(Game::Skins)
    }
}

impl From<(&Ledger, Money, Carry)> for Skins {
    fn from((ledger, stake, carry): (&Ledger, Money, Carry)) -> Self {
        let n = ledger.len();
        if n < MIN_PLAYERS || stake * (n - 1) as Money <= 0.0 {
            return Self {
                stake,
                carry,
                ..Self::default()
            };
        }
        let tally = (1..=HOLES).fold(Tally::from(ledger), |tally, hole| {
            tally.next(ledger, hole, stake)
        });
        tally.close(ledger, stake, carry)
    }
}

impl Skins {
    /// Stake per hole per losing player.
    pub fn stake(&self) -> Money {
        self.stake
    }
    /// Contested holes in order, ties included. Unrecorded holes are absent.
    pub fn holes(&self) -> &[Skin] {
        &self.holes
    }
    /// Holes still carrying after the eighteenth.
    pub fn unclaimed(&self) -> usize {
        self.unclaimed
    }
    /// Who collected the unclaimed carry, empty if it was forfeited.
    pub fn recipients(&self) -> &[PlayerId] {
        &self.recipients
    }
    pub fn balances(&self) -> &Balance {
        &self.balances
    }
    /// Number of holes won outright.
    pub fn won(&self) -> usize {
        self.holes.iter().filter(|s| s.winner.is_some()).count()
    }
}

impl std::fmt::Display for Skins {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "skins      {:>8.2}/hole  {} won  {} carried",
            self.stake,
            self.won(),
            self.unclaimed
        )?;
        if self.unclaimed > 0 {
            write!(f, " ({})", self.carry)?;
        }
        Ok(())
    }
}

/// Running state threaded through the holes.
struct Tally {
    carry: usize,
    last: Option<usize>,
    tied: Vec<usize>,
    holes: Vec<Skin>,
    balances: Balance,
}

impl From<&Ledger> for Tally {
    fn from(ledger: &Ledger) -> Self {
        Self {
            carry: 0,
            last: None,
            tied: vec![],
            holes: vec![],
            balances: Balance::zeroed(ledger.players()),
        }
    }
}

impl Tally {
    fn next(mut self, ledger: &Ledger, hole: Hole, stake: Money) -> Self {
        let strokes = ledger.hole(hole);
        if strokes.iter().any(|s| *s == 0) {
            log::debug!("skins hole {:>2} skipped, not fully recorded", hole);
            return self;
        }
        let n = ledger.len();
        let low = strokes.iter().copied().min().unwrap_or(0);
        let lows = (0..n).filter(|i| strokes[*i] == low).collect::<Vec<usize>>();
        let each = stake * (1 + self.carry) as Money;
        let pot = each * (n - 1) as Money;
        if lows.len() == 1 {
            let winner = lows[0];
            let id = ledger.players()[winner].id().clone();
            log::debug!("skins hole {:>2} won by {} for {:.2}", hole, id, pot);
            self.pay(ledger, &[winner], each);
            self.holes.push(Skin {
                hole,
                winner: Some(id),
                pot,
                carry: self.carry,
            });
            self.carry = 0;
            self.last = Some(winner);
        } else {
            log::debug!("skins hole {:>2} tied, carry {}", hole, self.carry + 1);
            self.holes.push(Skin {
                hole,
                winner: None,
                pot,
                carry: self.carry,
            });
            self.carry += 1;
            self.tied = lows;
        }
        self
    }

    /// Everyone outside `winners` pays `each`, winners split the pool.
    fn pay(&mut self, ledger: &Ledger, winners: &[usize], each: Money) {
        let losers = ledger.len() - winners.len();
        let share = each * losers as Money / winners.len() as Money;
        for (i, player) in ledger.players().iter().enumerate() {
            if winners.contains(&i) {
                self.balances.add(player.id(), share);
            } else {
                self.balances.add(player.id(), -each);
            }
        }
    }

    fn close(mut self, ledger: &Ledger, stake: Money, policy: Carry) -> Skins {
        let unclaimed = self.carry;
        let each = stake * unclaimed as Money;
        let recipients = match (unclaimed, policy) {
            (0, _) | (_, Carry::Forfeit) => vec![],
            (_, Carry::Last) => self.last.map(|w| vec![w]).unwrap_or_default(),
            (_, Carry::Split) if self.tied.len() < ledger.len() => self.tied.clone(),
            (_, Carry::Split) => vec![],
        };
        if !recipients.is_empty() {
            self.pay(ledger, &recipients, each);
        }
        if unclaimed > 0 {
            log::debug!("skins {} holes unclaimed, {}", unclaimed, policy);
        }
        Skins {
            stake,
            holes: self.holes,
            unclaimed,
            carry: policy,
            recipients: recipients
                .iter()
                .map(|i| ledger.players()[*i].id().clone())
                .collect(),
            balances: self.balances,
        }
    }
}
