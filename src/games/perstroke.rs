use super::*;
use crate::MIN_PLAYERS;
use crate::Money;
use crate::PlayerId;
use crate::Strokes;
use crate::TOTAL;
use crate::money::Balance;
use crate::round::Ledger;
use crate::wager::StrokeWager;

/// Per-stroke result: everyone pays the leader for each stroke behind.
///
/// Co-leaders split whatever each trailing player owes. Totals only count
/// recorded holes, so a player with holes missing looks better than they
/// played. Rounds are expected to be complete before payouts.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerStroke {
    stake: Money,
    leaders: Vec<PlayerId>,
    leader_total: Strokes,
    totals: Vec<Total>,
    balances: Balance,
}

impl Wager for StrokeWager {
    fn play(&self, ledger: &Ledger) -> Option<Game> {
        self.stake()
            .map(|stake| PerStroke::from((ledger, stake)))
            .map(Game::PerStroke)
    }
}

impl From<(&Ledger, Money)> for PerStroke {
    fn from((ledger, stake): (&Ledger, Money)) -> Self {
        if ledger.len() < MIN_PLAYERS || stake <= 0.0 {
            return Self {
                stake,
                ..Self::default()
            };
        }
        let totals = totals(ledger, |id| ledger.segment(TOTAL, id));
        let (leaders, leader_total) = leaders(&totals);
        let mut balances = Balance::zeroed(ledger.players());
        for total in totals.iter().filter(|t| t.strokes > leader_total) {
            let owed = (total.strokes - leader_total) as Money * stake;
            let share = owed / leaders.len() as Money;
            balances.add(&total.player, -owed);
            for leader in leaders.iter() {
                balances.add(leader, share);
            }
        }
        log::debug!(
            "per-stroke leader {} at {} strokes",
            leaders.join(","),
            leader_total
        );
        Self {
            stake,
            leaders,
            leader_total,
            totals,
            balances,
        }
    }
}

impl PerStroke {
    pub fn stake(&self) -> Money {
        self.stake
    }
    /// Players sharing the low eighteen-hole total.
    pub fn leaders(&self) -> &[PlayerId] {
        &self.leaders
    }
    pub fn leader_total(&self) -> Strokes {
        self.leader_total
    }
    pub fn totals(&self) -> &[Total] {
        &self.totals
    }
    pub fn balances(&self) -> &Balance {
        &self.balances
    }
}

impl std::fmt::Display for PerStroke {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "per-stroke {:>8.2}/stroke  led by {} at {}",
            self.stake,
            self.leaders.join("/"),
            self.leader_total
        )
    }
}
