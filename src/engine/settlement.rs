use crate::games::Game;
use crate::money::Balance;
use crate::money::Transfer;
use crate::money::residual;

/// Everything the payouts display needs about one round.
///
/// Amounts are raw numbers and players are ids. Formatting currency
/// and names is the display's job.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Settlement {
    balances: Balance,
    transfers: Vec<Transfer>,
    #[serde(rename = "byGame")]
    games: Vec<Game>,
}

impl From<(Balance, Vec<Transfer>, Vec<Game>)> for Settlement {
    fn from((balances, transfers, games): (Balance, Vec<Transfer>, Vec<Game>)) -> Self {
        Self {
            balances,
            transfers,
            games,
        }
    }
}

impl Settlement {
    /// Net balance per player across every game.
    pub fn balances(&self) -> &Balance {
        &self.balances
    }
    /// Payments that square everyone up.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
    /// Per-game detail in skins, nassau, per-stroke, kps order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Checks the arithmetic end to end.
    ///
    /// Each game must net to zero, the net balances must be the sum of
    /// the games, and the transfers must leave nobody owed anything.
    pub fn audit(&self) -> anyhow::Result<()> {
        for game in self.games.iter() {
            if let Some(balances) = game.balances() {
                if !balances.conserved() {
                    anyhow::bail!("{} nets to {:+e}, not zero", game.name(), balances.sum());
                }
            }
        }
        let mut expected = Balance::default();
        for balances in self.games.iter().filter_map(Game::balances) {
            expected.merge(balances);
        }
        for (id, amount) in self.balances.iter() {
            if !crate::near(amount, expected.get(id)) {
                anyhow::bail!("{} nets {:+.6} but games sum to {:+.6}", id, amount, expected.get(id));
            }
        }
        for (id, amount) in residual(&self.balances, &self.transfers).iter() {
            if !crate::near(amount, 0.0) {
                anyhow::bail!("{} still owed {:+.6} after transfers", id, amount);
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for game in self.games.iter() {
            writeln!(f, "{}", game)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.balances)?;
        writeln!(f)?;
        for transfer in self.transfers.iter() {
            writeln!(f, "{}", transfer)?;
        }
        Ok(())
    }
}
