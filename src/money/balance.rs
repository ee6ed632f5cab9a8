use crate::Arbitrary;
use crate::Money;
use crate::PlayerId;
use crate::round::Player;

/// Signed amounts per player, in insertion order.
///
/// Positive means the player is owed money, negative means they owe.
/// Kept as an ordered list rather than a hash map so that iteration,
/// serialization, and therefore settlement are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Balance(Vec<(PlayerId, Money)>);

impl Balance {
    /// Every player present at zero, in seating order.
    pub fn zeroed(players: &[Player]) -> Self {
        Self(players.iter().map(|p| (p.id().clone(), 0.0)).collect())
    }
    /// Sums each game's contribution onto the seating order.
    /// Players a game didn't mention contribute nothing.
    pub fn aggregate<'a, I>(players: &[Player], games: I) -> Self
    where
        I: IntoIterator<Item = &'a Balance>,
    {
        games.into_iter().fold(Self::zeroed(players), |mut total, game| {
            if !game.conserved() {
                log::warn!("game balance does not net to zero ({:+e})", game.sum());
            }
            debug_assert!(game.conserved(), "unbalanced game contribution");
            total.merge(game);
            total
        })
    }
    /// Adds another balance into this one.
    pub fn merge(&mut self, other: &Balance) {
        for (id, amount) in other.iter() {
            self.add(id, amount);
        }
    }
    /// Credits (or debits, if negative) a player.
    pub fn add(&mut self, id: &str, amount: Money) {
        match self.0.iter_mut().find(|(k, _)| k == id) {
            Some((_, v)) => *v += amount,
            None => self.0.push((id.to_string(), amount)),
        }
    }
    /// A player's amount, zero if absent.
    pub fn get(&self, id: &str) -> Money {
        self.0
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, Money)> + '_ {
        self.0.iter().map(|(k, v)| (k, *v))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Net across all players.
    pub fn sum(&self) -> Money {
        self.0.iter().map(|(_, v)| v).sum()
    }
    /// Money is neither created nor destroyed.
    pub fn conserved(&self) -> bool {
        crate::near(self.sum(), 0.0)
    }
    /// True if every player is within tolerance of zero.
    pub fn settled(&self) -> bool {
        self.0.iter().all(|(_, v)| crate::near(*v, 0.0))
    }
}

impl FromIterator<(PlayerId, Money)> for Balance {
    fn from_iter<T: IntoIterator<Item = (PlayerId, Money)>>(iter: T) -> Self {
        let mut balance = Self::default();
        for (id, amount) in iter {
            balance.add(&id, amount);
        }
        balance
    }
}

impl From<Vec<(&str, Money)>> for Balance {
    fn from(entries: Vec<(&str, Money)>) -> Self {
        entries
            .into_iter()
            .map(|(id, amount)| (id.to_string(), amount))
            .collect()
    }
}

impl serde::Serialize for Balance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (id, amount) in self.iter() {
            writeln!(f, "{:<16}{:>+10.2}", id, amount)?;
        }
        Ok(())
    }
}

/// Random zero-sum balance over 2 to 8 players, in whole cents.
impl Arbitrary for Balance {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=8);
        let mut balance = (1..n)
            .map(|i| (format!("p{}", i), rng.random_range(-5000..=5000) as Money / 100.0))
            .collect::<Balance>();
        balance.add("p0", -balance.sum());
        balance
    }
}
