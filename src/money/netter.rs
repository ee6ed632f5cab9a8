use super::*;
use crate::Money;
use crate::PlayerId;
use crate::TOLERANCE;

/// Reduces net balances to a short list of pairwise payments.
///
/// Greedy largest-to-largest matching. Not guaranteed to find the fewest
/// transfers (that problem is NP-hard in general) but never needs more
/// than one fewer than the number of players with a nonzero balance.
///
/// # Algorithm
///
/// 1. Split players into creditors and debtors, ignoring dust
/// 2. Sort both descending by amount, keeping seating order among equals
/// 3. Pay `min(debt, credit)` from the front debtor to the front creditor
/// 4. Advance past whichever side is paid off, until either side runs out
pub struct Netter {
    creditors: Vec<(PlayerId, Money)>,
    debtors: Vec<(PlayerId, Money)>,
}

impl From<&Balance> for Netter {
    fn from(balance: &Balance) -> Self {
        let mut creditors = balance
            .iter()
            .filter(|(_, v)| *v > TOLERANCE)
            .map(|(k, v)| (k.clone(), v))
            .collect::<Vec<_>>();
        let mut debtors = balance
            .iter()
            .filter(|(_, v)| *v < -TOLERANCE)
            .map(|(k, v)| (k.clone(), -v))
            .collect::<Vec<_>>();
        creditors.sort_by(|a, b| b.1.total_cmp(&a.1));
        debtors.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { creditors, debtors }
    }
}

impl Netter {
    /// Matches debtors to creditors and returns the payments in order.
    pub fn settle(mut self) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        let mut d = 0;
        let mut c = 0;
        while d < self.debtors.len() && c < self.creditors.len() {
            let amount = Money::min(self.debtors[d].1, self.creditors[c].1);
            transfers.push(Transfer::from((
                self.debtors[d].0.as_str(),
                self.creditors[c].0.as_str(),
                amount,
            )));
            self.debtors[d].1 -= amount;
            self.creditors[c].1 -= amount;
            if self.debtors[d].1 <= TOLERANCE {
                d += 1;
            }
            if self.creditors[c].1 <= TOLERANCE {
                c += 1;
            }
        }
        log::debug!("netted into {} transfers", transfers.len());
        transfers
    }
}

/// What each player would still be owed after executing the transfers.
pub fn residual(balance: &Balance, transfers: &[Transfer]) -> Balance {
    let mut residual = balance.clone();
    for transfer in transfers {
        residual.add(transfer.payer(), transfer.amount());
        residual.add(transfer.payee(), -transfer.amount());
    }
    residual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn settle(balance: &Balance) -> Vec<Transfer> {
        Netter::from(balance).settle()
    }

    #[test]
    fn single_debtor_single_creditor() {
        let balance = Balance::from(vec![("a", 20.0), ("b", -20.0)]);
        let transfers = settle(&balance);
        assert!(transfers == vec![Transfer::from(("b", "a", 20.0))]);
    }

    #[test]
    fn largest_debtor_pays_largest_creditor_first() {
        let balance = Balance::from(vec![("a", 7.0), ("b", -2.0), ("c", -5.0)]);
        let transfers = settle(&balance);
        assert!(transfers.len() == 2);
        assert!(transfers[0] == Transfer::from(("c", "a", 5.0)));
        assert!(transfers[1] == Transfer::from(("b", "a", 2.0)));
    }

    #[test]
    fn partial_payments_carry_over() {
        let balance = Balance::from(vec![
            ("a", 30.0),
            ("b", 10.0),
            ("c", -25.0),
            ("d", -15.0),
        ]);
        let transfers = settle(&balance);
        assert!(transfers.len() == 3);
        assert!(transfers[0] == Transfer::from(("c", "a", 25.0)));
        assert!(transfers[1] == Transfer::from(("d", "a", 5.0)));
        assert!(transfers[2] == Transfer::from(("d", "b", 10.0)));
    }

    #[test]
    fn ties_follow_seating_order() {
        let balance = Balance::from(vec![("a", -5.0), ("b", 5.0), ("c", -5.0), ("d", 5.0)]);
        let transfers = settle(&balance);
        assert!(transfers[0] == Transfer::from(("a", "b", 5.0)));
        assert!(transfers[1] == Transfer::from(("c", "d", 5.0)));
    }

    #[test]
    fn dust_is_ignored() {
        let balance = Balance::from(vec![("a", 1e-9), ("b", -1e-9), ("c", 0.0)]);
        assert!(settle(&balance).is_empty());
        assert!(settle(&Balance::default()).is_empty());
    }

    #[test]
    fn replaying_transfers_settles_everyone() {
        for _ in 0..256 {
            let balance = Balance::random();
            let transfers = settle(&balance);
            assert!(residual(&balance, &transfers).settled());
            assert!(transfers.iter().all(|t| t.amount() > 0.0));
            assert!(transfers.len() < balance.len());
        }
    }

    #[test]
    fn deterministic() {
        let balance = Balance::random();
        assert!(settle(&balance) == settle(&balance));
    }
}
