use crate::Money;
use crate::PlayerId;

/// One payment that moves money from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transfer {
    from: PlayerId,
    to: PlayerId,
    amount: Money,
}

impl Transfer {
    /// Who pays.
    pub fn payer(&self) -> &PlayerId {
        &self.from
    }
    /// Who gets paid.
    pub fn payee(&self) -> &PlayerId {
        &self.to
    }
    /// Always positive.
    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl From<(&str, &str, Money)> for Transfer {
    fn from((from, to, amount): (&str, &str, Money)) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16} -> {:<16}{:>10.2}", self.from, self.to, self.amount)
    }
}
