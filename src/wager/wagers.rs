use super::*;
use crate::Money;

/// A stake only counts if it is a real, positive amount.
fn positive(amount: Money) -> Option<Money> {
    Some(amount).filter(|a| a.is_finite()).filter(|a| *a > 0.0)
}

/// Per-hole skins, `amount` from each loser to the outright low score.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkinsWager {
    pub enabled: bool,
    pub amount: Money,
    pub carry: Carry,
}

impl SkinsWager {
    /// Stake per hole per losing player, if the game is on.
    pub fn stake(&self) -> Option<Money> {
        positive(self.amount).filter(|_| self.enabled)
    }
    pub fn carry(&self) -> Carry {
        self.carry
    }
}

impl From<Money> for SkinsWager {
    fn from(amount: Money) -> Self {
        Self {
            enabled: true,
            amount,
            carry: Carry::default(),
        }
    }
}

/// Front nine, back nine, and overall, each with its own stake.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NassauWager {
    pub enabled: bool,
    pub front: Money,
    pub back: Money,
    pub total: Money,
}

impl NassauWager {
    pub fn front(&self) -> Option<Money> {
        positive(self.front).filter(|_| self.enabled)
    }
    pub fn back(&self) -> Option<Money> {
        positive(self.back).filter(|_| self.enabled)
    }
    pub fn total(&self) -> Option<Money> {
        positive(self.total).filter(|_| self.enabled)
    }
    /// True if at least one segment is wagered.
    pub fn active(&self) -> bool {
        self.front().or(self.back()).or(self.total()).is_some()
    }
}

impl From<(Money, Money, Money)> for NassauWager {
    fn from((front, back, total): (Money, Money, Money)) -> Self {
        Self {
            enabled: true,
            front,
            back,
            total,
        }
    }
}

/// Dollars per stroke behind the leader.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeWager {
    pub enabled: bool,
    pub amount: Money,
}

impl StrokeWager {
    pub fn stake(&self) -> Option<Money> {
        positive(self.amount).filter(|_| self.enabled)
    }
}

impl From<Money> for StrokeWager {
    fn from(amount: Money) -> Self {
        Self {
            enabled: true,
            amount,
        }
    }
}

/// Closest-to-the-pin. Configurable, but never computable from strokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KpsWager {
    pub enabled: bool,
    pub amount: Money,
}

impl KpsWager {
    pub fn stake(&self) -> Option<Money> {
        positive(self.amount).filter(|_| self.enabled)
    }
}

impl From<Money> for KpsWager {
    fn from(amount: Money) -> Self {
        Self {
            enabled: true,
            amount,
        }
    }
}

/// Everything the group is playing for in one round.
///
/// Each game is optional and independently toggled. A game that is absent,
/// disabled, or staked at zero is skipped, never defaulted on.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wagers {
    pub skins: Option<SkinsWager>,
    pub nassau: Option<NassauWager>,
    pub per_stroke: Option<StrokeWager>,
    pub kps: Option<KpsWager>,
}

impl Wagers {
    pub fn with_skins(mut self, skins: SkinsWager) -> Self {
        self.skins = Some(skins);
        self
    }
    pub fn with_nassau(mut self, nassau: NassauWager) -> Self {
        self.nassau = Some(nassau);
        self
    }
    pub fn with_per_stroke(mut self, per_stroke: StrokeWager) -> Self {
        self.per_stroke = Some(per_stroke);
        self
    }
    pub fn with_kps(mut self, kps: KpsWager) -> Self {
        self.kps = Some(kps);
        self
    }
    /// Overrides the skins carry rule, if skins are configured.
    pub fn with_carry(mut self, carry: Carry) -> Self {
        if let Some(ref mut skins) = self.skins {
            skins.carry = carry;
        }
        self
    }
    /// True if any game would produce a result.
    pub fn active(&self) -> bool {
        self.skins.and_then(|w| w.stake()).is_some()
            || self.nassau.map_or(false, |w| w.active())
            || self.per_stroke.and_then(|w| w.stake()).is_some()
            || self.kps.and_then(|w| w.stake()).is_some()
    }
}

impl TryFrom<&str> for Wagers {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(s)?)
    }
}
