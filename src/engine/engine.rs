use super::*;
use crate::games::Game;
use crate::games::Wager;
use crate::money::Balance;
use crate::money::Netter;
use crate::round::Ledger;
use crate::round::Round;
use crate::wager::Wagers;

/// Plays a round's configured games and nets the money.
///
/// Stateless between calls: the same round and wagers always produce
/// the same [`Settlement`], down to transfer order.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    wagers: Wagers,
}

impl From<Wagers> for Engine {
    fn from(wagers: Wagers) -> Self {
        Self { wagers }
    }
}

impl Engine {
    pub fn wagers(&self) -> &Wagers {
        &self.wagers
    }

    /// Settles a round under this engine's wagers.
    pub fn settle(&self, round: &Round) -> Settlement {
        if !self.wagers.active() {
            log::info!("no active wagers, nothing to settle");
            return Settlement::default();
        }
        let ledger = Ledger::from(round);
        let games = self.play(&ledger);
        let balances = Balance::aggregate(ledger.players(), games.iter().filter_map(Game::balances));
        let transfers = Netter::from(&balances).settle();
        log::info!(
            "settled {} games among {} players with {} transfers",
            games.len(),
            ledger.len(),
            transfers.len()
        );
        Settlement::from((balances, transfers, games))
    }

    /// Enabled calculators in the fixed reporting order.
    fn calculators(&self) -> Vec<&dyn Wager> {
        let mut calculators = Vec::<&dyn Wager>::new();
        if let Some(ref skins) = self.wagers.skins {
            calculators.push(skins);
        }
        if let Some(ref nassau) = self.wagers.nassau {
            calculators.push(nassau);
        }
        if let Some(ref per_stroke) = self.wagers.per_stroke {
            calculators.push(per_stroke);
        }
        if let Some(ref kps) = self.wagers.kps {
            calculators.push(kps);
        }
        calculators
    }

    #[cfg(feature = "parallel")]
    fn play(&self, ledger: &Ledger) -> Vec<Game> {
        use rayon::prelude::*;
        self.calculators()
            .into_par_iter()
            .filter_map(|calculator| calculator.play(ledger))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn play(&self, ledger: &Ledger) -> Vec<Game> {
        self.calculators()
            .into_iter()
            .filter_map(|calculator| calculator.play(ledger))
            .collect()
    }
}

/// Settles a round, treating a missing configuration as no wagers at all.
pub fn settle(round: &Round, wagers: Option<&Wagers>) -> Settlement {
    match wagers {
        Some(wagers) => Engine::from(wagers.clone()).settle(round),
        None => Settlement::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::HOLES;
    use crate::Strokes;
    use crate::money::residual;
    use crate::round::Player;
    use crate::wager::Carry;
    use crate::wager::KpsWager;
    use crate::wager::NassauWager;
    use crate::wager::SkinsWager;
    use crate::wager::StrokeWager;
    use serde_json::json;

    fn everything() -> Wagers {
        Wagers::default()
            .with_skins(SkinsWager::from(5.0))
            .with_nassau(NassauWager::from((10.0, 10.0, 20.0)))
            .with_per_stroke(StrokeWager::from(1.0))
            .with_kps(KpsWager::from(2.0))
    }

    /// Three players, stored in the keyed layout, with per-hole strokes.
    fn round(cards: [[Strokes; HOLES]; 3]) -> Round {
        let players = vec![
            Player::new("ann", "Ann"),
            Player::new("bo", "Bo"),
            Player::new("cy", "Cy"),
        ];
        let holes = (0..HOLES)
            .map(|h| {
                let scores = players
                    .iter()
                    .zip(cards.iter())
                    .map(|(p, card)| (p.id().clone(), json!({ "strokes": card[h] })))
                    .collect::<serde_json::Map<_, _>>();
                ((h + 1).to_string(), serde_json::Value::Object(scores))
            })
            .collect::<serde_json::Map<_, _>>();
        Round::new(players, serde_json::Value::Object(holes))
    }

    #[test]
    fn missing_configuration_short_circuits() {
        let round = Round::random();
        assert!(settle(&round, None) == Settlement::default());
        assert!(settle(&round, Some(&Wagers::default())) == Settlement::default());
        assert!(Engine::default().settle(&round).games().is_empty());
    }

    #[test]
    fn games_report_in_fixed_order() {
        let settlement = Engine::from(everything()).settle(&Round::random());
        let names = settlement.games().iter().map(Game::name).collect::<Vec<_>>();
        assert!(names == vec!["skins", "nassau", "perStroke", "kps"]);
    }

    #[test]
    fn disabled_games_are_skipped() {
        let wagers = Wagers::default()
            .with_skins(SkinsWager {
                enabled: false,
                ..SkinsWager::from(5.0)
            })
            .with_per_stroke(StrokeWager::from(1.0));
        let settlement = Engine::from(wagers).settle(&Round::random());
        assert!(settlement.games().len() == 1);
        assert!(settlement.games()[0].name() == "perStroke");
    }

    #[test]
    fn kps_alone_moves_no_money() {
        let wagers = Wagers::default().with_kps(KpsWager::from(5.0));
        let settlement = Engine::from(wagers).settle(&Round::random());
        assert!(settlement.games().len() == 1);
        assert!(settlement.transfers().is_empty());
        assert!(settlement.balances().settled());
    }

    #[test]
    fn full_round() {
        let mut ann = [4; HOLES];
        let bo = [4; HOLES];
        let mut cy = [5; HOLES];
        ann[0] = 3;
        cy[17] = 3;
        let round = round([ann, bo, cy]);
        let wagers = Wagers::default()
            .with_skins(SkinsWager::from(1.0))
            .with_per_stroke(StrokeWager::from(1.0));
        let settlement = Engine::from(wagers).settle(&round);
        // skins: ann wins hole 1, ann and bo tie 2-17, cy wins 18
        // with 16 carried, collecting 17 from each.
        // per-stroke: ann 71, bo 72, cy 88.
        assert!(settlement.balances().get("ann") == (2.0 - 17.0) + (1.0 + 17.0));
        assert!(settlement.balances().get("bo") == (-1.0 - 17.0) - 1.0);
        assert!(settlement.balances().get("cy") == (-1.0 + 34.0) - 17.0);
        assert!(settlement.audit().is_ok());
    }

    #[test]
    fn audit_holds_for_random_rounds() {
        for _ in 0..64 {
            let round = Round::random();
            for carry in [Carry::Forfeit, Carry::Last, Carry::Split] {
                let settlement = Engine::from(everything().with_carry(carry)).settle(&round);
                assert!(settlement.audit().is_ok());
                assert!(residual(settlement.balances(), settlement.transfers()).settled());
                for game in settlement.games() {
                    assert!(game.balances().map_or(true, Balance::conserved));
                }
            }
        }
    }

    #[test]
    fn both_stored_layouts_settle_the_same() {
        let keyed = Round::try_from(include_str!("../../demos/round.json")).unwrap();
        let listed = Round::try_from(include_str!("../../demos/round-legacy.json")).unwrap();
        let wagers = Wagers::try_from(include_str!("../../demos/wagers.json")).unwrap();
        let a = settle(&keyed, Some(&wagers));
        let b = settle(&listed, Some(&wagers));
        assert!(keyed.ledger() == listed.ledger());
        assert!(a == b);
        assert!(a.games().len() == 4);
        assert!(a.audit().is_ok());
    }

    #[test]
    fn absurd_stroke_counts_settle_without_panicking() {
        let round = Round::new(
            vec![Player::from("a"), Player::from("b")],
            json!({
                "1": { "a": 3000000000u32, "b": 4 },
                "2": { "a": 3000000000u32, "b": 4 },
            }),
        );
        let wagers = Wagers::default()
            .with_nassau(NassauWager::from((1.0, 1.0, 1.0)))
            .with_per_stroke(StrokeWager::from(1.0));
        let settlement = Engine::from(wagers).settle(&round);
        assert!(settlement.balances().get("a") < 0.0);
        assert!(settlement.balances().get("b") > 0.0);
        assert!(settlement.audit().is_ok());
    }

    #[test]
    fn idempotent_down_to_the_byte() {
        let round = Round::random();
        let engine = Engine::from(everything());
        let a = serde_json::to_string(&engine.settle(&round)).unwrap();
        let b = serde_json::to_string(&engine.settle(&round)).unwrap();
        assert!(a == b);
    }
}
