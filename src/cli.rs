//! Command line front end for settling a stored round.
use crate::engine::Engine;
use crate::engine::Settlement;
use crate::round::Round;
use crate::wager::Carry;
use crate::wager::Wagers;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Settle a golf round's wagers", long_about = None)]
pub struct Args {
    #[arg(long, short, help = "Round record as JSON")]
    pub round: PathBuf,
    #[arg(long, short, help = "Wager configuration as JSON; omit for no wagers")]
    pub wagers: Option<PathBuf>,
    #[arg(long, help = "Skins carry rule after 18: forfeit, last, or split")]
    pub carry: Option<String>,
    #[arg(long, help = "Print the settlement as JSON")]
    pub json: bool,
    #[arg(long, help = "Fail unless the settlement passes its audit")]
    pub strict: bool,
    #[arg(long, short, action = clap::ArgAction::Count, help = "More logging (-v, -vv)")]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    fn round(&self) -> anyhow::Result<Round> {
        let text = std::fs::read_to_string(&self.round)?;
        Round::try_from(text.as_str())
    }

    fn wagers(&self) -> anyhow::Result<Option<Wagers>> {
        let wagers = match self.wagers {
            Some(ref path) => Some(Wagers::try_from(std::fs::read_to_string(path)?.as_str())?),
            None => None,
        };
        match (wagers, self.carry.as_deref()) {
            (Some(wagers), Some(carry)) => Ok(Some(wagers.with_carry(Carry::try_from(carry)?))),
            (wagers, _) => Ok(wagers),
        }
    }

    /// Reads inputs, settles, and prints.
    pub fn run(&self) -> anyhow::Result<()> {
        let round = self.round()?;
        let ledger = round.ledger();
        for (hole, id) in ledger.missing() {
            log::warn!("hole {:>2} has no score for {}", hole, id);
        }
        let settlement = match self.wagers()? {
            Some(wagers) => Engine::from(wagers).settle(&round),
            None => Settlement::default(),
        };
        if self.strict {
            settlement.audit()?;
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(&settlement)?);
        } else {
            print(&round, &settlement);
        }
        Ok(())
    }
}

fn print(round: &Round, settlement: &Settlement) {
    if settlement.is_empty() {
        println!("no wagers to settle");
        return;
    }
    for game in settlement.games() {
        println!("{}", game);
    }
    println!();
    let name = |id: &str| {
        round
            .players()
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| id.to_string())
    };
    for (id, amount) in settlement.balances().iter() {
        let amount = format!("{:>+10.2}", amount);
        let amount = if amount.contains('-') {
            amount.as_str().red()
        } else {
            amount.as_str().green()
        };
        println!("{:<16}{}", name(id.as_str()), amount);
    }
    println!();
    for transfer in settlement.transfers() {
        println!(
            "{:<16} -> {:<16}{:>10.2}",
            name(transfer.payer().as_str()),
            name(transfer.payee().as_str()),
            transfer.amount()
        );
    }
}
