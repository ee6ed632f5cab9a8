//! Settle Binary
//!
//! Reads a round record and wager configuration, prints who pays whom.
//!
//! Options: --round, --wagers, --carry, --json, --strict, -v

use clap::Parser;
use fairway::*;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log(args.level());
    args.run()
}
