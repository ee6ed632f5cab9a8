//! Wager settlement for a single golf round.
//!
//! Turns hole-by-hole gross strokes into per-game outcomes for skins,
//! nassau, and per-stroke wagers, then nets everyone's balance down to
//! a short list of pairwise transfers.
//!
//! - [`round`]: players, the stored round record, and the normalized [`round::Ledger`]
//! - [`wager`]: which games are on and what they're played for
//! - [`games`]: one calculator per game behind the [`games::Wager`] seam
//! - [`money`]: balances, transfers, and the greedy [`money::Netter`]
//! - [`engine`]: the facade that ties it all together into a [`engine::Settlement`]

pub mod engine;
pub mod games;
pub mod money;
pub mod round;
pub mod wager;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Dollar amounts, stakes, and signed balances.
pub type Money = f64;
/// Gross strokes on a single hole. Zero means the hole was never recorded.
pub type Strokes = u32;
/// Hole number, 1-indexed.
pub type Hole = usize;
/// Player identifier, unique within a round.
pub type PlayerId = String;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// COURSE LAYOUT
// ============================================================================
/// Holes in a full round.
pub const HOLES: usize = 18;
/// Front nine.
pub const FRONT: std::ops::RangeInclusive<Hole> = 1..=9;
/// Back nine.
pub const BACK: std::ops::RangeInclusive<Hole> = 10..=18;
/// Whole eighteen.
pub const TOTAL: std::ops::RangeInclusive<Hole> = 1..=HOLES;

// ============================================================================
// ARITHMETIC
// ============================================================================
/// Balances within this distance of zero are considered settled.
pub const TOLERANCE: Money = 1e-6;
/// Fewest players for any wager to move money.
pub const MIN_PLAYERS: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if let Err(e) = simplelog::CombinedLogger::init(vec![term]) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// True when two amounts agree within [`TOLERANCE`].
pub fn near(a: Money, b: Money) -> bool {
    (a - b).abs() <= TOLERANCE
}
