//! Wager configuration: which games are on and their stakes.
//!
//! - [`Wagers`]: the whole configuration as the storage layer hands it over
//! - [`SkinsWager`], [`NassauWager`], [`StrokeWager`], [`KpsWager`]: per-game toggles
//! - [`Carry`]: what happens to skins still carried after the last hole
mod carry;
mod wagers;

pub use carry::*;
pub use wagers::*;
