//! Settlement facade.
//!
//! - [`Engine`]: plays every enabled game over a round and nets the result
//! - [`Settlement`]: net balances, transfers, and per-game detail
//! - [`settle`]: one-shot entry point that tolerates a missing configuration
mod engine;
mod settlement;

pub use engine::*;
pub use settlement::*;
