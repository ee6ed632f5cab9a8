//! Stroke-based wager calculators.
//!
//! Every calculator reads the same [`Ledger`](crate::round::Ledger) and writes
//! its own [`Balance`](crate::money::Balance), so they are independent of
//! one another and safe to run side by side.
//!
//! - [`Skins`]: outright low score per hole, ties carry forward
//! - [`Nassau`]: front, back, and total low, ties split the pot
//! - [`PerStroke`]: everyone pays the leader per stroke behind
//! - [`Unavailable`]: closest-to-pin, acknowledged but not computable
//!
//! [`Wager`] is the seam the engine drives them through, and [`Game`]
//! is what each one reports back.
mod game;
mod kps;
mod nassau;
mod perstroke;
mod skins;

pub use game::*;
pub use kps::*;
pub use nassau::*;
pub use perstroke::*;
pub use skins::*;
