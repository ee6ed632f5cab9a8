//! The round record and its normalized stroke ledger.
//!
//! ## Record
//!
//! - [`Player`]: id and display name
//! - [`Round`]: players plus hole data exactly as it was stored
//!
//! ## Reading strokes
//!
//! - [`Holes`]: which of the stored hole layouts a record uses
//! - [`Ledger`]: dense players × holes grid built once per settlement
mod holes;
mod ledger;
mod player;
mod round;
mod strokes;

pub use holes::*;
pub use ledger::*;
pub use player::*;
pub use round::*;
pub use strokes::*;
