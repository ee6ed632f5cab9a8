//! Who owes what, and who pays whom.
//!
//! - [`Balance`]: signed per-player amounts; positive is owed money
//! - [`Transfer`]: one payment from a debtor to a creditor
//! - [`Netter`]: greedy reduction of a balance into transfers
mod balance;
mod netter;
mod transfer;

pub use balance::*;
pub use netter::*;
pub use transfer::*;
