//! Card locations.
//!
//! ## Key Types
//!
//! - `Market`: the ordered playing field, with pure positional queries
//! - `Pile`: append-only side collection (Bankroll, Easy-Go pile)

pub mod market;
pub mod pile;

pub use market::Market;
pub use pile::Pile;
