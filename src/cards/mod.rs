//! Card model and deck factory.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: card faces, including the special ranks
//! - `Card`: immutable card value with a stable `CardId`
//! - `CardRecord`: external serialized shape of a card
//! - `build_deck`, `shuffle`: the canonical deal and its permutation

pub mod card;
pub mod deck;

pub use card::{Card, CardRecord, Rank, Suit};
pub use deck::{build_deck, shuffle, DECK_SIZE, PARKING_LOT_COUNT, ZONKER_COUNT};
