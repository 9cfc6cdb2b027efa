//! # flea-devil
//!
//! Rule engine for Flea Devil Solitaire, a single-player card-matching game
//! played against an ordered row of cards called the Market.
//!
//! ## Design Principles
//!
//! 1. **Identity by id**: every card gets a `CardId` when the deck is built.
//!    Moves select ids, never faces, so duplicate ranks and the two pairs of
//!    special cards are never ambiguous.
//!
//! 2. **Pure rules**: a `MoveRule` sees only the Market and the selection and
//!    returns either a complete new Market or a rejection. Nothing is
//!    committed until the whole result exists.
//!
//! 3. **Caller-owned state**: `SessionState` is an ordinary value. There are
//!    no globals, so tests and replays are isolated by construction.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Market and piles use `im-rs`, so
//!   candidate states and snapshots are O(1) to clone.
//!
//! - **Deterministic Deals**: shuffling takes any `RandomSource`; sessions
//!   use a seeded ChaCha8 `GameRng` whose state is saved in snapshots.
//!
//! ## Modules
//!
//! - `core`: card ids, moves, RNG, configuration, session state
//! - `cards`: card faces and the deck factory
//! - `zones`: the Market and the side piles
//! - `rules`: the eight move evaluators and the `FleaDevil` engine
//! - `error`: decoding and snapshot errors

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId,
    GameRng, GameRngState, RandomSource,
    GameConfig, ScoringConfig,
    Arity, Move, MoveKind, MoveRecord,
    SessionSnapshot, SessionState,
};

pub use crate::cards::{build_deck, shuffle, Card, CardRecord, Rank, Suit, DECK_SIZE};

pub use crate::zones::{Market, Pile};

pub use crate::rules::{FleaDevil, MoveEffect, MoveOutcome, MoveRejection, MoveResult, MoveRule, RuleBook};

pub use crate::error::{CardDecodeError, SnapshotError};
