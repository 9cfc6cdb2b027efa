//! Core engine types: card ids, moves, RNG, configuration, session state.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, ScoringConfig};
pub use action::{Arity, Move, MoveKind, MoveRecord};
pub use state::{SessionSnapshot, SessionState};
