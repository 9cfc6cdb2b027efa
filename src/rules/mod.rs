//! Move engine.
//!
//! Each move kind has a `MoveRule` that decides, from the Market alone,
//! whether a selection is legal and what the Market looks like afterwards.
//! `FleaDevil` looks the rule up in its `RuleBook` and commits accepted
//! results to a `SessionState`.
//!
//! Rules never mutate anything: a rejected move cannot leave a trace.

pub mod engine;
pub mod moves;
pub mod outcome;

pub use engine::{FleaDevil, MoveRule, RuleBook};
pub use outcome::{MoveEffect, MoveOutcome, MoveRejection, MoveResult};
