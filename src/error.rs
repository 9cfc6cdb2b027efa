//! Errors outside the move taxonomy.
//!
//! Move rejections are ordinary values (`MoveRejection`) and never show up
//! here. These types cover decoding data that came from outside the engine.

use thiserror::Error;

use crate::core::CardId;

/// A serialized card that does not describe a valid card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardDecodeError {
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(String),

    #[error("unknown rank symbol {0:?}")]
    UnknownRank(String),

    /// Rank, suit and special flags disagree about what kind of card this is.
    #[error("{0} must be exactly one of: standard rank with suit, zonker, parking lot")]
    InconsistentKind(CardId),
}

/// Failure encoding, decoding or restoring a session snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),

    /// The same card appears twice across Market, Bankroll and Easy-Go.
    #[error("{0} appears more than once in snapshot")]
    DuplicateCard(CardId),
}
