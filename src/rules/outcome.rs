//! Results of evaluating a move.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{Arity, CardId, MoveKind};
use crate::zones::Market;

/// Why a move was refused.
///
/// The Display text is the reason shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("{kind} needs {arity}, {actual} selected")]
    WrongSelectionCount {
        kind: MoveKind,
        arity: Arity,
        actual: usize,
    },

    #[error("cards must be next to each other in the market, in the order selected")]
    NotAdjacent,

    #[error("cards must all share one rank")]
    RankMismatch,

    #[error("cards do not meet the suit requirement")]
    SuitMismatch,

    #[error("{0} is not in the market")]
    CardNotInMarket(CardId),

    #[error("not enough cards of that suit in the market")]
    InsufficientSuitCards,

    /// The move exists but its rule body has not been defined.
    #[error("{0} has no defined rule")]
    RuleUndefined(MoveKind),
}

/// Everything an accepted move changes, computed before anything is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    /// Market after the move.
    pub market: Market,

    /// Score change.
    pub score_delta: i64,

    /// Cards to append to the Bankroll.
    pub bankroll_additions: Vec<Card>,

    /// Cards to append to the Easy-Go pile.
    pub easy_go_additions: Vec<Card>,
}

impl MoveEffect {
    /// Effect that only replaces the Market and adjusts the score.
    #[must_use]
    pub fn new(market: Market, score_delta: i64) -> Self {
        Self {
            market,
            score_delta,
            bankroll_additions: Vec::new(),
            easy_go_additions: Vec::new(),
        }
    }

    /// Send `cards` to the Bankroll.
    #[must_use]
    pub fn with_bankroll(mut self, cards: Vec<Card>) -> Self {
        self.bankroll_additions = cards;
        self
    }

    /// Send `cards` to the Easy-Go pile.
    #[must_use]
    pub fn with_easy_go(mut self, cards: Vec<Card>) -> Self {
        self.easy_go_additions = cards;
        self
    }
}

/// Result of evaluating one move against a Market.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Accepted(MoveEffect),
    Rejected(MoveRejection),
}

impl MoveResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// The rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&MoveRejection> {
        match self {
            MoveResult::Rejected(r) => Some(r),
            MoveResult::Accepted(_) => None,
        }
    }

    /// The effect, if accepted.
    #[must_use]
    pub fn effect(&self) -> Option<&MoveEffect> {
        match self {
            MoveResult::Accepted(e) => Some(e),
            MoveResult::Rejected(_) => None,
        }
    }
}

impl From<MoveRejection> for MoveResult {
    fn from(rejection: MoveRejection) -> Self {
        MoveResult::Rejected(rejection)
    }
}

impl From<Result<MoveEffect, MoveRejection>> for MoveResult {
    fn from(result: Result<MoveEffect, MoveRejection>) -> Self {
        match result {
            Ok(effect) => MoveResult::Accepted(effect),
            Err(rejection) => MoveResult::Rejected(rejection),
        }
    }
}

/// What `apply_move` reports back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub accepted: bool,
    /// Score change applied (0 when rejected).
    pub score_delta: i64,
    /// Running score after the move.
    pub score: i64,
    pub rejection: Option<MoveRejection>,
    /// Text for the status line.
    pub message: String,
}

impl MoveOutcome {
    pub(crate) fn accepted(kind: MoveKind, score_delta: i64, score: i64) -> Self {
        let message = if score_delta == 0 {
            format!("{kind} successful!")
        } else {
            format!("{kind} successful! Score: {score_delta:+}")
        };
        Self {
            kind,
            accepted: true,
            score_delta,
            score,
            rejection: None,
            message,
        }
    }

    pub(crate) fn rejected(kind: MoveKind, rejection: MoveRejection, score: i64) -> Self {
        Self {
            kind,
            accepted: false,
            score_delta: 0,
            score,
            message: format!("Invalid {kind}: {rejection}."),
            rejection: Some(rejection),
        }
    }
}
