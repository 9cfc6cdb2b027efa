//! Hangout: keep a group of cards in the Bankroll.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Checks selection size and presence only.
///
/// The grouping rule is not defined, so every well-formed selection is
/// refused with `RuleUndefined`. A replacement rule should send the group
/// to the Bankroll with `MoveEffect::with_bankroll`, scored from
/// `ScoringConfig::hangout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hangout;

impl MoveRule for Hangout {
    fn kind(&self) -> MoveKind {
        MoveKind::Hangout
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        let checked = locate(self.kind(), self.arity(), market, selection)
            .and_then(|_| Err(MoveRejection::RuleUndefined(self.kind())));
        settle(self.kind(), checked)
    }
}
