//! Walky Talky: a three-card move.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Checks selection size and presence only.
///
/// The triple rule and its Market effect are not defined, so every
/// well-formed selection is refused with `RuleUndefined`. A replacement
/// rule takes its score from `ScoringConfig::walky_talky`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkyTalky;

impl MoveRule for WalkyTalky {
    fn kind(&self) -> MoveKind {
        MoveKind::WalkyTalky
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        let checked = locate(self.kind(), self.arity(), market, selection)
            .and_then(|_| Err(MoveRejection::RuleUndefined(self.kind())));
        settle(self.kind(), checked)
    }
}
