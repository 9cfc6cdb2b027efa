//! Devil Hop: four cards, one of each suit.

use rustc_hash::FxHashSet;

use crate::cards::Suit;
use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveEffect, MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Checks selection size, presence and the one-card-per-suit requirement.
///
/// What the hop does to the Market is not defined, so a selection that
/// passes every check is refused with `RuleUndefined`. Register a
/// replacement through `RuleBook::with_rule` to play it; its score is
/// `ScoringConfig::devil_hop`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DevilHop;

impl DevilHop {
    fn try_evaluate(&self, market: &Market, selection: &[CardId]) -> Result<MoveEffect, MoveRejection> {
        let picked = locate(self.kind(), self.arity(), market, selection)?;

        let suits: FxHashSet<Suit> = picked.iter().filter_map(|p| p.card.suit()).collect();
        if picked.iter().any(|p| p.card.suit().is_none()) || suits.len() != Suit::ALL.len() {
            return Err(MoveRejection::SuitMismatch);
        }

        Err(MoveRejection::RuleUndefined(self.kind()))
    }
}

impl MoveRule for DevilHop {
    fn kind(&self) -> MoveKind {
        MoveKind::DevilHop
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        settle(self.kind(), self.try_evaluate(market, selection))
    }
}
