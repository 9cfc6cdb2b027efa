//! Easy Go: discard two neighbours of one suit.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveEffect, MoveRejection, MoveResult};
use crate::zones::Market;

use super::{cards_of, locate, settle};

/// Two Market-adjacent cards of the same suit go to the Easy-Go pile.
///
/// Suitless specials never share a suit, so they cannot Easy Go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EasyGo {
    pub score: i64,
}

impl EasyGo {
    fn try_evaluate(&self, market: &Market, selection: &[CardId]) -> Result<MoveEffect, MoveRejection> {
        let picked = locate(self.kind(), self.arity(), market, selection)?;
        let (a, b) = (picked[0], picked[1]);

        if a.position.abs_diff(b.position) != 1 {
            return Err(MoveRejection::NotAdjacent);
        }
        match (a.card.suit(), b.card.suit()) {
            (Some(x), Some(y)) if x == y => {}
            _ => return Err(MoveRejection::SuitMismatch),
        }

        Ok(MoveEffect::new(market.remove(selection), self.score).with_easy_go(cards_of(&picked)))
    }
}

impl MoveRule for EasyGo {
    fn kind(&self) -> MoveKind {
        MoveKind::EasyGo
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        settle(self.kind(), self.try_evaluate(market, selection))
    }
}
