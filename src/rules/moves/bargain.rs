//! Bargain: pay to swap two neighbours.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveEffect, MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Exactly two Market-adjacent cards trade places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bargain {
    pub score: i64,
}

impl Bargain {
    fn try_evaluate(&self, market: &Market, selection: &[CardId]) -> Result<MoveEffect, MoveRejection> {
        let picked = locate(self.kind(), self.arity(), market, selection)?;
        let (a, b) = (picked[0].position, picked[1].position);

        if a.abs_diff(b) != 1 {
            return Err(MoveRejection::NotAdjacent);
        }

        Ok(MoveEffect::new(market.swap(a, b), self.score))
    }
}

impl MoveRule for Bargain {
    fn kind(&self) -> MoveKind {
        MoveKind::Bargain
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        settle(self.kind(), self.try_evaluate(market, selection))
    }
}
