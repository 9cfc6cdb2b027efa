//! Haul: remove a run of same-rank cards for points.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveEffect, MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Two or more cards of one rank, selected in Market order with no gaps.
///
/// Scores `per_card` for each card removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Haul {
    pub per_card: i64,
}

impl Haul {
    fn try_evaluate(&self, market: &Market, selection: &[CardId]) -> Result<MoveEffect, MoveRejection> {
        let picked = locate(self.kind(), self.arity(), market, selection)?;

        let rank = picked[0].card.rank();
        if picked.iter().any(|p| p.card.rank() != rank) {
            return Err(MoveRejection::RankMismatch);
        }

        // Each card must sit directly after the one selected before it
        if picked.windows(2).any(|w| w[1].position != w[0].position + 1) {
            return Err(MoveRejection::NotAdjacent);
        }

        let removed = picked.len() as i64;
        Ok(MoveEffect::new(market.remove(selection), self.per_card * removed))
    }
}

impl MoveRule for Haul {
    fn kind(&self) -> MoveKind {
        MoveKind::Haul
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        settle(self.kind(), self.try_evaluate(market, selection))
    }
}
