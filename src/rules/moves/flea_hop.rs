//! Flea Hop: jump a card to the next card of its suit.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveEffect, MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// One card moves to the position held by the next card of its suit,
/// wrapping to the first card of the suit when it is the last.
///
/// Zonkers and Parking Lots have no suit and hop among each other as one
/// group. The target index is read before the card is lifted out, so a
/// forward hop lands just past its successor and a wrap-around hop lands
/// just before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleaHop {
    pub score: i64,
}

impl FleaHop {
    fn try_evaluate(&self, market: &Market, selection: &[CardId]) -> Result<MoveEffect, MoveRejection> {
        let picked = locate(self.kind(), self.arity(), market, selection)?;
        let hopper = picked[0];

        let positions = market.positions_of_suit(hopper.card.suit());
        if positions.len() < 2 {
            return Err(MoveRejection::InsufficientSuitCards);
        }

        let rank_in_suit = positions
            .iter()
            .position(|&p| p == hopper.position)
            .ok_or(MoveRejection::CardNotInMarket(hopper.card.id()))?;
        let target = positions[(rank_in_suit + 1) % positions.len()];
        tracing::trace!(from = hopper.position, to = target, "flea hop");

        let hopped = market
            .move_card(hopper.card.id(), target)
            .ok_or(MoveRejection::CardNotInMarket(hopper.card.id()))?;
        Ok(MoveEffect::new(hopped, self.score))
    }
}

impl MoveRule for FleaHop {
    fn kind(&self) -> MoveKind {
        MoveKind::FleaHop
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        settle(self.kind(), self.try_evaluate(market, selection))
    }
}
