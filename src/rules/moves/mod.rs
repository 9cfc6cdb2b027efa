//! The eight move evaluators.
//!
//! Every evaluator checks, in order: selection size, that each selected
//! card is in the Market, its own legality predicate. Only then does it
//! build the new Market. Nothing is committed here; `FleaDevil::apply_move`
//! does that.

mod bargain;
mod devil_hop;
mod easy_go;
mod flea_hop;
mod hangout;
mod haul;
mod walky_talky;
mod zonk_out;

pub use bargain::Bargain;
pub use devil_hop::DevilHop;
pub use easy_go::EasyGo;
pub use flea_hop::FleaHop;
pub use hangout::Hangout;
pub use haul::Haul;
pub use walky_talky::WalkyTalky;
pub use zonk_out::ZonkOut;

use crate::cards::Card;
use crate::core::{Arity, CardId, MoveKind};
use crate::zones::Market;

use super::outcome::{MoveEffect, MoveRejection, MoveResult};

/// A selected card with the Market position it was found at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Located {
    pub position: usize,
    pub card: Card,
}

/// Run the cardinality and presence checks shared by every move.
///
/// Returns the selection resolved against the Market, in selection order.
pub fn locate(
    kind: MoveKind,
    arity: Arity,
    market: &Market,
    selection: &[CardId],
) -> Result<Vec<Located>, MoveRejection> {
    if !arity.accepts(selection.len()) {
        return Err(MoveRejection::WrongSelectionCount {
            kind,
            arity,
            actual: selection.len(),
        });
    }

    selection
        .iter()
        .map(|&id| {
            let position = market
                .position_of(id)
                .ok_or(MoveRejection::CardNotInMarket(id))?;
            let card = *market
                .get(position)
                .ok_or(MoveRejection::CardNotInMarket(id))?;
            Ok(Located { position, card })
        })
        .collect()
}

/// Finish an evaluation, tracing the reason when the move is refused.
pub(crate) fn settle(kind: MoveKind, result: Result<MoveEffect, MoveRejection>) -> MoveResult {
    if let Err(rejection) = &result {
        tracing::trace!(kind = %kind, reason = %rejection, "move predicate failed");
    }
    result.into()
}

/// Cards of a resolved selection, in selection order.
pub(crate) fn cards_of(picked: &[Located]) -> Vec<Card> {
    picked.iter().map(|p| p.card).collect()
}
