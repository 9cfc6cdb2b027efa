//! Zonk Out: a two-card discard built around Zonkers.

use crate::core::{CardId, MoveKind};
use crate::rules::engine::MoveRule;
use crate::rules::outcome::{MoveRejection, MoveResult};
use crate::zones::Market;

use super::{locate, settle};

/// Checks selection size and presence only.
///
/// The pairing rule is not defined, so every well-formed selection is
/// refused with `RuleUndefined`. A replacement rule should send the pair
/// to the Easy-Go pile with `MoveEffect::with_easy_go`, scored from
/// `ScoringConfig::zonk_out`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZonkOut;

impl MoveRule for ZonkOut {
    fn kind(&self) -> MoveKind {
        MoveKind::ZonkOut
    }

    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult {
        let checked = locate(self.kind(), self.arity(), market, selection)
            .and_then(|_| Err(MoveRejection::RuleUndefined(self.kind())));
        settle(self.kind(), checked)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{at, market};
    use super::*;

    const RULE: ZonkOut = ZonkOut;

    #[test]
    fn test_valid_selection_reaches_undefined_rule() {
        let m = market();
        let result = RULE.evaluate(&m, &[at(&m, 0), at(&m, 1)]);
        assert_eq!(result.rejection(), Some(&MoveRejection::RuleUndefined(MoveKind::ZonkOut)));
    }

    #[test]
    fn test_wrong_count_checked_first() {
        let m = market();
        let result = RULE.evaluate(&m, &[at(&m, 0)]);
        assert!(matches!(
            result.rejection(),
            Some(MoveRejection::WrongSelectionCount { kind: MoveKind::ZonkOut, actual: 1, .. })
        ));
    }

    #[test]
    fn test_missing_card_checked_before_rule() {
        let m = market();
        let result = RULE.evaluate(&m, &[at(&m, 1), CardId(0)]);
        assert_eq!(result.rejection(), Some(&MoveRejection::CardNotInMarket(CardId(0))));
    }
}
