//! Move engine tests through `FleaDevil::apply_move`.
//!
//! The shared Market:
//!
//! ```text
//! pos  0    1    2    3    4    5    6    7    8    9    10   11
//!      K♣   Z    2♥   5♠   5♣   5♦   9♣   3♥   Q♦   7♠   4♥   P
//! ```

mod common;

use common::{at, init_logging, session_of};
use flea_devil::{
    CardId, FleaDevil, Move, MoveKind, MoveRejection, SessionState, Suit,
};

const MARKET: [u8; 12] = [51, 52, 14, 4, 43, 30, 47, 15, 37, 6, 16, 54];

fn setup() -> (FleaDevil, SessionState) {
    init_logging();
    (FleaDevil::default(), session_of(&MARKET))
}

/// Apply a move expected to be rejected and check nothing moved.
fn assert_rejected(game: &FleaDevil, state: &mut SessionState, mv: Move, expected: MoveRejection) {
    let before = state.clone();
    let outcome = game.apply_move(state, &mv);

    assert!(!outcome.accepted);
    assert_eq!(outcome.rejection, Some(expected));
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(*state, before);
}

#[test]
fn test_haul_three_fives() {
    let (game, mut state) = setup();
    let fives = [at(&state, 3), at(&state, 4), at(&state, 5)];

    let outcome = game.apply_move(&mut state, &Move::haul(&fives));

    assert!(outcome.accepted);
    assert_eq!(outcome.score_delta, 3);
    assert_eq!(state.score(), 3);
    assert_eq!(state.market().len(), 9);
    assert!(fives.iter().all(|&id| !state.market().contains(id)));
    assert!(state.bankroll().is_empty());
    assert!(state.easy_go().is_empty());
    assert_eq!(outcome.message, "Haul successful! Score: +3");
}

#[test]
fn test_haul_non_consecutive_fives() {
    let (game, mut state) = setup();
    let mv = Move::haul(&[at(&state, 3), at(&state, 5)]);
    assert_rejected(&game, &mut state, mv, MoveRejection::NotAdjacent);
}

#[test]
fn test_haul_five_and_six() {
    init_logging();
    let game = FleaDevil::default();
    // 5♠ 6♠
    let mut state = session_of(&[4, 5]);
    let mv = Move::haul(&[CardId(4), CardId(5)]);
    assert_rejected(&game, &mut state, mv, MoveRejection::RankMismatch);
}

#[test]
fn test_haul_adjacent_zonkers_share_rank() {
    init_logging();
    let game = FleaDevil::default();
    let mut state = session_of(&[0, 52, 53, 1]);

    let outcome = game.apply_move(&mut state, &Move::haul(&[CardId(52), CardId(53)]));

    assert!(outcome.accepted);
    assert_eq!(state.market().ids(), vec![CardId(0), CardId(1)]);
}

#[test]
fn test_bargain_swaps_neighbours() {
    let (game, mut state) = setup();
    let (a, b) = (at(&state, 4), at(&state, 5));

    let outcome = game.apply_move(&mut state, &Move::bargain(a, b));

    assert!(outcome.accepted);
    assert_eq!(state.market().position_of(a), Some(5));
    assert_eq!(state.market().position_of(b), Some(4));
    assert_eq!(state.score(), -1);
    assert_eq!(outcome.message, "Bargain successful! Score: -1");
}

#[test]
fn test_bargain_distant_cards() {
    let (game, mut state) = setup();
    let mv = Move::bargain(at(&state, 4), at(&state, 9));
    assert_rejected(&game, &mut state, mv, MoveRejection::NotAdjacent);
}

#[test]
fn test_easy_go_same_suit_pair() {
    init_logging();
    let game = FleaDevil::default();
    // A♠ 2♥ 10♥ 2♠
    let mut state = session_of(&[0, 14, 22, 1]);

    let outcome = game.apply_move(&mut state, &Move::easy_go(CardId(14), CardId(22)));

    assert!(outcome.accepted);
    assert_eq!(state.score(), -1);
    assert_eq!(state.market().ids(), vec![CardId(0), CardId(1)]);
    assert_eq!(state.easy_go().len(), 2);
    assert!(state.easy_go().contains(CardId(14)));
    assert!(state.easy_go().contains(CardId(22)));
    assert!(state.bankroll().is_empty());
}

#[test]
fn test_easy_go_different_suits() {
    let (game, mut state) = setup();
    // 5♠ 5♣
    let mv = Move::easy_go(at(&state, 3), at(&state, 4));
    assert_rejected(&game, &mut state, mv, MoveRejection::SuitMismatch);
}

#[test]
fn test_flea_hop_to_next_in_suit() {
    let (game, mut state) = setup();
    assert_eq!(state.market().positions_of_suit(Some(Suit::Hearts)), vec![2, 7, 10]);
    let hopper = at(&state, 7);

    let outcome = game.apply_move(&mut state, &Move::flea_hop(hopper));

    assert!(outcome.accepted);
    assert_eq!(state.market().position_of(hopper), Some(10));
    assert_eq!(state.score(), 0);
    assert_eq!(outcome.message, "Flea Hop successful!");
}

#[test]
fn test_flea_hop_last_cycles_to_first() {
    let (game, mut state) = setup();
    let hopper = at(&state, 10);

    let outcome = game.apply_move(&mut state, &Move::flea_hop(hopper));

    assert!(outcome.accepted);
    assert_eq!(state.market().position_of(hopper), Some(2));
}

#[test]
fn test_flea_hop_suit_alone() {
    init_logging();
    let game = FleaDevil::default();
    let mut state = session_of(&[0, 13, 26]);
    let mv = Move::flea_hop(CardId(13));
    assert_rejected(&game, &mut state, mv, MoveRejection::InsufficientSuitCards);
}

#[test]
fn test_flea_hop_zonker_to_next_special() {
    init_logging();
    let game = FleaDevil::default();
    // Z A♠ Z
    let mut state = session_of(&[52, 0, 53]);

    let outcome = game.apply_move(&mut state, &Move::flea_hop(CardId(52)));

    assert!(outcome.accepted);
    assert_eq!(state.market().ids(), vec![CardId(0), CardId(53), CardId(52)]);
}

#[test]
fn test_flea_hop_lone_special() {
    init_logging();
    let game = FleaDevil::default();
    let mut state = session_of(&[52, 0, 1]);
    let mv = Move::flea_hop(CardId(52));
    assert_rejected(&game, &mut state, mv, MoveRejection::InsufficientSuitCards);
}

#[test]
fn test_devil_hop_checks_suits_then_stops() {
    let (game, mut state) = setup();

    // 5♠ 5♣ 5♦ 9♣: clubs twice
    let mv = Move::new(
        MoveKind::DevilHop,
        &[at(&state, 3), at(&state, 4), at(&state, 5), at(&state, 6)],
    );
    assert_rejected(&game, &mut state, mv, MoveRejection::SuitMismatch);

    // 5♠ 5♣ 5♦ 2♥: one of each
    let mv = Move::new(
        MoveKind::DevilHop,
        &[at(&state, 3), at(&state, 4), at(&state, 5), at(&state, 2)],
    );
    assert_rejected(&game, &mut state, mv, MoveRejection::RuleUndefined(MoveKind::DevilHop));
}

#[test]
fn test_undefined_moves_never_change_state() {
    let (game, mut state) = setup();

    let walky = Move::new(MoveKind::WalkyTalky, &[at(&state, 2), at(&state, 3), at(&state, 4)]);
    assert_rejected(&game, &mut state, walky, MoveRejection::RuleUndefined(MoveKind::WalkyTalky));

    let zonk = Move::new(MoveKind::ZonkOut, &[at(&state, 0), at(&state, 1)]);
    assert_rejected(&game, &mut state, zonk, MoveRejection::RuleUndefined(MoveKind::ZonkOut));

    let hang = Move::new(MoveKind::Hangout, &[at(&state, 3), at(&state, 4)]);
    assert_rejected(&game, &mut state, hang, MoveRejection::RuleUndefined(MoveKind::Hangout));
}

#[test]
fn test_selection_count_checked_first() {
    let (game, mut state) = setup();

    // Wrong count wins over a missing card
    for kind in MoveKind::ALL {
        let too_few = kind.arity();
        let selection: Vec<CardId> = match too_few {
            flea_devil::Arity::Exactly(n) | flea_devil::Arity::AtLeast(n) => {
                vec![CardId(0); n - 1]
            }
        };
        let mv = Move::new(kind, &selection);
        assert_rejected(
            &game,
            &mut state,
            mv,
            MoveRejection::WrongSelectionCount {
                kind,
                arity: too_few,
                actual: selection.len(),
            },
        );
    }
}

#[test]
fn test_card_not_in_market() {
    let (game, mut state) = setup();
    // A♠ was never put in this Market
    let mv = Move::bargain(at(&state, 0), CardId(0));
    assert_rejected(&game, &mut state, mv, MoveRejection::CardNotInMarket(CardId(0)));
}

#[test]
fn test_strikes_untouched_by_moves() {
    let (game, mut state) = setup();
    state.add_strike();

    let ids = state.market().ids();
    game.apply_move(&mut state, &Move::bargain(ids[0], ids[1]));
    game.apply_move(&mut state, &Move::bargain(ids[0], ids[5]));

    assert_eq!(state.strikes(), 1);
}

#[test]
fn test_score_can_go_negative() {
    let (game, mut state) = setup();
    for _ in 0..3 {
        let ids = state.market().ids();
        assert!(game.apply_move(&mut state, &Move::bargain(ids[0], ids[1])).accepted);
    }
    assert_eq!(state.score(), -3);
    assert_eq!(state.history().len(), 3);
}
