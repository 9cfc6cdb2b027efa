//! Deck factory: canonical 56-card ordering and shuffling.

use super::card::{Card, Rank, Suit};
use crate::core::{CardId, RandomSource};

/// Cards in a full deal.
pub const DECK_SIZE: usize = 56;

/// Zonkers in a full deal.
pub const ZONKER_COUNT: usize = 2;

/// Parking Lots in a full deal.
pub const PARKING_LOT_COUNT: usize = 2;

/// Build the full deck in canonical order.
///
/// Suit-major, rank-minor (A♠ 2♠ … K♠ A♥ … K♣), then two Zonkers, then two
/// Parking Lots. Ids are assigned `0..56` in that order.
///
/// ```
/// use flea_devil::cards::{build_deck, DECK_SIZE};
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].to_string(), "A♠");
/// assert!(deck[55].is_parking_lot());
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u8;
    let mut alloc = || {
        let id = CardId::new(next_id);
        next_id += 1;
        id
    };

    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            deck.push(Card::standard(alloc(), rank, suit));
        }
    }
    for _ in 0..ZONKER_COUNT {
        deck.push(Card::zonker(alloc()));
    }
    for _ in 0..PARKING_LOT_COUNT {
        deck.push(Card::parking_lot(alloc()));
    }

    deck
}

/// Return a shuffled copy of `cards`. The input is left untouched.
///
/// Fisher–Yates from the last index down to 1, swapping index `i` with
/// `rng.index_upto(i)`.
#[must_use]
pub fn shuffle<R: RandomSource + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_upto(i);
        shuffled.swap(i, j);
    }
    shuffled
}
