//! The Market: the ordered playing field.
//!
//! Every operation is pure and returns a new `Market`. Backed by
//! `im::Vector`, so a rule can build a candidate Market and drop it on
//! rejection without copying the sequence.
//!
//! ```
//! use flea_devil::cards::build_deck;
//! use flea_devil::core::CardId;
//! use flea_devil::zones::Market;
//!
//! let market = Market::from_cards(build_deck());
//! assert!(market.adjacent(CardId(0), CardId(1)));
//!
//! let swapped = market.swap(0, 1);
//! assert_eq!(swapped.position_of(CardId(0)), Some(1));
//! assert_eq!(market.position_of(CardId(0)), Some(0));
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::CardId;

/// Ordered sequence of cards. Adjacency is defined by position alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Market {
    cards: Vector<Card>,
}

impl Market {
    /// Create an empty Market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Market holding `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate cards in Market order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Card ids in Market order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Position of a card, or `None` if it is not in the Market.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// True iff both cards are present and exactly one position apart.
    #[must_use]
    pub fn adjacent(&self, a: CardId, b: CardId) -> bool {
        match (self.position_of(a), self.position_of(b)) {
            (Some(pa), Some(pb)) => pa.abs_diff(pb) == 1,
            _ => false,
        }
    }

    /// Positions of every card whose suit equals `suit`, ascending.
    ///
    /// `None` selects the suitless specials, which form one group.
    #[must_use]
    pub fn positions_of_suit(&self, suit: Option<Suit>) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit() == suit)
            .map(|(i, _)| i)
            .collect()
    }

    /// New Market without the listed cards; survivors keep their order.
    ///
    /// Ids not in the Market are ignored.
    #[must_use]
    pub fn remove(&self, ids: &[CardId]) -> Self {
        let doomed: FxHashSet<CardId> = ids.iter().copied().collect();
        Self {
            cards: self
                .cards
                .iter()
                .filter(|c| !doomed.contains(&c.id()))
                .copied()
                .collect(),
        }
    }

    /// New Market with the cards at `a` and `b` exchanged.
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn swap(&self, a: usize, b: usize) -> Self {
        let mut cards = self.cards.clone();
        cards.swap(a, b);
        Self { cards }
    }

    /// New Market with `id` taken out and reinserted at `new_index`.
    ///
    /// `new_index` is interpreted after removal and clamped to the end.
    /// Returns `None` if the card is not in the Market.
    #[must_use]
    pub fn move_card(&self, id: CardId, new_index: usize) -> Option<Self> {
        let old_index = self.position_of(id)?;
        let mut cards = self.cards.clone();
        let card = cards.remove(old_index);
        let idx = new_index.min(cards.len());
        cards.insert(idx, card);
        Some(Self { cards })
    }
}

impl<'a> IntoIterator for &'a Market {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn spade(id: u8, rank: Rank) -> Card {
        Card::standard(CardId(id), rank, Suit::Spades)
    }

    fn sample() -> Market {
        Market::from_cards([
            spade(0, Rank::Ace),
            spade(1, Rank::Two),
            Card::zonker(CardId(52)),
            spade(3, Rank::Four),
            Card::standard(CardId(20), Rank::Eight, Suit::Hearts),
        ])
    }

    fn ids(market: &Market) -> Vec<u8> {
        market.iter().map(|c| c.id().raw()).collect()
    }

    #[test]
    fn test_position_of() {
        let market = sample();
        assert_eq!(market.position_of(CardId(0)), Some(0));
        assert_eq!(market.position_of(CardId(52)), Some(2));
        assert_eq!(market.position_of(CardId(99)), None);
        assert!(market.contains(CardId(20)));
        assert_eq!(market.card(CardId(3)).map(Card::rank), Some(Rank::Four));
    }

    #[test]
    fn test_adjacent() {
        let market = sample();
        assert!(market.adjacent(CardId(0), CardId(1)));
        assert!(market.adjacent(CardId(1), CardId(0)));
        assert!(!market.adjacent(CardId(0), CardId(52)));
        assert!(!market.adjacent(CardId(0), CardId(0)));
        assert!(!market.adjacent(CardId(0), CardId(99)));
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let market = sample();
        let removed = market.remove(&[CardId(1), CardId(3), CardId(99)]);

        assert_eq!(ids(&removed), vec![0, 52, 20]);
        assert_eq!(market.len(), 5);
    }

    #[test]
    fn test_swap_is_pure() {
        let market = sample();
        let swapped = market.swap(1, 2);

        assert_eq!(ids(&swapped), vec![0, 52, 1, 3, 20]);
        assert_eq!(ids(&market), vec![0, 1, 52, 3, 20]);
    }

    #[test]
    fn test_move_card_forward_and_back() {
        let market = sample();

        let forward = market.move_card(CardId(0), 3).unwrap();
        assert_eq!(ids(&forward), vec![1, 52, 3, 0, 20]);

        let back = market.move_card(CardId(20), 0).unwrap();
        assert_eq!(ids(&back), vec![20, 0, 1, 52, 3]);

        let clamped = market.move_card(CardId(1), 100).unwrap();
        assert_eq!(ids(&clamped), vec![0, 52, 3, 20, 1]);

        assert!(market.move_card(CardId(99), 0).is_none());
    }

    #[test]
    fn test_suit_queries() {
        let market = sample();
        assert_eq!(market.positions_of_suit(Some(Suit::Spades)), vec![0, 1, 3]);
        assert_eq!(market.positions_of_suit(Some(Suit::Hearts)), vec![4]);
        assert!(market.positions_of_suit(Some(Suit::Clubs)).is_empty());
        assert_eq!(market.positions_of_suit(None), vec![2]);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let market = sample();
        let json = serde_json::to_string(&market).unwrap();
        let deserialized: Market = serde_json::from_str(&json).unwrap();
        assert_eq!(market, deserialized);
    }
}
