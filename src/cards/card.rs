//! Card faces: suits, ranks, and the immutable `Card` value.
//!
//! A card is either a standard rank+suit card, a Zonker, or a Parking Lot.
//! The two special kinds carry no suit. The constructors make any other
//! combination unrepresentable, and decoding a serialized card checks the
//! same rule.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::error::CardDecodeError;

/// The four standard suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    /// Parse a suit symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

/// Card ranks, including the two special ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    /// Special rank `Z`.
    Zonker,
    /// Special rank `P`.
    ParkingLot,
}

impl Rank {
    /// The thirteen standard ranks, Ace low.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank symbol as printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Zonker => "Z",
            Rank::ParkingLot => "P",
        }
    }

    /// Parse a rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "Z" => Some(Rank::Zonker),
            "P" => Some(Rank::ParkingLot),
            _ => Self::STANDARD.into_iter().find(|r| r.symbol() == symbol),
        }
    }

    /// Check if this is one of the thirteen standard ranks.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        !matches!(self, Rank::Zonker | Rank::ParkingLot)
    }
}

/// A single playing piece.
///
/// Equality compares every field including `id`, so two Zonkers are never
/// equal. Rules that care about the face compare `rank()` or `suit()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRecord", try_from = "CardRecord")]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Option<Suit>,
    face_up: bool,
}

impl Card {
    /// Create a standard card. Dealt face up.
    ///
    /// `rank` must be one of `Rank::STANDARD`; callers take it from there.
    #[must_use]
    pub(crate) fn standard(id: CardId, rank: Rank, suit: Suit) -> Self {
        debug_assert!(rank.is_standard(), "special ranks have no suit");
        Self {
            id,
            rank,
            suit: Some(suit),
            face_up: true,
        }
    }

    /// Create a Zonker.
    #[must_use]
    pub const fn zonker(id: CardId) -> Self {
        Self {
            id,
            rank: Rank::Zonker,
            suit: None,
            face_up: true,
        }
    }

    /// Create a Parking Lot.
    #[must_use]
    pub const fn parking_lot(id: CardId) -> Self {
        Self {
            id,
            rank: Rank::ParkingLot,
            suit: None,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Suit, `None` for Zonkers and Parking Lots.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub const fn is_zonker(&self) -> bool {
        matches!(self.rank, Rank::Zonker)
    }

    #[must_use]
    pub const fn is_parking_lot(&self) -> bool {
        matches!(self.rank, Rank::ParkingLot)
    }

    /// Check if the card is a Zonker or a Parking Lot.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        !self.rank.is_standard()
    }

}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = self.suit.map_or("", Suit::symbol);
        write!(f, "{}{}", self.rank.symbol(), suit)
    }
}

/// External shape of a card: symbols plus the three flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    /// Suit symbol, empty for special cards.
    pub suit: String,
    pub rank: String,
    pub is_zonker: bool,
    pub is_parking_lot: bool,
    pub face_up: bool,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            suit: card.suit.map_or("", Suit::symbol).to_string(),
            rank: card.rank.symbol().to_string(),
            is_zonker: card.is_zonker(),
            is_parking_lot: card.is_parking_lot(),
            face_up: card.face_up,
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CardDecodeError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let rank = Rank::from_symbol(&record.rank)
            .ok_or_else(|| CardDecodeError::UnknownRank(record.rank.clone()))?;

        let suit = if record.suit.is_empty() {
            None
        } else {
            Some(
                Suit::from_symbol(&record.suit)
                    .ok_or_else(|| CardDecodeError::UnknownSuit(record.suit.clone()))?,
            )
        };

        let consistent = match (rank, suit) {
            (Rank::Zonker, None) => record.is_zonker && !record.is_parking_lot,
            (Rank::ParkingLot, None) => record.is_parking_lot && !record.is_zonker,
            (r, Some(_)) if r.is_standard() => !record.is_zonker && !record.is_parking_lot,
            _ => false,
        };
        if !consistent {
            return Err(CardDecodeError::InconsistentKind(record.id));
        }

        Ok(Self {
            id: record.id,
            rank,
            suit,
            face_up: record.face_up,
        })
    }
}
