//! Card identification.
//!
//! Every card in a deal has a unique `CardId`, assigned when the deck is
//! built. Identity is the id, never the face: two Zonkers look the same
//! but are different cards, and several moves compare ranks across suits.
//!
//! ## ID Layout
//!
//! IDs follow the canonical deck order:
//! - `0..52`: standard cards, suit-major (♠ ♥ ♦ ♣), rank-minor (A..K)
//! - `52..54`: Zonkers
//! - `54..56`: Parking Lots

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_raw() {
        assert!(CardId::new(3) < CardId::new(4));
        assert_eq!(CardId::from(7).raw(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(13);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
