//! Move representation: kind + ordered card selection.
//!
//! A move is a verb (`MoveKind`) plus the cards the player picked, in the
//! order they were picked. Order matters: a Haul must list its cards in
//! Market order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardId;

/// The eight move types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKind {
    /// Remove a run of same-rank, Market-adjacent cards.
    Haul,
    /// Swap two adjacent cards.
    Bargain,
    /// Advance a card to its cyclic successor within its suit.
    FleaHop,
    /// Four cards, one of each suit.
    DevilHop,
    /// Three-card move.
    WalkyTalky,
    /// Two-card discard involving Zonkers.
    ZonkOut,
    /// Keep a group of cards in the Bankroll.
    Hangout,
    /// Discard two adjacent cards of one suit.
    EasyGo,
}

impl MoveKind {
    /// Every move kind, in button order.
    pub const ALL: [MoveKind; 8] = [
        MoveKind::Haul,
        MoveKind::Bargain,
        MoveKind::FleaHop,
        MoveKind::DevilHop,
        MoveKind::WalkyTalky,
        MoveKind::ZonkOut,
        MoveKind::Hangout,
        MoveKind::EasyGo,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Haul => "Haul",
            MoveKind::Bargain => "Bargain",
            MoveKind::FleaHop => "Flea Hop",
            MoveKind::DevilHop => "Devil Hop",
            MoveKind::WalkyTalky => "Walky Talky",
            MoveKind::ZonkOut => "Zonk Out",
            MoveKind::Hangout => "Hangout",
            MoveKind::EasyGo => "Easy Go",
        }
    }

    /// Required selection size.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            MoveKind::Haul | MoveKind::Hangout => Arity::AtLeast(2),
            MoveKind::Bargain | MoveKind::ZonkOut | MoveKind::EasyGo => Arity::Exactly(2),
            MoveKind::FleaHop => Arity::Exactly(1),
            MoveKind::WalkyTalky => Arity::Exactly(3),
            MoveKind::DevilHop => Arity::Exactly(4),
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection-size requirement of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly `n` cards.
    Exactly(usize),
    /// `n` or more cards.
    AtLeast(usize),
}

impl Arity {
    /// Check if a selection of `count` cards satisfies this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(1) => f.write_str("exactly 1 card"),
            Arity::Exactly(n) => write!(f, "exactly {n} cards"),
            Arity::AtLeast(n) => write!(f, "at least {n} cards"),
        }
    }
}

/// A proposed move.
///
/// ```
/// use flea_devil::core::{CardId, Move, MoveKind};
///
/// let hop = Move::new(MoveKind::FleaHop, &[CardId(5)]);
/// assert_eq!(hop.selection.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Move type.
    pub kind: MoveKind,

    /// Selected cards in pick order.
    /// SmallVec holds up to 4 ids (Devil Hop) without heap allocation.
    pub selection: SmallVec<[CardId; 4]>,
}

impl Move {
    /// Create a move from a kind and an ordered selection.
    #[must_use]
    pub fn new(kind: MoveKind, selection: &[CardId]) -> Self {
        Self {
            kind,
            selection: SmallVec::from_slice(selection),
        }
    }

    /// Haul the given cards.
    #[must_use]
    pub fn haul(selection: &[CardId]) -> Self {
        Self::new(MoveKind::Haul, selection)
    }

    /// Bargain two cards.
    #[must_use]
    pub fn bargain(a: CardId, b: CardId) -> Self {
        Self::new(MoveKind::Bargain, &[a, b])
    }

    /// Flea Hop one card.
    #[must_use]
    pub fn flea_hop(card: CardId) -> Self {
        Self::new(MoveKind::FleaHop, &[card])
    }

    /// Easy Go two cards.
    #[must_use]
    pub fn easy_go(a: CardId, b: CardId) -> Self {
        Self::new(MoveKind::EasyGo, &[a, b])
    }
}

/// An accepted move as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Sequence number within the game (0-based).
    pub sequence: u32,

    /// The move that was accepted.
    pub action: Move,

    /// Score change it produced.
    pub score_delta: i64,
}
