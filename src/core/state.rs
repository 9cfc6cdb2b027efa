//! Session state: everything that changes during one game.
//!
//! ## SessionState
//!
//! - Market, Bankroll and Easy-Go pile
//! - Running score and strike count
//! - History of accepted moves
//! - The RNG that deals each new game
//!
//! Changed only through `FleaDevil::apply_move` (accepted moves), `reset`
//! and `add_strike`. Uses `im` persistent structures, so cloning a session
//! to try something out is O(1).
//!
//! ## SessionSnapshot
//!
//! Serializable copy of a session for save/load layers.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::rng::{GameRng, GameRngState};
use crate::cards::{build_deck, shuffle};
use crate::error::SnapshotError;
use crate::rules::MoveEffect;
use crate::zones::{Market, Pile};

/// State of one game in progress.
#[derive(Clone, Debug)]
pub struct SessionState {
    market: Market,
    bankroll: Pile,
    easy_go: Pile,
    score: i64,
    strikes: u32,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl PartialEq for SessionState {
    fn eq(&self, other: &Self) -> bool {
        self.market == other.market
            && self.bankroll == other.bankroll
            && self.easy_go == other.easy_go
            && self.score == other.score
            && self.strikes == other.strikes
            && self.history == other.history
            && self.rng.state() == other.rng.state()
    }
}

impl Eq for SessionState {}

impl SessionState {
    /// Deal a new game from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let market = deal(&mut rng);
        tracing::info!(seed, market = market.len(), "dealt new game");
        Self::with_market(market, rng)
    }

    /// Start from a prepared Market instead of a shuffled deck.
    ///
    /// `seed` drives later calls to `reset`.
    #[must_use]
    pub fn from_market(market: Market, seed: u64) -> Self {
        Self::with_market(market, GameRng::new(seed))
    }

    fn with_market(market: Market, rng: GameRng) -> Self {
        Self {
            market,
            bankroll: Pile::new(),
            easy_go: Pile::new(),
            score: 0,
            strikes: 0,
            history: Vector::new(),
            rng,
        }
    }

    /// Start a new game: full reshuffled deck, empty piles, zero score and strikes.
    ///
    /// The RNG stream continues, so consecutive games differ while the
    /// sequence of games stays reproducible from the original seed.
    pub fn reset(&mut self) {
        let market = deal(&mut self.rng);
        tracing::info!(seed = self.rng.seed(), market = market.len(), "reset game");
        *self = Self::with_market(market, self.rng.clone());
    }

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    #[must_use]
    pub fn bankroll(&self) -> &Pile {
        &self.bankroll
    }

    #[must_use]
    pub fn easy_go(&self) -> &Pile {
        &self.easy_go
    }

    /// Running score. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Record a strike. Moves never do this; the game-over loop does.
    pub fn add_strike(&mut self) -> u32 {
        self.strikes += 1;
        self.strikes
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Commit an accepted move. Returns the score delta applied.
    pub(crate) fn commit(&mut self, mv: &Move, effect: MoveEffect) -> i64 {
        let MoveEffect {
            market,
            score_delta,
            bankroll_additions,
            easy_go_additions,
        } = effect;

        self.market = market;
        self.bankroll.extend(bankroll_additions);
        self.easy_go.extend(easy_go_additions);
        self.score += score_delta;
        self.history.push_back(MoveRecord {
            sequence: self.history.len() as u32,
            action: mv.clone(),
            score_delta,
        });

        score_delta
    }

    /// Capture the session for saving.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            market: self.market.clone(),
            bankroll: self.bankroll.clone(),
            easy_go: self.easy_go.clone(),
            score: self.score,
            strikes: self.strikes,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Fails if a card id appears more than once across the Market and piles.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, SnapshotError> {
        let mut seen = FxHashSet::default();
        let all = snapshot
            .market
            .iter()
            .chain(snapshot.bankroll.iter())
            .chain(snapshot.easy_go.iter());
        for card in all {
            if !seen.insert(card.id()) {
                return Err(SnapshotError::DuplicateCard(card.id()));
            }
        }

        Ok(Self {
            market: snapshot.market,
            bankroll: snapshot.bankroll,
            easy_go: snapshot.easy_go,
            score: snapshot.score,
            strikes: snapshot.strikes,
            history: snapshot.history,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

fn deal(rng: &mut GameRng) -> Market {
    Market::from_cards(shuffle(&build_deck(), rng))
}

/// Serializable session contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub market: Market,
    pub bankroll: Pile,
    pub easy_go: Pile,
    pub score: i64,
    pub strikes: u32,
    pub history: Vector<MoveRecord>,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bincode. Does not validate; pass the result to
    /// `SessionState::restore`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
