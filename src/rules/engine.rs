//! Move engine: rule trait, rule registry, and the session driver.
//!
//! - `MoveRule`: one evaluator per move kind, pure over a `Market`
//! - `RuleBook`: which evaluator handles which kind
//! - `FleaDevil`: deals sessions and commits accepted moves

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{Arity, CardId, GameConfig, Move, MoveKind, ScoringConfig, SessionState};
use crate::zones::Market;

use super::moves::{Bargain, DevilHop, EasyGo, FleaHop, Hangout, Haul, WalkyTalky, ZonkOut};
use super::outcome::{MoveOutcome, MoveRejection, MoveResult};

/// A move evaluator.
///
/// ## Implementation Notes
///
/// - `evaluate` must not depend on anything but its arguments
/// - Check selection size first, then card presence, then the rule's own
///   predicate (`moves::locate` covers the first two)
/// - Return the complete new Market; never a partial one
pub trait MoveRule: std::fmt::Debug + Send + Sync {
    /// The move kind this rule evaluates.
    fn kind(&self) -> MoveKind;

    /// Required selection size.
    fn arity(&self) -> Arity {
        self.kind().arity()
    }

    /// Evaluate `selection` against `market`.
    fn evaluate(&self, market: &Market, selection: &[CardId]) -> MoveResult;
}

/// Registry of one rule per move kind.
///
/// ```
/// use flea_devil::core::ScoringConfig;
/// use flea_devil::rules::RuleBook;
///
/// let book = RuleBook::standard(&ScoringConfig::default());
/// assert_eq!(book.len(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleBook {
    rules: FxHashMap<MoveKind, Arc<dyn MoveRule>>,
}

impl RuleBook {
    /// Create an empty rule book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight built-in evaluators, scored from `scoring`.
    ///
    /// Devil Hop, Walky Talky, Zonk Out and Hangout refuse every selection
    /// once their checks pass; their scores are for the replacement rules
    /// an embedder registers with `with_rule`.
    #[must_use]
    pub fn standard(scoring: &ScoringConfig) -> Self {
        Self::new()
            .with_rule(Haul {
                per_card: scoring.delta(MoveKind::Haul),
            })
            .with_rule(Bargain {
                score: scoring.delta(MoveKind::Bargain),
            })
            .with_rule(FleaHop {
                score: scoring.delta(MoveKind::FleaHop),
            })
            .with_rule(DevilHop)
            .with_rule(WalkyTalky)
            .with_rule(ZonkOut)
            .with_rule(Hangout)
            .with_rule(EasyGo {
                score: scoring.delta(MoveKind::EasyGo),
            })
    }

    /// Register `rule`, replacing any rule for the same kind.
    #[must_use]
    pub fn with_rule(mut self, rule: impl MoveRule + 'static) -> Self {
        self.rules.insert(rule.kind(), Arc::new(rule));
        self
    }

    /// Rule for a kind.
    #[must_use]
    pub fn get(&self, kind: MoveKind) -> Option<&dyn MoveRule> {
        self.rules.get(&kind).map(|r| &**r)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The game: configuration plus rules.
///
/// Holds no per-game state; the caller owns each `SessionState`.
///
/// ```
/// use flea_devil::core::{GameConfig, Move};
/// use flea_devil::rules::FleaDevil;
///
/// let game = FleaDevil::new(GameConfig::default().with_seed(7));
/// let mut state = game.new_session();
///
/// let first = state.market().ids()[0];
/// let second = state.market().ids()[1];
/// let outcome = game.apply_move(&mut state, &Move::bargain(first, second));
///
/// assert!(outcome.accepted);
/// assert_eq!(state.score(), -1);
/// ```
#[derive(Clone, Debug)]
pub struct FleaDevil {
    config: GameConfig,
    rules: RuleBook,
}

impl Default for FleaDevil {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl FleaDevil {
    /// Create a game with the standard rule book.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rules = RuleBook::standard(&config.scoring);
        Self { config, rules }
    }

    /// Create a game with a custom rule book.
    #[must_use]
    pub fn with_rules(config: GameConfig, rules: RuleBook) -> Self {
        Self { config, rules }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Deal a fresh session from the configured seed.
    #[must_use]
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.config.seed)
    }

    /// Start a new game in `state`, keeping its RNG stream.
    pub fn reset(&self, state: &mut SessionState) {
        state.reset();
    }

    /// Evaluate a move without touching any state.
    #[must_use]
    pub fn evaluate(&self, market: &Market, mv: &Move) -> MoveResult {
        match self.rules.get(mv.kind) {
            Some(rule) => rule.evaluate(market, &mv.selection),
            None => MoveRejection::RuleUndefined(mv.kind).into(),
        }
    }

    /// Apply a move to `state`.
    ///
    /// On acceptance the Market, the side piles, the score and the history
    /// are updated together. On rejection `state` is untouched.
    pub fn apply_move(&self, state: &mut SessionState, mv: &Move) -> MoveOutcome {
        match self.evaluate(state.market(), mv) {
            MoveResult::Accepted(effect) => {
                let score_delta = state.commit(mv, effect);
                tracing::debug!(
                    kind = %mv.kind,
                    score_delta,
                    score = state.score(),
                    market = state.market().len(),
                    "move accepted"
                );
                MoveOutcome::accepted(mv.kind, score_delta, state.score())
            }
            MoveResult::Rejected(rejection) => {
                tracing::debug!(kind = %mv.kind, reason = %rejection, "move rejected");
                MoveOutcome::rejected(mv.kind, rejection, state.score())
            }
        }
    }

    /// Every currently accepted move among the fully defined kinds.
    ///
    /// Covers Haul (every consecutive same-rank run of two or more cards),
    /// Bargain (every adjacent pair), Flea Hop (every card with a suit-mate,
    /// specials counting as one suitless group) and Easy Go (every adjacent
    /// same-suit pair). Candidates are filtered
    /// through the rule book, so a replaced rule is respected.
    #[must_use]
    pub fn legal_moves(&self, state: &SessionState) -> Vec<Move> {
        let market = state.market();
        let ids = market.ids();
        let mut candidates = Vec::new();

        for (start, window) in ids.windows(2).enumerate() {
            let (a, b) = (window[0], window[1]);
            candidates.push(Move::bargain(a, b));
            candidates.push(Move::easy_go(a, b));

            // Longest same-rank run starting here; every prefix of length >= 2 is a Haul
            let rank = market.get(start).map(|c| c.rank());
            let run = market
                .iter()
                .skip(start)
                .take_while(|c| Some(c.rank()) == rank)
                .count();
            for len in 2..=run {
                candidates.push(Move::haul(&ids[start..start + len]));
            }
        }
        candidates.extend(ids.iter().map(|&id| Move::flea_hop(id)));

        candidates
            .into_iter()
            .filter(|mv| self.evaluate(market, mv).is_accepted())
            .collect()
    }
}
