//! Game configuration types.
//!
//! - `ScoringConfig`: score delta for each move kind
//! - `GameConfig`: seed plus scoring
//!
//! Defaults reproduce the standard table: Haul earns one point per card,
//! Bargain and Easy Go cost one, Devil Hop and Walky Talky cost three.

use serde::{Deserialize, Serialize};

use super::action::MoveKind;

/// Score delta applied by each accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per card removed by a Haul.
    pub haul_per_card: i64,
    /// Bargain (swap two adjacent cards).
    pub bargain: i64,
    /// Flea Hop.
    pub flea_hop: i64,
    /// Devil Hop.
    pub devil_hop: i64,
    /// Walky Talky.
    pub walky_talky: i64,
    /// Zonk Out.
    pub zonk_out: i64,
    /// Hangout.
    pub hangout: i64,
    /// Easy Go.
    pub easy_go: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            haul_per_card: 1,
            bargain: -1,
            flea_hop: 0,
            devil_hop: -3,
            walky_talky: -3,
            zonk_out: 0,
            hangout: 0,
            easy_go: -1,
        }
    }
}

impl ScoringConfig {
    /// Flat delta for a move kind.
    ///
    /// Haul scales with the selection, so this returns its per-card value.
    #[must_use]
    pub fn delta(&self, kind: MoveKind) -> i64 {
        match kind {
            MoveKind::Haul => self.haul_per_card,
            MoveKind::Bargain => self.bargain,
            MoveKind::FleaHop => self.flea_hop,
            MoveKind::DevilHop => self.devil_hop,
            MoveKind::WalkyTalky => self.walky_talky,
            MoveKind::ZonkOut => self.zonk_out,
            MoveKind::Hangout => self.hangout,
            MoveKind::EasyGo => self.easy_go,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the session RNG.
    /// Same seed deals the same Market.
    pub seed: u64,

    /// Score deltas per move kind.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scoring: ScoringConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom scoring.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.scoring.haul_per_card, 1);
        assert_eq!(config.scoring.bargain, -1);
        assert_eq!(config.scoring.easy_go, -1);
    }

    #[test]
    fn test_delta_table() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.delta(MoveKind::Haul), 1);
        assert_eq!(scoring.delta(MoveKind::Bargain), -1);
        assert_eq!(scoring.delta(MoveKind::FleaHop), 0);
        assert_eq!(scoring.delta(MoveKind::DevilHop), -3);
        assert_eq!(scoring.delta(MoveKind::WalkyTalky), -3);
        assert_eq!(scoring.delta(MoveKind::ZonkOut), 0);
        assert_eq!(scoring.delta(MoveKind::Hangout), 0);
        assert_eq!(scoring.delta(MoveKind::EasyGo), -1);
    }

    #[test]
    fn test_builder_pattern() {
        let scoring = ScoringConfig {
            bargain: -2,
            ..ScoringConfig::default()
        };
        let config = GameConfig::default().with_seed(123).with_scoring(scoring);

        assert_eq!(config.seed, 123);
        assert_eq!(config.scoring.bargain, -2);
    }

    #[test]
    fn test_serialization_defaults_scoring() {
        let config: GameConfig = serde_json::from_str(r#"{"seed":7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.scoring, ScoringConfig::default());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
