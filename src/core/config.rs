//! Game configuration.
//!
//! A game is configured once at startup:
//! - Seated players and their display names (1-4)
//! - Seed for the tile supply (`None` draws one from the OS)
//! - Scoring rule
//!
//! Letter values and the bonus layout are static tables, not configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Most players that can share one device.
pub const MAX_PLAYERS: usize = 4;

/// How a turn's placements turn into points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Sum of the placed tiles' face values. Bonus squares are ignored.
    #[default]
    FaceValue,
    /// Letter and word multipliers from the bonus layout are applied.
    Premium,
}

/// Complete game configuration.
///
/// ```
/// use scrabble_engine::core::{GameConfig, ScoringRule};
///
/// let config = GameConfig::new()
///     .with_players(["Ana", "Ben"])
///     .with_seed(7)
///     .with_scoring(ScoringRule::FaceValue);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.player_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names in seating order.
    pub player_names: Vec<String>,

    /// Tile supply seed.
    pub seed: Option<u64>,

    /// Scoring rule applied at end of turn.
    pub scoring: ScoringRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: vec![
                "You".to_string(),
                "Player 2".to_string(),
                "Player 3".to_string(),
                "Player 4".to_string(),
            ],
            seed: None,
            scoring: ScoringRule::default(),
        }
    }
}

impl GameConfig {
    /// Four seats, entropy seed, face-value scoring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the seated players.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Pin the tile supply seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check seat count and names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount {
                count,
                max: MAX_PLAYERS,
            });
        }

        if let Some(seat) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::BlankName { seat });
        }

        Ok(())
    }
}
