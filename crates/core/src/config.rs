//! Configuration module - validated game parameters
//!
//! All tuning knobs of the engine live here so hosts can build variants
//! (bigger boards, denser mines, faster gravity) without touching the rules.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use tetrisweeper_types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FALL_INTERVAL, DEFAULT_FALL_INTERVAL_FLOOR,
    DEFAULT_INITIAL_EMPTY_PROB, DEFAULT_INITIAL_MINE_PROB, DEFAULT_INITIAL_OPENED_PROB,
    DEFAULT_MAX_FLAGS, DEFAULT_MINE_PROB, DEFAULT_OPENED_PROB, DEFAULT_SEED_ROWS,
};

/// Game parameters, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in columns.
    pub width: usize,
    /// Board height in rows.
    pub height: usize,
    /// Bottom rows pre-filled with random tiles at board setup.
    pub seed_rows: usize,
    /// Chance a seeded tile is left empty.
    pub initial_empty_prob: f64,
    /// Chance a seeded solid tile starts pre-opened.
    pub initial_opened_prob: f64,
    /// Chance a seeded unopened tile carries a mine.
    pub initial_mine_prob: f64,
    /// Chance a locked piece cell starts pre-opened.
    pub opened_prob: f64,
    /// Chance a locked unopened piece cell carries a mine.
    pub mine_prob: f64,
    /// Flag marks wrap back to zero once they exceed this count.
    pub max_flags: u8,
    /// Initial ticks between automatic one-row drops.
    pub fall_interval: u32,
    /// Lower bound the difficulty curve never crosses.
    pub fall_interval_floor: u32,
}

impl GameConfig {
    /// Validate, rejecting configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.seed_rows > self.height {
            return Err(ConfigError::SeedRowsOutOfRange);
        }
        for (name, p) in [
            ("initial_empty_prob", self.initial_empty_prob),
            ("initial_opened_prob", self.initial_opened_prob),
            ("initial_mine_prob", self.initial_mine_prob),
            ("opened_prob", self.opened_prob),
            ("mine_prob", self.mine_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidProbability(name));
            }
        }
        if self.fall_interval_floor == 0 || self.fall_interval < self.fall_interval_floor {
            return Err(ConfigError::InvalidFallInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed_rows: DEFAULT_SEED_ROWS,
            initial_empty_prob: DEFAULT_INITIAL_EMPTY_PROB,
            initial_opened_prob: DEFAULT_INITIAL_OPENED_PROB,
            initial_mine_prob: DEFAULT_INITIAL_MINE_PROB,
            opened_prob: DEFAULT_OPENED_PROB,
            mine_prob: DEFAULT_MINE_PROB,
            max_flags: DEFAULT_MAX_FLAGS,
            fall_interval: DEFAULT_FALL_INTERVAL,
            fall_interval_floor: DEFAULT_FALL_INTERVAL_FLOOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut config = GameConfig::default();
        config.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));

        let mut config = GameConfig::default();
        config.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_seed_rows_bounded_by_height() {
        let mut config = GameConfig::default();
        config.seed_rows = config.height + 1;
        assert_eq!(config.validate(), Err(ConfigError::SeedRowsOutOfRange));

        config.seed_rows = config.height;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_probability_range_checked() {
        let mut config = GameConfig::default();
        config.mine_prob = 1.2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidProbability("mine_prob"))
        );

        let mut config = GameConfig::default();
        config.initial_empty_prob = -0.1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidProbability("initial_empty_prob"))
        );
    }

    #[test]
    fn test_fall_interval_floor_checked() {
        let mut config = GameConfig::default();
        config.fall_interval_floor = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFallInterval));

        let mut config = GameConfig::default();
        config.fall_interval = config.fall_interval_floor - 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFallInterval));
    }
}
