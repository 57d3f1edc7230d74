//! Game configuration.
//!
//! Board size, per-kind placement budget, and the two resolution policy
//! points. Loaded from TOML; every field is optional and falls back to the
//! standard 8x8 setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{DistanceMetric, UnitKind};
use crate::placement::Budgets;
use crate::resolve::ResolutionMode;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 8;

/// Largest board accepted, in cells.
pub const MAX_CELLS: usize = 1 << 20;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("board {width}x{height} exceeds the limit of {max} cells", max = MAX_CELLS)]
    BoardTooLarge { width: usize, height: usize },
}

/// Units of each kind a player may place over the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub archer: u32,
    pub warrior: u32,
    pub ogre: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        BudgetConfig {
            archer: 2,
            warrior: 2,
            ogre: 1,
        }
    }
}

impl BudgetConfig {
    pub fn get(&self, kind: UnitKind) -> u32 {
        match kind {
            UnitKind::Archer => self.archer,
            UnitKind::Warrior => self.warrior,
            UnitKind::Ogre => self.ogre,
        }
    }
}

/// Complete setup for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub metric: DistanceMetric,
    pub mode: ResolutionMode,
    pub budget: BudgetConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            metric: DistanceMetric::default(),
            mode: ResolutionMode::default(),
            budget: BudgetConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Starting budgets: both players get the same allowance.
    pub fn budgets(&self) -> Budgets {
        Budgets::uniform(|kind| self.budget.get(kind))
    }
}
