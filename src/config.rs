use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::StrategyError;
use crate::grid::Coordinate;
use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;

/// Default multiplier adjustment for every confirmed hit a placement covers.
pub const HIT_BONUS: u64 = 4;

/// The classic five-ship fleet.
pub fn standard_fleet() -> Vec<ShipKind> {
    vec![
        ShipKind::new("Carrier", 5),
        ShipKind::new("Battleship", 4),
        ShipKind::new("Cruiser", 3),
        ShipKind::new("Submarine", 3),
        ShipKind::new("Destroyer", 2),
    ]
}

/// Grid dimension and ship catalogue handed to every strategy at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    pub grid_size: usize,
    pub ship_kinds: Vec<ShipKind>,
    pub hit_bonus: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: BOARD_SIZE,
            ship_kinds: standard_fleet(),
            hit_bonus: HIT_BONUS,
        }
    }
}

impl EngineConfig {
    pub fn new(grid_size: usize, ship_kinds: Vec<ShipKind>) -> Self {
        Self {
            grid_size,
            ship_kinds,
            hit_bonus: HIT_BONUS,
        }
    }

    pub fn with_hit_bonus(mut self, hit_bonus: u64) -> Self {
        self.hit_bonus = hit_bonus;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.grid_size == 0 {
            return Err(StrategyError::InvalidConfig("grid size must be positive".into()));
        }
        if self.ship_kinds.is_empty() {
            return Err(StrategyError::InvalidConfig("ship catalogue is empty".into()));
        }
        if self.hit_bonus == 0 {
            return Err(StrategyError::InvalidConfig("hit bonus must be positive".into()));
        }
        for (i, kind) in self.ship_kinds.iter().enumerate() {
            if kind.length() == 0 || kind.length() > self.grid_size {
                return Err(StrategyError::InvalidConfig(format!(
                    "ship `{}` has length {} on a {}x{} grid",
                    kind.name(),
                    kind.length(),
                    self.grid_size,
                    self.grid_size
                )));
            }
            if self.ship_kinds[..i].iter().any(|k| k.name() == kind.name()) {
                return Err(StrategyError::InvalidConfig(format!(
                    "ship kind `{}` is listed twice",
                    kind.name()
                )));
            }
        }
        Ok(())
    }

    /// Resolve a kind name to its catalogue index and definition.
    pub fn kind(&self, name: &str) -> Result<(usize, &ShipKind), StrategyError> {
        self.ship_kinds
            .iter()
            .enumerate()
            .find(|(_, k)| k.name() == name)
            .ok_or_else(|| StrategyError::UnknownShipKind(name.into()))
    }

    pub fn check_coordinate(&self, coord: Coordinate) -> Result<(), StrategyError> {
        if coord.row < self.grid_size && coord.col < self.grid_size {
            Ok(())
        } else {
            Err(StrategyError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.grid_size,
            })
        }
    }

    /// Total number of ship segments in the catalogue.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_kinds.iter().map(ShipKind::length).sum()
    }

    /// Parse a JSON configuration; absent fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
    }
}
