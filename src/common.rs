//! Common types for the targeting engine: shot outcomes and error enums.

use alloc::string::String;
use thiserror::Error;

use crate::grid::Coordinate;

/// Result of firing at a cell of the authoritative board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot missed all ships.
    Miss,
    /// The shot hit an undepleted ship segment of the named kind.
    Hit(String),
    /// The shot sank the named kind.
    Sunk(String),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Name of the kind struck, if any.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(name) | ShotOutcome::Sunk(name) => Some(name),
        }
    }
}

/// Contract violations reported by a targeting strategy.
///
/// None of these are transient: each one means the caller drove the
/// strategy incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// No unvisited coordinate is left to fire at.
    #[error("no unvisited coordinate remains; more shots requested than cells exist")]
    PoolExhausted,
    /// A ship kind outside the configured catalogue was reported.
    #[error("unknown ship kind `{0}`")]
    UnknownShipKind(String),
    /// A coordinate outside `[0, size)` was referenced.
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The engine configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The difficulty label does not name a strategy.
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

/// Errors returned by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The configuration handed to the board is unusable.
    #[error(transparent)]
    Config(#[from] StrategyError),
    /// Coordinate or placement leaves the grid.
    #[error("{0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// Named ship kind is not in the catalogue.
    #[error("unknown ship kind `{0}`")]
    UnknownShipKind(String),
    /// Attempted to place a kind that is already placed.
    #[error("ship `{0}` is already placed")]
    AlreadyPlaced(String),
    /// Ship placement overlaps another ship.
    #[error("placement overlaps another ship")]
    Overlaps,
    /// The cell was already fired at.
    #[error("{0} was already fired at")]
    AlreadyFired(Coordinate),
    /// Random placement gave up.
    #[error("unable to place ship `{0}`")]
    UnableToPlace(String),
}

/// Errors raised while driving a strategy against a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The fleet was still afloat after the allowed number of shots.
    #[error("fleet still afloat after {0} shots")]
    ShotLimit(usize),
}
