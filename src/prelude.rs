//! Commonly used types and utilities for ease of import.

pub use crate::{
    build_strategy, play_out, Board, Coordinate, Difficulty, EngineConfig, GameReport,
    ShotOutcome, StrategyError, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    ui::{render_board, render_density, render_status},
};
