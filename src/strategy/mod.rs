//! Targeting strategies for the computer opponent
//!
//! This module defines the TargetingStrategy trait and its implementations:
//! - RandomStrategy: uniform search without repetition
//! - HuntTargetStrategy: parity-pruned hunting plus a frontier stack around hits
//! - ProbabilityStrategy: density estimation over feasible ship placements

use rand::rngs::SmallRng;

use crate::common::StrategyError;
use crate::grid::Coordinate;

/// Interface implemented by every opponent behavior.
///
/// A driver calls `select_target` once per turn, fires the shot, then feeds
/// the result back through `report_outcome` (and `report_sunk` when the shot
/// finished a ship) before asking again.
pub trait TargetingStrategy: Send {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Choose the next cell to fire at. The cell is marked visited
    /// immediately, so it is never returned twice.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coordinate, StrategyError>;

    /// Inform the strategy of the result of firing at `coord`. `kind` names
    /// the ship struck when the caller knows it.
    fn report_outcome(
        &mut self,
        coord: Coordinate,
        hit: bool,
        kind: Option<&str>,
    ) -> Result<(), StrategyError>;

    /// Inform the strategy that every cell of `kind` has been destroyed.
    fn report_sunk(&mut self, kind: &str) -> Result<(), StrategyError>;

    /// Number of cells the strategy could still return.
    fn remaining(&self) -> usize;
}

pub mod hunt_target;
pub mod probability;
pub mod random;

pub use hunt_target::HuntTargetStrategy;
pub use probability::ProbabilityStrategy;
pub use random::RandomStrategy;
