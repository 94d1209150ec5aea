use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::{
    ai,
    common::StrategyError,
    config::EngineConfig,
    grid::{CellStatus, Coordinate, Grid},
};

use super::TargetingStrategy;

/// Fires at the cell most likely to hold a live ship, recomputing the
/// placement density from scratch every turn.
pub struct ProbabilityStrategy {
    config: EngineConfig,
    status: Grid<CellStatus>,
    alive: Vec<bool>,
    /// Confirmed hits per ship kind, in the order they were reported.
    hits_by_kind: Vec<Vec<Coordinate>>,
    unvisited: usize,
}

impl ProbabilityStrategy {
    pub fn new(config: EngineConfig) -> Result<Self, StrategyError> {
        config.validate()?;
        let status = Grid::new(config.grid_size, CellStatus::Unvisited);
        let kinds = config.ship_kinds.len();
        let unvisited = status.len();
        Ok(Self {
            config,
            status,
            alive: vec![true; kinds],
            hits_by_kind: vec![Vec::new(); kinds],
            unvisited,
        })
    }

    /// The strategy's view of the opponent board.
    pub fn status(&self) -> &Grid<CellStatus> {
        &self.status
    }

    /// Lengths of the ship kinds not yet reported sunk.
    pub fn alive_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.config
            .ship_kinds
            .iter()
            .zip(&self.alive)
            .filter(|&(_, &alive)| alive)
            .map(|(kind, _)| kind.length())
    }

    /// Confirmed hits recorded against `kind`.
    pub fn hits_for(&self, kind: &str) -> Result<&[Coordinate], StrategyError> {
        let (idx, _) = self.config.kind(kind)?;
        Ok(&self.hits_by_kind[idx])
    }

    /// Density grid for the current state.
    pub fn density(&self) -> Grid<u64> {
        ai::calc_density(&self.status, self.alive_lengths(), self.config.hit_bonus)
    }
}

impl TargetingStrategy for ProbabilityStrategy {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coordinate, StrategyError> {
        let density = self.density();
        let coord = ai::pick_max(&density, &self.status, rng).ok_or(StrategyError::PoolExhausted)?;
        log::debug!(
            "probability: firing at {} (density {})",
            coord,
            density.at(coord).unwrap_or(0)
        );
        self.status.set(coord, CellStatus::Pending)?;
        self.unvisited -= 1;
        Ok(coord)
    }

    fn report_outcome(
        &mut self,
        coord: Coordinate,
        hit: bool,
        kind: Option<&str>,
    ) -> Result<(), StrategyError> {
        let previous = *self.status.get(coord)?;
        let kind_idx = match kind {
            Some(name) => Some(self.config.kind(name)?.0),
            None => None,
        };
        // A settled cell never reverts; a sunk cell must not earn the bonus again.
        if matches!(previous, CellStatus::Hit | CellStatus::MissOrSunk) {
            log::debug!("probability: {} already settled as {:?}", coord, previous);
            return Ok(());
        }
        if previous.is_unvisited() {
            self.unvisited -= 1;
        }
        if hit {
            self.status.set(coord, CellStatus::Hit)?;
            match kind_idx {
                Some(idx) => self.hits_by_kind[idx].push(coord),
                None => log::warn!("probability: hit at {} reported without a ship kind", coord),
            }
        } else {
            self.status.set(coord, CellStatus::MissOrSunk)?;
        }
        Ok(())
    }

    fn report_sunk(&mut self, kind: &str) -> Result<(), StrategyError> {
        let (idx, _) = self.config.kind(kind)?;
        if !self.alive[idx] {
            log::debug!("probability: {} was already sunk", kind);
            return Ok(());
        }
        self.alive[idx] = false;
        for &coord in &self.hits_by_kind[idx] {
            self.status.set(coord, CellStatus::MissOrSunk)?;
        }
        log::debug!(
            "probability: {} sunk, {} cells now block placements",
            kind,
            self.hits_by_kind[idx].len()
        );
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.unvisited
    }
}
