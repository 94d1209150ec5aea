use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{
    common::StrategyError,
    config::EngineConfig,
    grid::{Coordinate, Grid},
};

use super::TargetingStrategy;

/// Two-mode search: blind hunting over one checkerboard color, switching to a
/// depth-first sweep around each confirmed hit.
///
/// Every ship spans at least two adjacent cells and therefore covers a cell
/// of each color, so hunting on a single color never misses a ship. Once the
/// hunt pool is drained the remaining color is swept as well, which keeps the
/// strategy total over the whole grid.
pub struct HuntTargetStrategy {
    config: EngineConfig,
    visited: Grid<bool>,
    /// Frontier around hits, drained LIFO.
    targets: Vec<Coordinate>,
    hunt: Vec<Coordinate>,
    residual: Vec<Coordinate>,
    unvisited: usize,
}

impl HuntTargetStrategy {
    pub fn new(config: EngineConfig, rng: &mut SmallRng) -> Result<Self, StrategyError> {
        config.validate()?;
        let visited = Grid::new(config.grid_size, false);
        let (mut hunt, mut residual): (Vec<_>, Vec<_>) =
            visited.coords().partition(Coordinate::is_even_parity);
        hunt.shuffle(rng);
        residual.shuffle(rng);
        let unvisited = visited.len();
        Ok(Self {
            config,
            visited,
            targets: Vec::new(),
            hunt,
            residual,
            unvisited,
        })
    }

    /// Cells still queued for hunting, all of one checkerboard color.
    pub fn hunt_pool(&self) -> &[Coordinate] {
        &self.hunt
    }

    /// Cells queued around confirmed hits; the last entry is fired next.
    pub fn target_stack(&self) -> &[Coordinate] {
        &self.targets
    }

    /// Whether a frontier around a hit is still pending.
    pub fn in_target_mode(&self) -> bool {
        self.targets.iter().any(|&c| !self.is_visited(c))
    }

    fn is_visited(&self, coord: Coordinate) -> bool {
        self.visited.at(coord).unwrap_or(true)
    }

    fn mark_visited(&mut self, coord: Coordinate) -> Result<(), StrategyError> {
        let cell = self.visited.get_mut(coord)?;
        if !*cell {
            *cell = true;
            self.unvisited -= 1;
        }
        Ok(())
    }

    /// Pop from `pool` until an unvisited cell turns up, discarding stale
    /// entries on the way.
    fn pop_fresh(pool: &mut Vec<Coordinate>, visited: &Grid<bool>) -> Option<Coordinate> {
        while let Some(coord) = pool.pop() {
            if visited.at(coord) == Some(false) {
                return Some(coord);
            }
        }
        None
    }
}

impl TargetingStrategy for HuntTargetStrategy {
    fn name(&self) -> &'static str {
        "hunt-target"
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Result<Coordinate, StrategyError> {
        let coord = if let Some(c) = Self::pop_fresh(&mut self.targets, &self.visited) {
            log::debug!("hunt-target: targeting {}", c);
            c
        } else if let Some(c) = Self::pop_fresh(&mut self.hunt, &self.visited) {
            log::debug!("hunt-target: hunting at {}", c);
            c
        } else if let Some(c) = Self::pop_fresh(&mut self.residual, &self.visited) {
            log::debug!("hunt-target: sweeping {}", c);
            c
        } else {
            return Err(StrategyError::PoolExhausted);
        };
        self.mark_visited(coord)?;
        Ok(coord)
    }

    fn report_outcome(
        &mut self,
        coord: Coordinate,
        hit: bool,
        kind: Option<&str>,
    ) -> Result<(), StrategyError> {
        self.visited.check_bounds(coord)?;
        if let Some(name) = kind {
            self.config.kind(name)?;
        }
        self.mark_visited(coord)?;
        if hit {
            let fresh: Vec<Coordinate> = self
                .visited
                .neighbors(coord)
                .filter(|&n| !self.is_visited(n))
                .collect();
            log::debug!("hunt-target: hit at {}, queueing {} neighbors", coord, fresh.len());
            self.targets.extend(fresh);
        }
        Ok(())
    }

    // Queued neighbors of a sunk ship stay on the stack; they resolve to
    // ordinary misses.
    fn report_sunk(&mut self, kind: &str) -> Result<(), StrategyError> {
        self.config.kind(kind).map(|_| ())
    }

    fn remaining(&self) -> usize {
        self.unvisited
    }
}
