use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{common::StrategyError, config::EngineConfig, grid::Coordinate};

use super::TargetingStrategy;

/// Fires at every cell exactly once, in a random order fixed at construction.
pub struct RandomStrategy {
    config: EngineConfig,
    pool: Vec<Coordinate>,
}

impl RandomStrategy {
    pub fn new(config: EngineConfig, rng: &mut SmallRng) -> Result<Self, StrategyError> {
        config.validate()?;
        let n = config.grid_size;
        let mut pool: Vec<Coordinate> = (0..n)
            .flat_map(|r| (0..n).map(move |c| Coordinate::new(r, c)))
            .collect();
        pool.shuffle(rng);
        Ok(Self { config, pool })
    }
}

impl TargetingStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Result<Coordinate, StrategyError> {
        let coord = self.pool.pop().ok_or(StrategyError::PoolExhausted)?;
        log::debug!("random: firing at {}", coord);
        Ok(coord)
    }

    fn report_outcome(
        &mut self,
        coord: Coordinate,
        _hit: bool,
        kind: Option<&str>,
    ) -> Result<(), StrategyError> {
        self.config.check_coordinate(coord)?;
        if let Some(name) = kind {
            self.config.kind(name)?;
        }
        Ok(())
    }

    fn report_sunk(&mut self, kind: &str) -> Result<(), StrategyError> {
        self.config.kind(kind).map(|_| ())
    }

    fn remaining(&self) -> usize {
        self.pool.len()
    }
}
