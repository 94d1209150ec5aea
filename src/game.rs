use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{GameError, ShotOutcome},
    grid::Coordinate,
    strategy::TargetingStrategy,
};

/// Summary of one strategy sweeping one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub strategy: String,
    pub shots: usize,
    pub hits: usize,
    /// Kinds in the order they went down.
    pub sunk: Vec<String>,
    /// Every coordinate fired at, in order.
    pub trail: Vec<Coordinate>,
    pub won: bool,
}

/// Fire one shot chosen by `strategy` and feed the outcome back to it.
pub fn take_turn(
    strategy: &mut dyn TargetingStrategy,
    board: &mut Board,
    rng: &mut SmallRng,
) -> Result<(Coordinate, ShotOutcome), GameError> {
    let coord = strategy.select_target(rng)?;
    let outcome = board.fire(coord)?;
    strategy.report_outcome(coord, outcome.is_hit(), outcome.kind())?;
    if let ShotOutcome::Sunk(name) = &outcome {
        log::info!("{} sank the {} at {}", strategy.name(), name, coord.label());
        strategy.report_sunk(name)?;
    }
    Ok((coord, outcome))
}

/// Let `strategy` fire at `board` until the fleet is gone.
///
/// Fails with [`GameError::ShotLimit`] if ships are still afloat after
/// `shot_limit` shots.
pub fn play_out(
    strategy: &mut dyn TargetingStrategy,
    board: &mut Board,
    rng: &mut SmallRng,
    shot_limit: usize,
) -> Result<GameReport, GameError> {
    let mut report = GameReport {
        strategy: strategy.name().to_string(),
        shots: 0,
        hits: 0,
        sunk: Vec::new(),
        trail: Vec::new(),
        won: false,
    };

    while !board.all_sunk() {
        if report.shots >= shot_limit {
            return Err(GameError::ShotLimit(report.shots));
        }
        let (coord, outcome) = take_turn(strategy, board, rng)?;
        report.shots += 1;
        report.trail.push(coord);
        if outcome.is_hit() {
            report.hits += 1;
        }
        if let ShotOutcome::Sunk(name) = outcome {
            report.sunk.push(name);
        }
    }

    report.won = true;
    log::info!("{} cleared the board in {} shots", report.strategy, report.shots);
    Ok(report)
}
