//! Maps a difficulty label to a freshly constructed strategy.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;

use crate::{
    common::StrategyError,
    config::EngineConfig,
    strategy::{HuntTargetStrategy, ProbabilityStrategy, RandomStrategy, TargetingStrategy},
};

/// Opponent difficulty offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniform random search.
    Easy,
    /// Hunt/target search.
    #[default]
    Medium,
    /// Placement density search.
    Hard,
}

impl FromStr for Difficulty {
    type Err = StrategyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Easy),
            "medium" | "hunt" | "hunt-target" => Ok(Difficulty::Medium),
            "hard" | "probability" => Ok(Difficulty::Hard),
            _ => Err(StrategyError::UnknownDifficulty(label.into())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// Build the strategy for `difficulty`, one instance per game.
pub fn build_strategy(
    difficulty: Difficulty,
    config: EngineConfig,
    rng: &mut SmallRng,
) -> Result<Box<dyn TargetingStrategy>, StrategyError> {
    log::debug!("building {} opponent", difficulty);
    let strategy: Box<dyn TargetingStrategy> = match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::new(config, rng)?),
        Difficulty::Medium => Box::new(HuntTargetStrategy::new(config, rng)?),
        Difficulty::Hard => Box::new(ProbabilityStrategy::new(config)?),
    };
    Ok(strategy)
}

/// Parse `label` and build the matching strategy.
pub fn strategy_for_label(
    label: &str,
    config: EngineConfig,
    rng: &mut SmallRng,
) -> Result<Box<dyn TargetingStrategy>, StrategyError> {
    build_strategy(label.parse()?, config, rng)
}
