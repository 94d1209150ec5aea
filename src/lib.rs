#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod selector;
mod ship;
pub mod strategy;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{calc_density, pick_max};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, level_from, LOG_ENV};
pub use selector::*;
pub use ship::*;
pub use strategy::{
    HuntTargetStrategy, ProbabilityStrategy, RandomStrategy, TargetingStrategy,
};
