// Density estimation for the probability-driven opponent.
// Scores are exact integers so tied cells compare equal.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    grid::{CellStatus, Coordinate, Grid},
    ship::{Orientation, Placement},
};

/// Fold one confirmed hit into a placement's weight.
///
/// Horizontal placements accumulate the bonus additively and vertical ones
/// multiplicatively. The two rules rank cells differently and opponents have
/// always played with both, so they are kept as they are.
#[inline]
pub fn apply_hit_bonus(orientation: Orientation, weight: u64, bonus: u64) -> u64 {
    match orientation {
        Orientation::Horizontal => weight.saturating_add(bonus),
        Orientation::Vertical => weight.saturating_mul(bonus),
    }
}

/// Weight of one placement, or `None` when it leaves the grid or crosses a
/// miss or a sunk ship.
pub fn placement_weight(
    status: &Grid<CellStatus>,
    placement: &Placement,
    hit_bonus: u64,
) -> Option<u64> {
    if !placement.fits(status.size()) {
        return None;
    }
    let mut weight = 1u64;
    for cell in placement.cells() {
        match status.at(cell)? {
            CellStatus::MissOrSunk => return None,
            CellStatus::Hit => weight = apply_hit_bonus(placement.orientation, weight, hit_bonus),
            CellStatus::Unvisited | CellStatus::Pending => {}
        }
    }
    Some(weight)
}

/// Score every cell by the weighted number of feasible placements of the
/// remaining ships that cover it.
///
/// Only `Unvisited` cells collect density; hits, misses and pending shots
/// stay at zero since they are never fired at again.
pub fn calc_density<I>(status: &Grid<CellStatus>, lengths: I, hit_bonus: u64) -> Grid<u64>
where
    I: IntoIterator<Item = usize>,
{
    let mut density = Grid::new(status.size(), 0u64);

    for len in lengths {
        if len == 0 {
            continue;
        }
        for anchor in status.coords() {
            for orientation in Orientation::ALL {
                let placement = Placement::new(anchor, orientation, len);
                let Some(weight) = placement_weight(status, &placement, hit_bonus) else {
                    continue;
                };
                for cell in placement.cells() {
                    if status.at(cell) == Some(CellStatus::Unvisited) {
                        if let Ok(score) = density.get_mut(cell) {
                            *score = score.saturating_add(weight);
                        }
                    }
                }
            }
        }
    }

    density
}

/// Unvisited cells sharing the highest density, row-major.
pub fn max_density_cells(density: &Grid<u64>, status: &Grid<CellStatus>) -> Vec<Coordinate> {
    let mut best = 0u64;
    let mut ties = Vec::new();
    for (coord, cell) in status.iter() {
        if !cell.is_unvisited() {
            continue;
        }
        let score = density.at(coord).unwrap_or(0);
        if ties.is_empty() || score > best {
            ties.clear();
            best = score;
            ties.push(coord);
        } else if score == best {
            ties.push(coord);
        }
    }
    ties
}

/// Choose uniformly among the highest-density unvisited cells. Returns
/// `None` once no unvisited cell is left.
pub fn pick_max<R: Rng + ?Sized>(
    density: &Grid<u64>,
    status: &Grid<CellStatus>,
    rng: &mut R,
) -> Option<Coordinate> {
    max_density_cells(density, status).choose(rng).copied()
}
