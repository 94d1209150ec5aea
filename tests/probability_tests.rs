use std::collections::{HashMap, HashSet};

use broadside::ai::{apply_hit_bonus, max_density_cells, placement_weight};
use broadside::{
    calc_density, pick_max, CellStatus, Coordinate, EngineConfig, Grid, Orientation, Placement,
    ProbabilityStrategy, ShipKind, StrategyError, TargetingStrategy,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single_kind(size: usize, name: &str, length: usize) -> EngineConfig {
    EngineConfig::new(size, vec![ShipKind::new(name, length)])
}

fn rows(grid: &Grid<u64>) -> Vec<Vec<u64>> {
    (0..grid.size())
        .map(|r| {
            (0..grid.size())
                .map(|c| grid.at(Coordinate::new(r, c)).unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn test_hit_bonus_rules() {
    assert_eq!(apply_hit_bonus(Orientation::Horizontal, 1, 4), 5);
    assert_eq!(apply_hit_bonus(Orientation::Horizontal, 5, 4), 9);
    assert_eq!(apply_hit_bonus(Orientation::Vertical, 1, 4), 4);
    assert_eq!(apply_hit_bonus(Orientation::Vertical, 4, 4), 16);
}

#[test]
fn test_empty_board_density() {
    let status = Grid::new(3, CellStatus::Unvisited);
    let density = calc_density(&status, [2], 4);
    assert_eq!(rows(&density), vec![vec![2, 3, 2], vec![3, 4, 3], vec![2, 3, 2]]);
}

#[test]
fn test_single_hit_scores_horizontal_additively_and_vertical_multiplicatively() {
    let mut ai = ProbabilityStrategy::new(single_kind(3, "Destroyer", 2)).unwrap();
    ai.report_outcome(Coordinate::new(1, 1), true, Some("Destroyer")).unwrap();
    assert_eq!(
        rows(&ai.density()),
        vec![vec![2, 6, 2], vec![7, 0, 7], vec![2, 6, 2]]
    );
    let mut rng = SmallRng::seed_from_u64(1);
    let next = ai.select_target(&mut rng).unwrap();
    assert!(next == Coordinate::new(1, 0) || next == Coordinate::new(1, 2));
}

#[test]
fn test_two_hits_vertical_outscores_horizontal() {
    let mut status = Grid::new(3, CellStatus::Unvisited);
    status.set(Coordinate::new(0, 1), CellStatus::Hit).unwrap();
    status.set(Coordinate::new(1, 1), CellStatus::Hit).unwrap();
    let density = calc_density(&status, [3], 4);
    // vertical 1 * 4 * 4, plus one empty horizontal run
    assert_eq!(density.at(Coordinate::new(2, 1)), Some(17));

    let mut status = Grid::new(3, CellStatus::Unvisited);
    status.set(Coordinate::new(1, 0), CellStatus::Hit).unwrap();
    status.set(Coordinate::new(1, 1), CellStatus::Hit).unwrap();
    let density = calc_density(&status, [3], 4);
    // horizontal 1 + 4 + 4, plus one empty vertical run
    assert_eq!(density.at(Coordinate::new(1, 2)), Some(10));
}

#[test]
fn test_first_hit_mid_ship_targets_a_neighbor() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut ai = ProbabilityStrategy::new(single_kind(10, "Carrier", 5)).unwrap();
    ai.report_outcome(Coordinate::new(3, 4), true, Some("Carrier")).unwrap();
    let next = ai.select_target(&mut rng).unwrap();
    let neighbors = [
        Coordinate::new(2, 4),
        Coordinate::new(4, 4),
        Coordinate::new(3, 3),
        Coordinate::new(3, 5),
    ];
    assert!(neighbors.contains(&next), "{next} is not adjacent to (3, 4)");
    assert_eq!(next, Coordinate::new(3, 5));
}

#[test]
fn test_miss_blocks_every_crossing_placement() {
    let mut status = Grid::new(5, CellStatus::Unvisited);
    status.set(Coordinate::new(2, 2), CellStatus::MissOrSunk).unwrap();
    let density = calc_density(&status, [5], 4);
    for (coord, &score) in density.iter() {
        let expected = if coord == Coordinate::new(2, 2) {
            0
        } else if coord.row == 2 || coord.col == 2 {
            1
        } else {
            2
        };
        assert_eq!(score, expected, "density at {coord}");
    }
}

#[test]
fn test_sunk_ship_cells_become_blockers() {
    let mut ai = ProbabilityStrategy::new(EngineConfig::default()).unwrap();
    for col in 2..=6 {
        ai.report_outcome(Coordinate::new(3, col), true, Some("Carrier")).unwrap();
    }
    assert_eq!(ai.hits_for("Carrier").unwrap().len(), 5);
    assert_eq!(ai.status().at(Coordinate::new(3, 4)), Some(CellStatus::Hit));

    ai.report_sunk("Carrier").unwrap();
    for col in 2..=6 {
        assert_eq!(ai.status().at(Coordinate::new(3, col)), Some(CellStatus::MissOrSunk));
    }
    assert_eq!(ai.alive_lengths().collect::<Vec<_>>(), vec![4, 3, 3, 2]);
    // no remaining placement may pass through the wreck
    let across = Placement::new(Coordinate::new(3, 0), Orientation::Horizontal, 4);
    let down = Placement::new(Coordinate::new(1, 4), Orientation::Vertical, 3);
    let clear = Placement::new(Coordinate::new(4, 0), Orientation::Horizontal, 4);
    assert_eq!(placement_weight(ai.status(), &across, 4), None);
    assert_eq!(placement_weight(ai.status(), &down, 4), None);
    assert_eq!(placement_weight(ai.status(), &clear, 4), Some(1));
    assert_eq!(ai.density().at(Coordinate::new(3, 4)), Some(0));

    // a second report is harmless
    ai.report_sunk("Carrier").unwrap();
    assert_eq!(
        ai.report_sunk("Dreadnought").unwrap_err(),
        StrategyError::UnknownShipKind("Dreadnought".into())
    );
}

#[test]
fn test_repeated_report_on_sunk_cell_is_ignored() {
    let mut ai = ProbabilityStrategy::new(EngineConfig::default()).unwrap();
    ai.report_outcome(Coordinate::new(0, 0), true, Some("Destroyer")).unwrap();
    ai.report_outcome(Coordinate::new(0, 1), true, Some("Destroyer")).unwrap();
    ai.report_sunk("Destroyer").unwrap();

    ai.report_outcome(Coordinate::new(0, 0), true, Some("Destroyer")).unwrap();
    assert_eq!(ai.status().at(Coordinate::new(0, 0)), Some(CellStatus::MissOrSunk));
    assert_eq!(
        ai.hits_for("Destroyer").unwrap(),
        &[Coordinate::new(0, 0), Coordinate::new(0, 1)]
    );
    assert_eq!(ai.remaining(), 98);
}

#[test]
fn test_settled_cells_never_flip() {
    let mut ai = ProbabilityStrategy::new(EngineConfig::default()).unwrap();
    let miss = Coordinate::new(5, 5);
    ai.report_outcome(miss, false, None).unwrap();
    ai.report_outcome(miss, true, Some("Cruiser")).unwrap();
    assert_eq!(ai.status().at(miss), Some(CellStatus::MissOrSunk));
    assert!(ai.hits_for("Cruiser").unwrap().is_empty());

    let hit = Coordinate::new(2, 2);
    ai.report_outcome(hit, true, Some("Cruiser")).unwrap();
    ai.report_outcome(hit, false, None).unwrap();
    ai.report_outcome(hit, true, Some("Cruiser")).unwrap();
    assert_eq!(ai.status().at(hit), Some(CellStatus::Hit));
    assert_eq!(ai.hits_for("Cruiser").unwrap(), &[hit]);
    assert_eq!(ai.remaining(), 98);
}

#[test]
fn test_hit_without_kind_stays_a_hit() {
    let mut ai = ProbabilityStrategy::new(EngineConfig::default()).unwrap();
    ai.report_outcome(Coordinate::new(0, 0), true, None).unwrap();
    assert_eq!(ai.status().at(Coordinate::new(0, 0)), Some(CellStatus::Hit));
    assert!(ai.hits_for("Destroyer").unwrap().is_empty());
}

#[test]
fn test_selected_cell_is_pending_until_reported() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut ai = ProbabilityStrategy::new(EngineConfig::default()).unwrap();
    let first = ai.select_target(&mut rng).unwrap();
    assert_eq!(ai.status().at(first), Some(CellStatus::Pending));
    let second = ai.select_target(&mut rng).unwrap();
    assert_ne!(first, second);
    ai.report_outcome(first, false, None).unwrap();
    assert_eq!(ai.status().at(first), Some(CellStatus::MissOrSunk));
    assert_eq!(ai.remaining(), 98);
}

#[test]
fn test_probability_sweeps_whole_grid() {
    let mut rng = SmallRng::seed_from_u64(31);
    let mut ai = ProbabilityStrategy::new(single_kind(4, "Cruiser", 3)).unwrap();
    let mut seen = HashSet::new();
    for _ in 0..16 {
        let coord = ai.select_target(&mut rng).unwrap();
        assert!(seen.insert(coord));
        ai.report_outcome(coord, false, None).unwrap();
    }
    assert_eq!(ai.select_target(&mut rng).unwrap_err(), StrategyError::PoolExhausted);
}

#[test]
fn test_tie_break_spreads_over_max_cells_only() {
    let mut density = Grid::new(4, 0u64);
    let mut status = Grid::new(4, CellStatus::Unvisited);
    let tied = [Coordinate::new(0, 3), Coordinate::new(2, 1), Coordinate::new(3, 3)];
    for (i, coord) in density.coords().collect::<Vec<_>>().into_iter().enumerate() {
        density.set(coord, (i % 5) as u64).unwrap();
    }
    for &coord in &tied {
        density.set(coord, 9).unwrap();
    }
    // a fired cell with a top score is never a candidate
    density.set(Coordinate::new(1, 1), 12).unwrap();
    status.set(Coordinate::new(1, 1), CellStatus::MissOrSunk).unwrap();

    assert_eq!(max_density_cells(&density, &status), tied.to_vec());

    let mut rng = SmallRng::seed_from_u64(1234);
    let mut counts: HashMap<Coordinate, usize> = HashMap::new();
    for _ in 0..600 {
        let pick = pick_max(&density, &status, &mut rng).unwrap();
        *counts.entry(pick).or_default() += 1;
    }
    assert_eq!(counts.len(), tied.len());
    for coord in tied {
        assert!(counts[&coord] > 0, "{coord} never chosen");
    }
}

#[test]
fn test_pick_max_with_nothing_left() {
    let density = Grid::new(2, 3u64);
    let status = Grid::new(2, CellStatus::MissOrSunk);
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(pick_max(&density, &status, &mut rng), None);
}
