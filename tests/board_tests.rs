use broadside::{
    Board, BoardError, Coordinate, EngineConfig, Orientation, ShipKind, ShotOutcome,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_place_and_fire_sink() {
    let mut board = Board::new(EngineConfig::default()).unwrap();
    board.place("Carrier", Coordinate::new(0, 0), Orientation::Horizontal).unwrap();

    for c in 0..4 {
        assert_eq!(
            board.fire(Coordinate::new(0, c)).unwrap(),
            ShotOutcome::Hit("Carrier".into())
        );
    }
    // final hit should sink
    assert_eq!(
        board.fire(Coordinate::new(0, 4)).unwrap(),
        ShotOutcome::Sunk("Carrier".into())
    );
    assert!(board.is_sunk("Carrier"));
    assert!(board.all_sunk());

    // repeated shot triggers error
    assert_eq!(
        board.fire(Coordinate::new(0, 4)).unwrap_err(),
        BoardError::AlreadyFired(Coordinate::new(0, 4))
    );
    assert_eq!(board.fire(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_placement_errors() {
    let mut board = Board::new(EngineConfig::default()).unwrap();
    assert_eq!(
        board.place("Carrier", Coordinate::new(0, 6), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(0, 6))
    );
    board.place("Carrier", Coordinate::new(2, 2), Orientation::Vertical).unwrap();
    assert_eq!(
        board.place("Carrier", Coordinate::new(0, 0), Orientation::Vertical).unwrap_err(),
        BoardError::AlreadyPlaced("Carrier".into())
    );
    assert_eq!(
        board.place("Destroyer", Coordinate::new(4, 1), Orientation::Horizontal).unwrap_err(),
        BoardError::Overlaps
    );
    assert_eq!(
        board.place("Yacht", Coordinate::new(0, 0), Orientation::Vertical).unwrap_err(),
        BoardError::UnknownShipKind("Yacht".into())
    );
    assert_eq!(board.fire(Coordinate::new(10, 0)).unwrap_err(), BoardError::OutOfBounds(Coordinate::new(10, 0)));
}

#[test]
fn test_randomized_places_whole_fleet_without_overlap() {
    let config = EngineConfig::default();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::randomized(config.clone(), &mut rng).unwrap();
        let occupied = (0..10)
            .flat_map(|r| (0..10).map(move |c| Coordinate::new(r, c)))
            .filter(|&c| board.ship_at(c).is_some())
            .count();
        assert_eq!(occupied, config.total_ship_cells(), "all ships should be placed without overlap");
        assert_eq!(board.segments_afloat(), 17);
        for kind in &config.ship_kinds {
            let placement = board.placement(kind.name()).unwrap();
            assert!(placement.fits(10));
        }
    }
}

#[test]
fn test_random_placement_rejects_unknown_index() {
    let board = Board::new(EngineConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        board.random_placement(&mut rng, 5).unwrap_err(),
        BoardError::UnknownShipKind("#5".into())
    );
    assert!(board.random_placement(&mut rng, 4).is_ok());
}

#[test]
fn test_kinds_with_equal_length_sink_separately() {
    let mut board = Board::new(EngineConfig::default()).unwrap();
    board.place("Cruiser", Coordinate::new(0, 0), Orientation::Horizontal).unwrap();
    board.place("Submarine", Coordinate::new(1, 0), Orientation::Horizontal).unwrap();
    for c in 0..3 {
        board.fire(Coordinate::new(0, c)).unwrap();
    }
    assert!(board.is_sunk("Cruiser"));
    assert!(!board.is_sunk("Submarine"));
    assert!(!board.all_sunk());
}

#[test]
fn test_board_display() {
    let config = EngineConfig::new(3, vec![ShipKind::new("Skiff", 2)]);
    let mut board = Board::new(config).unwrap();
    board.place("Skiff", Coordinate::new(1, 0), Orientation::Horizontal).unwrap();
    board.fire(Coordinate::new(1, 0)).unwrap();
    board.fire(Coordinate::new(0, 2)).unwrap();
    assert_eq!(board.to_string(), ". . o \nX # . \n. . . ");
}
