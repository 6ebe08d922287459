use seabattle::{
    build_random_board, BuildError, Cell, CellSetError, Coordinate, Game, GameConfig, Phase,
    Side, DEFAULT_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, STANDARD_FLEET, TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

fn occupied_cells(board: &seabattle::Board) -> usize {
    let size = board.size() as i32;
    (0..size)
        .flat_map(|x| (0..size).map(move |y| Coordinate::new(x, y)))
        .filter(|&c| matches!(board.cell(c), Some(Cell::Occupied(_))))
        .count()
}

#[test]
fn test_standard_fleet_build() {
    let mut built = 0;
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        match build_random_board(&mut rng, DEFAULT_BOARD_SIZE, &STANDARD_FLEET, MAX_PLACEMENT_ATTEMPTS) {
            Ok(board) => {
                built += 1;
                assert_eq!(board.ship_count(), STANDARD_FLEET.len());
                assert_eq!(occupied_cells(&board), TOTAL_SHIP_CELLS);
                assert_eq!(board.phase(), Phase::Shooting);
                assert!(board.targeted().is_empty());
                assert_eq!(board.destroyed_count(), 0);
                let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
                assert_eq!(lengths, STANDARD_FLEET.to_vec());
            }
            Err(e) => assert!(matches!(e, BuildError::AttemptsExhausted { .. }), "{}", e),
        }
    }
    assert!(built > 0, "no seed produced a board");
}

#[test]
fn test_zero_attempts_places_nothing() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = build_random_board(&mut rng, DEFAULT_BOARD_SIZE, &STANDARD_FLEET, 0).unwrap_err();
    assert_eq!(
        err,
        BuildError::AttemptsExhausted {
            attempts: 0,
            placed: 0,
            fleet: 7
        }
    );
}

#[test]
fn test_single_cell_board() {
    let mut rng = SmallRng::seed_from_u64(9);
    let board = build_random_board(&mut rng, 1, &[1], 1).unwrap();
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(Cell::Occupied(0)));
}

#[test]
fn test_crowded_board_runs_out_of_attempts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let err = build_random_board(&mut rng, 2, &[1, 1], 50).unwrap_err();
    assert_eq!(
        err,
        BuildError::AttemptsExhausted {
            attempts: 50,
            placed: 1,
            fleet: 2
        }
    );
}

#[test]
fn test_zero_length_entry_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let err = build_random_board(&mut rng, 6, &[1, 0], 100).unwrap_err();
    assert_eq!(err, BuildError::InvalidFleet { index: 1 });
}

#[test]
fn test_oversized_grid_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let err = build_random_board(&mut rng, usize::MAX, &[1], 1).unwrap_err();
    assert!(matches!(err, BuildError::Grid(CellSetError::SizeTooLarge { .. })));
}

#[test]
fn test_empty_fleet_builds_empty_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = build_random_board(&mut rng, 4, &[], 0).unwrap();
    assert_eq!(board.ship_count(), 0);
    assert_eq!(board.phase(), Phase::Shooting);
}

#[test]
fn test_same_seed_same_fleet() {
    let build = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        build_random_board(&mut rng, DEFAULT_BOARD_SIZE, &STANDARD_FLEET, MAX_PLACEMENT_ATTEMPTS)
            .map(|board| board.ships().to_vec())
    };
    for seed in [7u64, 42, 1234] {
        assert_eq!(build(seed), build(seed));
    }
}

#[test]
fn test_game_random_builds_both_boards() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let game = Game::random(&mut rng, &GameConfig::default()).unwrap();
    for side in [Side::Human, Side::Computer] {
        let board = game.board(side);
        assert_eq!(board.ship_count(), STANDARD_FLEET.len());
        assert_eq!(occupied_cells(board), GameConfig::default().total_ship_cells());
        assert!(board.targeted().is_empty());
    }
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.shots(), 0);
}

#[test]
fn test_impossible_config_gives_up() {
    let mut rng = SmallRng::seed_from_u64(5);
    let config = GameConfig {
        size: 2,
        fleet: vec![1, 1],
        max_attempts: 10,
        max_rebuilds: 3,
    };
    let err = Game::random(&mut rng, &config).err().unwrap();
    assert_eq!(err, BuildError::RebuildsExhausted { rebuilds: 3 });

    let config = GameConfig {
        fleet: vec![2, 0],
        ..GameConfig::default()
    };
    let err = Game::random(&mut rng, &config).err().unwrap();
    assert_eq!(err, BuildError::InvalidFleet { index: 1 });
}
