use seabattle::{
    build_random_board, Board, Cell, CellSet, Coordinate, Orientation, Ship, ShotOutcome,
    DEFAULT_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, STANDARD_FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: i32 = DEFAULT_BOARD_SIZE as i32;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut attempts = 0;
    loop {
        match build_random_board(&mut rng, DEFAULT_BOARD_SIZE, &STANDARD_FLEET, MAX_PLACEMENT_ATTEMPTS) {
            Ok(board) => return board,
            Err(_) => {
                attempts += 1;
                assert!(attempts < 100, "no board after 100 rebuilds");
            }
        }
    }
}

fn snapshot(board: &Board) -> (Vec<Option<Cell>>, String, CellSet, Vec<Ship>, usize) {
    let cells = (0..SIZE)
        .flat_map(|x| (0..SIZE).map(move |y| Coordinate::new(x, y)))
        .map(|c| board.cell(c))
        .collect();
    (
        cells,
        format!("{:?}", board),
        board.targeted().clone(),
        board.ships().to_vec(),
        board.destroyed_count(),
    )
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), STANDARD_FLEET.len());
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert_ne!(ca, cb);
                        prop_assert!(!ca.is_adjacent(cb), "{} touches {}", ca, cb);
                    }
                }
            }
        }
        let occupied = (0..SIZE)
            .flat_map(|x| (0..SIZE).map(move |y| Coordinate::new(x, y)))
            .filter(|&c| matches!(board.cell(c), Some(Cell::Occupied(_))))
            .count();
        prop_assert_eq!(occupied, STANDARD_FLEET.iter().sum::<usize>());
    }

    #[test]
    fn rejected_placement_changes_nothing(
        seed in any::<u64>(),
        x in -2..SIZE + 2,
        y in -2..SIZE + 2,
        orientation in orientation(),
        length in 1usize..5,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(DEFAULT_BOARD_SIZE);
        for _ in 0..rng.random_range(0..4) {
            let start = Coordinate::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            let ship = Ship::new(start, rng.random(), rng.random_range(1..4)).unwrap();
            let _ = board.place_ship(ship);
        }

        let before = snapshot(&board);
        let ship = Ship::new(Coordinate::new(x, y), orientation, length).unwrap();
        if board.place_ship(ship).is_err() {
            prop_assert_eq!(snapshot(&board), before);
        } else {
            prop_assert_eq!(board.ship_count(), before.3.len() + 1);
        }
    }

    #[test]
    fn second_shot_is_a_no_op(seed in any::<u64>(), x in 0..SIZE, y in 0..SIZE) {
        let mut board = random_board(seed);
        let target = Coordinate::new(x, y);
        let first = board.shoot(target).unwrap();
        prop_assert_ne!(first, ShotOutcome::AlreadyTargeted);
        prop_assert!(board.is_targeted(target));

        let after = snapshot(&board);
        prop_assert_eq!(board.shoot(target).unwrap(), ShotOutcome::AlreadyTargeted);
        prop_assert_eq!(snapshot(&board), after);
    }

    #[test]
    fn destroyed_count_only_grows(seed in any::<u64>(), shots in 1usize..80) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut destroyed = 0;
        let mut targeted = 0;
        for _ in 0..shots {
            let target = Coordinate::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            let outcome = board.shoot(target).unwrap();
            prop_assert!(board.destroyed_count() >= destroyed);
            prop_assert!(board.targeted().len() >= targeted);
            if outcome == ShotOutcome::Sunk {
                prop_assert_eq!(board.destroyed_count(), destroyed + 1);
            } else {
                prop_assert_eq!(board.destroyed_count(), destroyed);
            }
            destroyed = board.destroyed_count();
            targeted = board.targeted().len();
            prop_assert!(destroyed <= board.ship_count());
        }
        let health: usize = board.ships().iter().map(Ship::remaining_health).sum();
        let hits = board.targeted().iter().filter(|&c| board.cell(c) == Some(Cell::Hit)).count();
        prop_assert_eq!(health + hits, STANDARD_FLEET.iter().sum::<usize>());
    }
}
