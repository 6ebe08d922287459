use seabattle::{Coordinate, Orientation, PlacementError, Ship};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_zero_length_rejected() {
    let err = Ship::new(Coordinate::new(0, 0), Orientation::Horizontal, 0).unwrap_err();
    assert_eq!(err, PlacementError::EmptyShip);
}

#[test]
fn test_horizontal_steps_along_x() {
    let ship = Ship::new(Coordinate::new(1, 2), Orientation::Horizontal, 3).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(1, 2), Coordinate::new(2, 2), Coordinate::new(3, 2)]
    );
}

#[test]
fn test_vertical_steps_along_y() {
    let ship = Ship::new(Coordinate::new(1, 2), Orientation::Vertical, 3).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(1, 2), Coordinate::new(1, 3), Coordinate::new(1, 4)]
    );
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(0, 0), Orientation::Vertical, 2).unwrap();
    assert!(ship.is_hit_by(Coordinate::new(0, 0)));
    assert!(ship.is_hit_by(Coordinate::new(0, 1)));
    assert!(!ship.is_hit_by(Coordinate::new(1, 0)));
    assert!(!ship.is_hit_by(Coordinate::new(0, 2)));
}

#[test]
fn test_new_ship_is_intact() {
    let ship = Ship::new(Coordinate::new(4, 4), Orientation::Horizontal, 2).unwrap();
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.remaining_health(), 2);
    assert!(!ship.is_destroyed());
    assert_eq!(ship.start(), Coordinate::new(4, 4));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_random_orientation_covers_both() {
    let mut rng = SmallRng::seed_from_u64(7);
    let samples: Vec<Orientation> = (0..200).map(|_| rng.random()).collect();
    assert!(samples.contains(&Orientation::Horizontal));
    assert!(samples.contains(&Orientation::Vertical));
}

#[test]
fn test_neighbors_ring() {
    let around: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    assert_eq!(around.len(), 8);
    assert!(around.contains(&Coordinate::new(-1, -1)));
    assert!(around.contains(&Coordinate::new(1, 1)));
    assert!(!around.contains(&Coordinate::new(0, 0)));
    assert!(Coordinate::new(2, 2).is_adjacent(Coordinate::new(3, 1)));
    assert!(!Coordinate::new(2, 2).is_adjacent(Coordinate::new(2, 2)));
    assert!(!Coordinate::new(2, 2).is_adjacent(Coordinate::new(4, 2)));
}
