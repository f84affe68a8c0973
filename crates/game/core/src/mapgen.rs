//! Procedural dungeon generation.
//!
//! The generator makes a fixed number of placement attempts rather than
//! retrying until a target room count succeeds. The accepted room count is
//! therefore probabilistic but fully determined by the seed, and the exact
//! draw sequence below is part of the reproducibility contract: width,
//! height, x, y per attempt, in that order, whether or not the candidate is
//! accepted.

use crate::config::GameConfig;
use crate::rng::SeededRng;
use crate::state::{Position, Room, RoomList, Tile, TileGrid};

/// Generates the tile grid and accepted room list.
///
/// At least one room is always accepted (the first candidate never has
/// anything to collide with), and room 0 is reserved for the player start.
pub fn generate(rng: &mut SeededRng) -> (TileGrid, RoomList) {
    let mut grid = TileGrid::filled_with_walls(GameConfig::MAP_WIDTH, GameConfig::MAP_HEIGHT);
    let mut rooms = RoomList::new();

    for _ in 0..GameConfig::MAX_ROOMS {
        let width = rng.next_range(GameConfig::ROOM_MIN_SIZE, GameConfig::ROOM_MAX_SIZE);
        let height = rng.next_range(GameConfig::ROOM_MIN_SIZE, GameConfig::ROOM_MAX_SIZE);
        // Keep the candidate fully inside the grid with a 1-tile border.
        let x = rng.next_range(1, GameConfig::MAP_WIDTH - width - 1);
        let y = rng.next_range(1, GameConfig::MAP_HEIGHT - height - 1);

        let candidate = Room::new(x, y, width, height);

        // Rejected candidates are skipped, not retried.
        if rooms
            .iter()
            .any(|room| candidate.intersects_inflated(room))
        {
            continue;
        }

        carve_room(&mut grid, &candidate);

        if let Some(previous) = rooms.last() {
            connect_rooms(&mut grid, previous, &candidate);
        }

        rooms.push(candidate);
    }

    (grid, rooms)
}

fn carve_room(grid: &mut TileGrid, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set_tile(Position::new(x, y), Tile::Floor);
        }
    }
}

/// Carves an L-shaped corridor between two room centers: one horizontal
/// segment at the first room's center row, then one vertical segment at the
/// second room's center column. The order is fixed.
fn connect_rooms(grid: &mut TileGrid, from: &Room, to: &Room) {
    let a = from.center();
    let b = to.center();

    for x in a.x.min(b.x)..=a.x.max(b.x) {
        grid.set_tile(Position::new(x, a.y), Tile::Floor);
    }
    for y in a.y.min(b.y)..=a.y.max(b.y) {
        grid.set_tile(Position::new(b.x, y), Tile::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_accepts_at_least_one_room() {
        for seed in 1..50 {
            let mut rng = SeededRng::new(seed);
            let (_, rooms) = generate(&mut rng);
            assert!(!rooms.is_empty(), "seed {seed} produced no rooms");
        }
    }

    #[test]
    fn accepted_rooms_never_intersect() {
        let mut rng = SeededRng::new(12345);
        let (_, rooms) = generate(&mut rng);
        for (i, a) in rooms.iter().enumerate() {
            for b in rooms.iter().skip(i + 1) {
                assert!(!a.intersects_inflated(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn rooms_stay_inside_the_border() {
        for seed in [1, 42, 12345, 999_999] {
            let mut rng = SeededRng::new(seed);
            let (_, rooms) = generate(&mut rng);
            for room in &rooms {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width < GameConfig::MAP_WIDTH);
                assert!(room.y + room.height < GameConfig::MAP_HEIGHT);
            }
        }
    }

    #[test]
    fn room_interiors_are_carved_to_floor() {
        let mut rng = SeededRng::new(42);
        let (grid, rooms) = generate(&mut rng);
        for room in &rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert!(grid.is_floor(Position::new(x, y)));
                }
            }
        }
    }

    #[test]
    fn consecutive_room_centers_share_a_corridor() {
        let mut rng = SeededRng::new(12345);
        let (grid, rooms) = generate(&mut rng);
        for pair in rooms.windows(2) {
            let (a, b) = (pair[0].center(), pair[1].center());
            // The horizontal leg runs at a.y, the vertical leg at b.x.
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                assert!(grid.is_floor(Position::new(x, a.y)));
            }
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                assert!(grid.is_floor(Position::new(b.x, y)));
            }
        }
    }

    #[test]
    fn floor_tile_regression_threshold() {
        // Regression threshold carried over from the original self-check.
        let mut rng = SeededRng::new(12345);
        let (grid, _) = generate(&mut rng);
        assert!(grid.floor_count() >= 100);
    }

    #[test]
    fn generation_is_seed_deterministic() {
        let mut a = SeededRng::new(2024);
        let mut b = SeededRng::new(2024);
        assert_eq!(generate(&mut a), generate(&mut b));
    }
}
