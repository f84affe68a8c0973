//! Enemy and item placement.
//!
//! Runs once at session creation, after generation, consuming the same RNG
//! stream: [`spawn_enemies`] first, then [`spawn_items`]. That call order is
//! part of the reproducibility contract.
//!
//! Placement failures are not errors: an entity whose retry budget runs out
//! is skipped silently, so the spawned count may be lower than drawn.

use crate::config::GameConfig;
use crate::state::{ActorState, GameState, ItemKind, ItemState, Position, Room};

/// Fixed item catalog spawned per session, in this order.
const ITEM_CATALOG: [(ItemKind, u32); 3] = [
    (ItemKind::Medkit, 3),
    (ItemKind::Battery, 2),
    (ItemKind::Emp, 2),
];

/// Spawns between 5 and 9 drones into rooms other than the start room.
///
/// Each drone draws a room index from `[1, room_count)` and then tries up to
/// 50 positions inside that room for a floor tile not occupied by the player
/// or an already-placed drone.
pub fn spawn_enemies(state: &mut GameState) {
    // A single-room map leaves no legal spawn rooms; drawing a room index
    // from [1, 1) would violate the RNG precondition, so spawn nothing.
    if state.world.rooms.len() <= 1 {
        return;
    }

    let count = state
        .rng
        .next_range(GameConfig::ENEMY_COUNT_MIN, GameConfig::ENEMY_COUNT_MAX);

    for _ in 0..count {
        let room_index = state.rng.next_range(1, state.world.rooms.len() as i32) as usize;
        let room = state.world.rooms[room_index];

        if let Some(position) = try_place(state, &room, occupied_by_actor) {
            let id = state.allocate_entity_id();
            state.entities.enemies.push(ActorState::drone(id, position));
        }
    }
}

/// Spawns the fixed item catalog with the same room-then-retry algorithm.
///
/// Occupation only considers actors, so items may stack on one tile; pickup
/// later resolves stacks in insertion order.
pub fn spawn_items(state: &mut GameState) {
    if state.world.rooms.len() <= 1 {
        return;
    }

    for (kind, count) in ITEM_CATALOG {
        for _ in 0..count {
            let room_index = state.rng.next_range(1, state.world.rooms.len() as i32) as usize;
            let room = state.world.rooms[room_index];

            if let Some(position) = try_place(state, &room, occupied_by_actor) {
                let id = state.allocate_entity_id();
                state.entities.items.push(ItemState::new(id, position, kind));
            }
        }
    }
}

fn occupied_by_actor(state: &GameState, position: Position) -> bool {
    state.entities.is_occupied(position)
}

/// Draws positions inside `room` until one lands on an unoccupied floor tile
/// or the retry budget is exhausted.
fn try_place(
    state: &mut GameState,
    room: &Room,
    occupied: fn(&GameState, Position) -> bool,
) -> Option<Position> {
    for _ in 0..GameConfig::SPAWN_RETRY_BUDGET {
        let x = state.rng.next_range(room.x, room.x + room.width);
        let y = state.rng.next_range(room.y, room.y + room.height);
        let position = Position::new(x, y);

        if state.world.grid.is_floor(position) && !occupied(state, position) {
            return Some(position);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    #[test]
    fn enemy_count_stays_in_drawn_range() {
        for seed in [1, 42, 12345, 31337] {
            let state = GameState::new_session(seed);
            assert!(state.entities.enemies.len() < GameConfig::ENEMY_COUNT_MAX as usize);
        }
    }

    #[test]
    fn no_item_lands_on_a_wall_tile() {
        for seed in [1, 42, 12345, 31337, 555] {
            let state = GameState::new_session(seed);
            for item in &state.entities.items {
                assert!(
                    state.world.grid.is_floor(item.position),
                    "seed {seed}: {:?} spawned on a wall",
                    item.kind
                );
            }
        }
    }

    #[test]
    fn enemies_spawn_on_distinct_floor_tiles() {
        for seed in [1, 42, 12345] {
            let state = GameState::new_session(seed);
            for (i, a) in state.entities.enemies.iter().enumerate() {
                assert!(state.world.grid.is_floor(a.position));
                assert_ne!(a.position, state.entities.player.position);
                for b in state.entities.enemies.iter().skip(i + 1) {
                    assert_ne!(a.position, b.position);
                }
            }
        }
    }

    #[test]
    fn enemies_never_spawn_in_the_start_room() {
        let state = GameState::new_session(12345);
        let start_room = state.world.rooms[0];
        for enemy in &state.entities.enemies {
            assert!(!start_room.contains(enemy.position));
        }
    }

    #[test]
    fn spawned_entities_have_unique_ids() {
        let state = GameState::new_session(42);
        let mut ids: Vec<EntityId> = state
            .entities
            .enemies
            .iter()
            .map(|e| e.id)
            .chain(state.entities.items.iter().map(|i| i.id))
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn item_catalog_bounds_the_item_count() {
        let budget: u32 = ITEM_CATALOG.iter().map(|(_, count)| count).sum();
        for seed in [1, 42, 12345] {
            let state = GameState::new_session(seed);
            assert!(state.entities.items.len() <= budget as usize);
        }
    }
}
