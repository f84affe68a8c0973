//! Offline generation verifier.
//!
//! Runs generation and spawning for a seed and checks structural
//! expectations on the result: a connected dungeon with a reasonable floor
//! area and no items embedded in walls. Useful as a smoke test after rule
//! changes and as a CI gate; it never drives a live session.

use game_core::GameState;
use serde::Serialize;

/// Findings from one self-check run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelfCheckReport {
    pub seed: i64,
    pub rooms: usize,
    pub floor_tiles: usize,
    pub enemies: usize,
    pub items: usize,
    /// Items whose tile is not floor. Always zero for a correct spawner.
    pub items_on_walls: usize,
    pub passed: bool,
}

/// Generates a session worth of world state and audits it.
pub fn run_self_check(seed: i64) -> SelfCheckReport {
    let state = GameState::new_session(seed);

    let rooms = state.world.rooms.len();
    let floor_tiles = state.world.grid.floor_count();
    let items_on_walls = state
        .entities
        .items
        .iter()
        .filter(|item| !state.world.grid.is_floor(item.position))
        .count();

    let passed = rooms >= 1 && floor_tiles >= 100 && items_on_walls == 0;

    tracing::info!(
        seed,
        rooms,
        floor_tiles,
        items_on_walls,
        passed,
        "self-check complete"
    );

    SelfCheckReport {
        seed,
        rooms,
        floor_tiles,
        enemies: state.entities.enemies.len(),
        items: state.entities.items.len(),
        items_on_walls,
        passed,
    }
}
