//! Deterministic roguelike simulation core.
//!
//! `game-core` owns the canonical rules: seeded dungeon generation, entity
//! and item spawning, field-of-view computation, and the turn-resolution
//! state machine. It is purely synchronous and free of I/O; every random
//! decision draws from one session-owned [`rng::SeededRng`] stream, so a
//! seed fully determines a session. All state mutation flows through
//! [`engine::GameEngine`]; supporting crates read the types re-exported
//! here and render or orchestrate around them.
pub mod action;
pub mod config;
pub mod engine;
pub mod fov;
pub mod mapgen;
pub mod rng;
pub mod spawn;
pub mod state;

pub use action::{CardinalDirection, Intent};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, GameEvent, TurnOutcome};
pub use rng::SeededRng;
#[cfg(feature = "serde")]
pub use state::state_digest;
pub use state::{
    ActorState, EntitiesState, EntityId, GameState, Health, Inventory, ItemKind, ItemState, Phase,
    Position, Room, RoomList, Tile, TileGrid, TurnState, VisibilityState, WorldState,
};
