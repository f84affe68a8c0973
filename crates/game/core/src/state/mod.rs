//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the dungeon, entities,
//! visibility, and turn bookkeeping. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
pub mod digest;
pub mod types;

#[cfg(feature = "serde")]
pub use digest::state_digest;
pub use types::{
    ActorState, EntitiesState, EntityId, Health, Inventory, ItemKind, ItemState, Phase, Position,
    Room, RoomList, Tile, TileGrid, TurnState, VisibilityState, WorldState,
};

use crate::rng::SeededRng;
use crate::{fov, mapgen, spawn};

/// Canonical snapshot of one deterministic session.
///
/// Owns the RNG stream exclusively; no other randomness exists anywhere in
/// the simulation. Created whole by [`GameState::new_session`] and replaced
/// whole on restart, never partially reset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The seed this session was created from. Never modified.
    pub seed: i64,
    /// The single random stream feeding generation, spawning, and combat.
    pub rng: SeededRng,
    /// Sequential entity id allocator; ids are never reused.
    next_entity_id: u32,
    pub turn: TurnState,
    pub entities: EntitiesState,
    pub world: WorldState,
}

impl GameState {
    /// Generates a complete session from a seed: dungeon, player start,
    /// enemy and item spawns, and the initial visibility pass. The call
    /// order against the RNG stream is fixed and must not change, since it
    /// is exactly what the seed reproduces.
    pub fn new_session(seed: i64) -> Self {
        let mut rng = SeededRng::new(seed);
        let (grid, rooms) = mapgen::generate(&mut rng);

        // Room 0 is guaranteed and reserved for the player start.
        let start = rooms
            .first()
            .expect("generation always accepts the first candidate room")
            .center();

        let mut state = Self {
            seed,
            rng,
            next_entity_id: 1,
            turn: TurnState::default(),
            entities: EntitiesState::new(ActorState::player(start)),
            world: WorldState::new(grid, rooms),
        };

        spawn::spawn_enemies(&mut state);
        spawn::spawn_items(&mut state);

        fov::recompute(
            &state.world.grid,
            state.entities.player.position,
            &mut state.world.visibility,
        );

        state
    }

    /// Assembles a state from prebuilt components, e.g. for handcrafted
    /// test fixtures. The id allocator resumes after the highest id present.
    pub fn from_parts(
        seed: i64,
        rng: SeededRng,
        turn: TurnState,
        entities: EntitiesState,
        world: WorldState,
    ) -> Self {
        let highest = entities
            .enemies
            .iter()
            .map(|e| e.id.0)
            .chain(entities.items.iter().map(|i| i.id.0))
            .max()
            .unwrap_or(0);
        Self {
            seed,
            rng,
            next_entity_id: highest + 1,
            turn,
            entities,
            world,
        }
    }

    /// Allocates a fresh unique [`EntityId`].
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self
            .next_entity_id
            .checked_add(1)
            .expect("EntityId overflow");
        id
    }

    /// True if `position` is inside the grid and not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.world.grid.is_floor(position)
    }

    /// True if an actor can step onto `position` right now.
    pub fn can_enter(&self, position: Position) -> bool {
        self.is_walkable(position) && !self.entities.is_occupied(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_unique_and_monotonic() {
        let mut state = GameState::new_session(1);
        let a = state.allocate_entity_id();
        let b = state.allocate_entity_id();
        assert!(b.0 > a.0);
    }

    #[test]
    fn new_session_places_player_in_first_room() {
        let state = GameState::new_session(12345);
        let start_room = state.world.rooms[0];
        assert!(start_room.contains(state.entities.player.position));
        assert!(state.is_walkable(state.entities.player.position));
    }

    #[test]
    fn new_session_is_reproducible() {
        let a = GameState::new_session(777);
        let b = GameState::new_session(777);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = GameState::new_session(1);
        let b = GameState::new_session(2);
        assert_ne!(a, b);
    }
}
