mod common;
mod entities;
mod turn;
mod world;

pub use common::{EntityId, Health, Position};
pub use entities::{ActorState, EntitiesState, Inventory, ItemKind, ItemState};
pub use turn::{Phase, TurnState};
pub use world::{Room, RoomList, Tile, TileGrid, VisibilityState, WorldState};
