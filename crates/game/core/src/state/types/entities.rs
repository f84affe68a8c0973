use crate::config::GameConfig;

use super::{EntityId, Health, Position};

/// Closed set of item kinds. `UseItem` matches exhaustively, so adding a
/// kind is a compile-time-checked change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Restores 30 hp, capped at the current maximum.
    Medkit,
    /// Raises maximum and current hp by 10 together.
    Battery,
    /// Damages every currently visible enemy by 20.
    Emp,
}

/// Fixed-capacity inventory addressed by slot index.
///
/// Slots may be empty in the middle; pickup fills the lowest empty index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: [Option<ItemKind>; GameConfig::MAX_INVENTORY_SLOTS],
}

impl Inventory {
    pub const SLOT_COUNT: usize = GameConfig::MAX_INVENTORY_SLOTS;

    pub fn slots(&self) -> &[Option<ItemKind>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<ItemKind> {
        self.slots.get(index).copied().flatten()
    }

    /// Index of the lowest empty slot, if any.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    /// Stores `kind` into the lowest empty slot and returns its index.
    pub fn store(&mut self, kind: ItemKind) -> Option<usize> {
        let index = self.first_empty_slot()?;
        self.slots[index] = Some(kind);
        Some(index)
    }

    /// Empties `index` and returns what was held there.
    pub fn clear_slot(&mut self, index: usize) -> Option<ItemKind> {
        self.slots.get_mut(index).and_then(Option::take)
    }
}

/// An actor on the grid: the player or one enemy drone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub position: Position,
    pub health: Health,
    pub attack: i32,
}

impl ActorState {
    pub fn new(id: EntityId, position: Position, max_hp: i32, attack: i32) -> Self {
        Self {
            id,
            position,
            health: Health::full(max_hp),
            attack,
        }
    }

    pub fn player(position: Position) -> Self {
        Self::new(
            EntityId::PLAYER,
            position,
            GameConfig::PLAYER_MAX_HP,
            GameConfig::PLAYER_ATTACK,
        )
    }

    pub fn drone(id: EntityId, position: Position) -> Self {
        Self::new(
            id,
            position,
            GameConfig::DRONE_MAX_HP,
            GameConfig::DRONE_ATTACK,
        )
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

/// An item lying on the ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub position: Position,
    pub kind: ItemKind,
}

impl ItemState {
    pub fn new(id: EntityId, position: Position, kind: ItemKind) -> Self {
        Self { id, position, kind }
    }
}

/// Aggregate state for every entity in the dungeon.
///
/// Enemies and items keep insertion order; that order is the AI iteration
/// order and the pickup preference on stacked tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub inventory: Inventory,
    pub enemies: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: ActorState) -> Self {
        Self {
            player,
            inventory: Inventory::default(),
            enemies: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn enemy(&self, id: EntityId) -> Option<&ActorState> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn enemy_at(&self, position: Position) -> Option<&ActorState> {
        self.enemies.iter().find(|enemy| enemy.position == position)
    }

    /// First item at `position` in insertion order.
    pub fn item_at(&self, position: Position) -> Option<&ItemState> {
        self.items.iter().find(|item| item.position == position)
    }

    /// Removes an enemy by id, preserving the order of the rest.
    pub fn remove_enemy(&mut self, id: EntityId) -> bool {
        let before = self.enemies.len();
        self.enemies.retain(|enemy| enemy.id != id);
        self.enemies.len() != before
    }

    /// Removes an item by id.
    pub fn remove_item(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// True if the player or any enemy stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.player.position == position || self.enemy_at(position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_fills_lowest_empty_slot_first() {
        let mut inv = Inventory::default();
        assert_eq!(inv.store(ItemKind::Medkit), Some(0));
        assert_eq!(inv.store(ItemKind::Battery), Some(1));
        inv.clear_slot(0);
        assert_eq!(inv.store(ItemKind::Emp), Some(0));
        assert_eq!(inv.store(ItemKind::Medkit), Some(2));
        assert!(inv.is_full());
        assert_eq!(inv.store(ItemKind::Medkit), None);
    }

    #[test]
    fn remove_enemy_keeps_insertion_order() {
        let player = ActorState::player(Position::ORIGIN);
        let mut entities = EntitiesState::new(player);
        for i in 1..=3 {
            entities
                .enemies
                .push(ActorState::drone(EntityId(i), Position::new(i as i32, 0)));
        }
        assert!(entities.remove_enemy(EntityId(2)));
        let ids: Vec<u32> = entities.enemies.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!entities.remove_enemy(EntityId(2)));
    }

    #[test]
    fn item_kind_round_trips_through_strings() {
        use std::str::FromStr;
        assert_eq!(ItemKind::Medkit.to_string(), "medkit");
        assert_eq!(ItemKind::from_str("emp").unwrap(), ItemKind::Emp);
    }
}
