//! Turn-resolution state machine.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: one
//! player intent enters, the player action, the enemy pass, the turn counter,
//! and the visibility recompute all resolve to completion before it returns.
//! Invalid intents (bumping a wall, picking up nothing, using an empty slot)
//! are recoverable no-ops surfaced as events; they never consume a turn.

mod enemy;
mod events;

pub use events::GameEvent;

use crate::action::{CardinalDirection, Intent};
use crate::fov;
use crate::state::{EntityId, GameState, Inventory, ItemKind, WorldState};

/// Result of resolving one intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    /// Whether the intent consumed a turn (enemy pass ran, counter advanced).
    pub consumed: bool,
    /// Turn counter after resolution.
    pub turn: u32,
    /// Everything that happened, in order.
    pub events: Vec<GameEvent>,
}

/// Caller bugs, as opposed to in-game no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("inventory slot {slot} out of range (0..{limit})")]
    SlotOutOfRange { slot: usize, limit: usize },
}

/// Reducer borrowing one session's state for the duration of an intent.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Resolves one player intent to completion.
    ///
    /// After game over every intent is ignored until the session is replaced.
    pub fn execute(&mut self, intent: Intent) -> Result<TurnOutcome, ExecuteError> {
        if self.state.turn.is_game_over() {
            return Ok(TurnOutcome {
                consumed: false,
                turn: self.state.turn.turn,
                events: vec![GameEvent::IntentIgnored],
            });
        }

        let mut events = Vec::new();
        let consumed = match intent {
            Intent::Move(direction) => self.resolve_move(direction, &mut events),
            Intent::PickUp => {
                self.resolve_pickup(&mut events);
                // Picking up is free; no enemy pass, no counter tick.
                false
            }
            Intent::UseItem(slot) => self.resolve_use_item(slot, &mut events)?,
        };

        if consumed {
            enemy::run_enemy_turn(self.state, &mut events);
            self.state.turn.turn += 1;
            self.recompute_fov();
        }

        Ok(TurnOutcome {
            consumed,
            turn: self.state.turn.turn,
            events,
        })
    }

    /// Move resolves as an attack when an enemy holds the target tile, and
    /// is silently absorbed when the target is out of bounds or a wall.
    fn resolve_move(&mut self, direction: CardinalDirection, events: &mut Vec<GameEvent>) -> bool {
        let (dx, dy) = direction.delta();
        let target = self.state.entities.player.position.offset(dx, dy);

        if !self.state.is_walkable(target) {
            events.push(GameEvent::Blocked { direction });
            return false;
        }

        if let Some(enemy) = self.state.entities.enemy_at(target) {
            let target_id = enemy.id;
            self.attack_enemy(target_id, events);
            return true;
        }

        self.state.entities.player.position = target;
        events.push(GameEvent::PlayerMoved { to: target });
        true
    }

    /// Combat roll: attack power plus a variance in -2..=2. The roll may be
    /// negative, which heals the target; that quirk is preserved behavior.
    fn attack_enemy(&mut self, target: EntityId, events: &mut Vec<GameEvent>) {
        let damage = self.state.entities.player.attack + self.state.rng.next_range(-2, 3);

        let Some(enemy) = self.state.entities.enemy_mut(target) else {
            return;
        };
        enemy.health.current -= damage;
        let destroyed = enemy.health.is_depleted();

        if destroyed {
            self.state.entities.remove_enemy(target);
            self.state.turn.kills += 1;
        }

        events.push(GameEvent::AttackHit {
            target,
            damage,
            destroyed,
        });
    }

    fn resolve_pickup(&mut self, events: &mut Vec<GameEvent>) {
        let position = self.state.entities.player.position;
        let Some(item) = self.state.entities.item_at(position) else {
            events.push(GameEvent::NothingToPickUp);
            return;
        };
        let (item_id, kind) = (item.id, item.kind);

        let Some(slot) = self.state.entities.inventory.store(kind) else {
            events.push(GameEvent::InventoryFull);
            return;
        };

        self.state.entities.remove_item(item_id);
        events.push(GameEvent::PickedUp { kind, slot });
    }

    /// Item use consumes a turn unless the slot is empty. The slot is
    /// cleared after resolution regardless of the effect outcome.
    fn resolve_use_item(
        &mut self,
        slot: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<bool, ExecuteError> {
        if slot >= Inventory::SLOT_COUNT {
            return Err(ExecuteError::SlotOutOfRange {
                slot,
                limit: Inventory::SLOT_COUNT,
            });
        }

        let Some(kind) = self.state.entities.inventory.slot(slot) else {
            events.push(GameEvent::SlotEmpty { slot });
            return Ok(false);
        };

        match kind {
            ItemKind::Medkit => self.apply_medkit(events),
            ItemKind::Battery => self.apply_battery(events),
            ItemKind::Emp => self.apply_emp(events),
        }

        self.state.entities.inventory.clear_slot(slot);
        Ok(true)
    }

    fn apply_medkit(&mut self, events: &mut Vec<GameEvent>) {
        let health = &mut self.state.entities.player.health;
        let healed = crate::config::GameConfig::MEDKIT_HEAL;
        health.current = (health.current + healed).min(health.maximum);
        events.push(GameEvent::MedkitUsed { healed });
    }

    /// Maximum and current rise together, so `current <= maximum` holds
    /// before and after even though no cap is applied.
    fn apply_battery(&mut self, events: &mut Vec<GameEvent>) {
        let bonus = crate::config::GameConfig::BATTERY_BONUS;
        let health = &mut self.state.entities.player.health;
        health.maximum += bonus;
        health.current += bonus;
        events.push(GameEvent::BatteryUsed { bonus });
    }

    /// Damages every enemy whose tile is in the current visible set, i.e.
    /// the set computed at the end of the previous turn.
    fn apply_emp(&mut self, events: &mut Vec<GameEvent>) {
        let damage = crate::config::GameConfig::EMP_DAMAGE;
        let mut hit = 0u32;
        let mut dead = Vec::new();

        for enemy in &mut self.state.entities.enemies {
            if self.state.world.visibility.is_visible(enemy.position) {
                enemy.health.current -= damage;
                hit += 1;
                if enemy.health.is_depleted() {
                    dead.push(enemy.id);
                }
            }
        }

        let destroyed = dead.len() as u32;
        for id in dead {
            self.state.entities.remove_enemy(id);
            self.state.turn.kills += 1;
        }

        events.push(GameEvent::EmpDischarged { hit, destroyed });
    }

    fn recompute_fov(&mut self) {
        let origin = self.state.entities.player.position;
        let WorldState {
            grid, visibility, ..
        } = &mut self.state.world;
        fov::recompute(grid, origin, visibility);
    }
}
