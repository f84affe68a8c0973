use std::fmt;

use crate::action::CardinalDirection;
use crate::state::{EntityId, ItemKind, Position};

/// Typed record of everything that happened while resolving one intent.
///
/// The presentation layer renders these into its message log; the `Display`
/// impls are the canonical human-readable forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The move hit a wall or the map edge; nothing changed.
    Blocked { direction: CardinalDirection },
    PlayerMoved { to: Position },
    /// Player struck an enemy. Damage can be negative (a healing roll).
    AttackHit {
        target: EntityId,
        damage: i32,
        destroyed: bool,
    },
    /// PickUp with no item under the player.
    NothingToPickUp,
    /// PickUp with no free inventory slot; the item stays in the world.
    InventoryFull,
    PickedUp { kind: ItemKind, slot: usize },
    /// UseItem on an empty slot.
    SlotEmpty { slot: usize },
    MedkitUsed { healed: i32 },
    BatteryUsed { bonus: i32 },
    EmpDischarged { hit: u32, destroyed: u32 },
    EnemyAttack { attacker: EntityId, damage: i32 },
    PlayerDied,
    /// Intent arrived after game over and was dropped.
    IntentIgnored,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Blocked { .. } => write!(f, "The way is blocked."),
            GameEvent::PlayerMoved { .. } => Ok(()),
            GameEvent::AttackHit {
                target,
                damage,
                destroyed,
            } => {
                write!(f, "You hit drone {target}: {damage} damage!")?;
                if *destroyed {
                    write!(f, " Drone destroyed!")?;
                }
                Ok(())
            }
            GameEvent::NothingToPickUp => write!(f, "There is no item here."),
            GameEvent::InventoryFull => write!(f, "Inventory full!"),
            GameEvent::PickedUp { kind, slot } => {
                write!(f, "Picked up {kind} (slot {}).", slot + 1)
            }
            GameEvent::SlotEmpty { slot } => write!(f, "Slot {} is empty.", slot + 1),
            GameEvent::MedkitUsed { healed } => write!(f, "Medkit used: +{healed} hp."),
            GameEvent::BatteryUsed { bonus } => {
                write!(f, "Battery used: +{bonus} max hp.")
            }
            GameEvent::EmpDischarged { hit, destroyed } => {
                write!(f, "EMP discharged: {hit} drones damaged, {destroyed} destroyed.")
            }
            GameEvent::EnemyAttack { damage, .. } => {
                write!(f, "A drone attacks: {damage} damage taken!")
            }
            GameEvent::PlayerDied => write!(f, "You were overwhelmed by drones."),
            GameEvent::IntentIgnored => write!(f, "The session is over. Restart to continue."),
        }
    }
}
