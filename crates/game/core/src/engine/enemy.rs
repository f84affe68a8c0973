//! Enemy decision pass.
//!
//! Runs once after every consumed player action, in enemy insertion order,
//! as a single pass: no enemy re-evaluates after another has already moved
//! within the same turn.

use crate::config::GameConfig;
use crate::state::{EntityId, GameState};

use super::events::GameEvent;

/// Wander candidates in the fixed draw order: west, east, north, south.
/// This order is part of the RNG stream contract.
const WANDER_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Resolves one full enemy turn, appending events as they happen.
pub fn run_enemy_turn(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let order: Vec<EntityId> = state.entities.enemies.iter().map(|e| e.id).collect();

    for id in order {
        let Some(enemy) = state.entities.enemy(id) else {
            continue;
        };
        let enemy_position = enemy.position;
        let player_position = state.entities.player.position;

        let in_range =
            enemy_position.distance(player_position) < GameConfig::FOV_RADIUS as f64;
        if in_range && state.world.visibility.is_visible(enemy_position) {
            chase(state, id, events);
        } else {
            wander(state, id);
        }
    }
}

/// One greedy step toward the player: move along whichever axis delta is
/// larger, ties breaking toward vertical movement. A step landing on the
/// player resolves as an attack instead.
fn chase(state: &mut GameState, id: EntityId, events: &mut Vec<GameEvent>) {
    let Some(enemy) = state.entities.enemy(id) else {
        return;
    };
    let player_position = state.entities.player.position;
    let dx = player_position.x - enemy.position.x;
    let dy = player_position.y - enemy.position.y;

    let step = if dx.abs() > dy.abs() {
        (dx.signum(), 0)
    } else {
        (0, dy.signum())
    };
    let target = enemy.position.offset(step.0, step.1);

    if target == player_position {
        attack_player(state, id, events);
        return;
    }

    if state.can_enter(target) {
        if let Some(enemy) = state.entities.enemy_mut(id) {
            enemy.position = target;
        }
    }
}

/// One random step, taken only if the destination is walkable and free.
fn wander(state: &mut GameState, id: EntityId) {
    let step = *state.rng.choice(&WANDER_STEPS);
    let Some(enemy) = state.entities.enemy(id) else {
        return;
    };
    let target = enemy.position.offset(step.0, step.1);

    if state.can_enter(target) {
        if let Some(enemy) = state.entities.enemy_mut(id) {
            enemy.position = target;
        }
    }
}

fn attack_player(state: &mut GameState, attacker: EntityId, events: &mut Vec<GameEvent>) {
    let Some(enemy) = state.entities.enemy(attacker) else {
        return;
    };
    let damage = enemy.attack + state.rng.next_range(-1, 2);

    let player = &mut state.entities.player;
    player.health.current -= damage;
    events.push(GameEvent::EnemyAttack { attacker, damage });

    if player.health.is_depleted() && !state.turn.is_game_over() {
        state.turn.end_game("You were overwhelmed by drones.");
        events.push(GameEvent::PlayerDied);
    }
}
