//! Read model handed to presentation layers.
//!
//! A snapshot is a plain-data copy of everything a renderer needs for one
//! frame. It never borrows from the session, so clients can hold it across
//! further intents, diff consecutive snapshots, or ship it over a wire as
//! JSON.

use game_core::{GameState, ItemKind, Phase, Position};
use serde::Serialize;

use crate::{Result, RuntimeError};

/// A living entity as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActorView {
    pub id: u32,
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

/// A ground item as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub position: Position,
    pub kind: ItemKind,
}

/// Complete per-frame read model of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub seed: i64,
    pub width: i32,
    pub height: i32,
    /// One string per row, `#` for wall and `.` for floor.
    pub tiles: Vec<String>,
    /// Row-major, same indexing as the grid; true while in line of sight.
    pub visible: Vec<bool>,
    /// Row-major; true once seen, never cleared within a session.
    pub explored: Vec<bool>,
    pub player: ActorView,
    pub inventory: Vec<Option<ItemKind>>,
    pub enemies: Vec<ActorView>,
    pub items: Vec<ItemView>,
    pub turn: u32,
    pub kills: u32,
    pub game_over: bool,
    /// Set exactly when `game_over` is true.
    pub cause: Option<String>,
}

impl SessionSnapshot {
    pub(crate) fn capture(state: &GameState) -> Self {
        let grid = &state.world.grid;
        let tiles = (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| {
                        if grid.is_floor(Position::new(x, y)) {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect()
            })
            .collect();

        let (game_over, cause) = match &state.turn.phase {
            Phase::Playing => (false, None),
            Phase::GameOver { cause } => (true, Some(cause.clone())),
        };

        Self {
            seed: state.seed,
            width: grid.width(),
            height: grid.height(),
            tiles,
            visible: state.world.visibility.visible_tiles().to_vec(),
            explored: state.world.visibility.explored_tiles().to_vec(),
            player: ActorView::from_actor(&state.entities.player),
            inventory: state.entities.inventory.slots().to_vec(),
            enemies: state
                .entities
                .enemies
                .iter()
                .map(ActorView::from_actor)
                .collect(),
            items: state
                .entities
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id.0,
                    position: item.position,
                    kind: item.kind,
                })
                .collect(),
            turn: state.turn.turn,
            kills: state.turn.kills,
            game_over,
            cause,
        }
    }

    /// Serializes the snapshot to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| RuntimeError::SnapshotEncoding(err.to_string()))
    }
}

impl ActorView {
    fn from_actor(actor: &game_core::ActorState) -> Self {
        Self {
            id: actor.id.0,
            position: actor.position,
            hp: actor.health.current,
            max_hp: actor.health.maximum,
            attack: actor.attack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;
    use game_core::GameConfig;

    #[test]
    fn snapshot_reflects_fresh_session() {
        let session = Session::new(12345);
        let snap = session.snapshot();

        assert_eq!(snap.seed, 12345);
        assert_eq!(snap.width, GameConfig::MAP_WIDTH);
        assert_eq!(snap.height, GameConfig::MAP_HEIGHT);
        assert_eq!(snap.tiles.len(), GameConfig::MAP_HEIGHT as usize);
        assert!(
            snap.tiles
                .iter()
                .all(|row| row.chars().count() == GameConfig::MAP_WIDTH as usize)
        );
        assert_eq!(snap.turn, 0);
        assert_eq!(snap.kills, 0);
        assert!(!snap.game_over);
        assert!(snap.cause.is_none());
        assert_eq!(snap.inventory, vec![None, None, None]);
        assert_eq!(snap.player.hp, GameConfig::PLAYER_MAX_HP);
    }

    #[test]
    fn snapshot_tile_rows_match_grid() {
        let session = Session::new(7);
        let snap = session.snapshot();
        let grid = &session.state().world.grid;

        for (y, row) in snap.tiles.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let floor = grid.is_floor(Position::new(x as i32, y as i32));
                assert_eq!(ch == '.', floor, "tile mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let session = Session::new(1);
        let json = session.snapshot().to_json().unwrap();
        assert!(json.contains("\"seed\":1"));
        assert!(json.contains("\"game_over\":false"));
    }
}
