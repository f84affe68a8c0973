//! Session lifecycle and intent application.

use game_core::{GameEngine, GameState, Intent, Phase, TurnOutcome};

use crate::snapshot::SessionSnapshot;
use crate::{Result, RuntimeError};

/// One live simulation session.
///
/// The session exclusively owns its [`GameState`] (grid, entities, RNG
/// stream, visibility); nothing else may mutate it between intents. Restart
/// and new-game replace the state wholesale, never piecemeal.
pub struct Session {
    state: GameState,
}

impl Session {
    /// Generates a fresh session from a seed: dungeon, spawns, initial FOV.
    pub fn new(seed: i64) -> Self {
        let state = GameState::new_session(seed);
        tracing::info!(
            seed,
            rooms = state.world.rooms.len(),
            floor_tiles = state.world.grid.floor_count(),
            enemies = state.entities.enemies.len(),
            items = state.entities.items.len(),
            "session created"
        );
        Self { state }
    }

    /// Replaces this session with a fresh one from the same seed.
    pub fn restart(&mut self) {
        tracing::info!(seed = self.state.seed, "session restarted");
        self.state = GameState::new_session(self.state.seed);
    }

    /// Replaces this session with a fresh one from a new seed.
    pub fn new_session(&mut self, seed: i64) {
        tracing::info!(seed, "new session requested");
        self.state = GameState::new_session(seed);
    }

    pub fn seed(&self) -> i64 {
        self.state.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.state.turn.is_game_over()
    }

    /// Read access for assertions and snapshot construction. All mutation
    /// routes through [`Session::apply`].
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one player intent and reports what happened.
    ///
    /// Intents after game over are ignored and reported, never errors; an
    /// `Err` here means the caller itself is buggy (e.g. slot index out of
    /// range), not that the game refused the move.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnReport> {
        let outcome = GameEngine::new(&mut self.state)
            .execute(intent)
            .map_err(RuntimeError::ExecuteFailed)?;

        tracing::debug!(
            ?intent,
            consumed = outcome.consumed,
            turn = outcome.turn,
            events = outcome.events.len(),
            "intent resolved"
        );

        if let Phase::GameOver { cause } = &self.state.turn.phase {
            tracing::info!(
                turn = self.state.turn.turn,
                kills = self.state.turn.kills,
                cause,
                "game over"
            );
        }

        Ok(TurnReport::new(outcome))
    }

    /// Builds the read model the presentation layer consumes.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.state)
    }
}

/// Outcome of one applied intent, with pre-rendered message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Human-readable message-log lines, in event order, empty lines elided.
    pub messages: Vec<String>,
}

impl TurnReport {
    fn new(outcome: TurnOutcome) -> Self {
        let messages = outcome
            .events
            .iter()
            .map(ToString::to_string)
            .filter(|line| !line.is_empty())
            .collect();
        Self { outcome, messages }
    }
}
