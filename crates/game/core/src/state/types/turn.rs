/// Session phase. `GameOver` is terminal until a new session replaces the
/// current one; the engine ignores intents while in it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Playing,
    GameOver {
        /// Human-readable cause surfaced to the presentation layer.
        cause: String,
    },
}

/// Turn bookkeeping for one session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Increments by exactly one per consumed player action.
    pub turn: u32,
    pub kills: u32,
    pub phase: Phase,
}

impl TurnState {
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn end_game(&mut self, cause: impl Into<String>) {
        // First cause wins; the flag is terminal.
        if !self.is_game_over() {
            self.phase = Phase::GameOver {
                cause: cause.into(),
            };
        }
    }
}
