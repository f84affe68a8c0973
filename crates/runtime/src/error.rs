use game_core::ExecuteError;

/// Runtime errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// The engine rejected an intent as a caller bug (not a game no-op).
    #[error("intent execution failed: {0}")]
    ExecuteFailed(#[from] ExecuteError),

    /// Snapshot serialization failed.
    #[error("snapshot encoding failed: {0}")]
    SnapshotEncoding(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
