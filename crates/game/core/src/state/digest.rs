//! Deterministic state commitment.
//!
//! Used by tests and offline tooling to assert that two sessions are
//! byte-for-byte identical without comparing every field by hand.

#[cfg(feature = "serde")]
use super::GameState;

/// Computes a SHA-256 commitment over the bincode-encoded state.
///
/// bincode encoding is deterministic, so equal digests mean equal states,
/// including RNG position, entity order, and the explored set.
#[cfg(feature = "serde")]
pub fn state_digest(state: &GameState) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    let bytes = bincode::serialize(state).expect("GameState serialization is infallible");
    hasher.update(&bytes);
    hasher.finalize().into()
}
