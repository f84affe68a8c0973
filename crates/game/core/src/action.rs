//! Player intents accepted by the turn engine.

/// One step in screen coordinates: north is up (y decreases).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// The closed set of per-turn player intents.
///
/// Session management (restart, new seed) happens outside the engine by
/// replacing the whole state, so it is not an intent here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Step one tile; resolves as an attack if an enemy holds the target.
    Move(CardinalDirection),
    /// Pick up the item under the player, if any. Never consumes a turn.
    PickUp,
    /// Use the inventory slot at this index. Consumes a turn unless empty.
    UseItem(usize),
}
