/// Tunable constants for map generation, spawning, and combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== map geometry =====
    pub const MAP_WIDTH: i32 = 50;
    pub const MAP_HEIGHT: i32 = 40;
    pub const ROOM_MIN_SIZE: i32 = 5;
    pub const ROOM_MAX_SIZE: i32 = 12;
    /// Placement attempts, not a guaranteed room count. Rejected candidates
    /// are skipped without retry so the accepted count is seed-dependent.
    pub const MAX_ROOMS: usize = 15;

    // ===== visibility =====
    /// Maximum Euclidean distance at which a tile can be visible.
    pub const FOV_RADIUS: i32 = 8;

    // ===== spawning =====
    pub const ENEMY_COUNT_MIN: i32 = 5;
    pub const ENEMY_COUNT_MAX: i32 = 10;
    /// Placement attempts per entity before the spawn is silently skipped.
    pub const SPAWN_RETRY_BUDGET: u32 = 50;

    // ===== actors =====
    pub const PLAYER_MAX_HP: i32 = 100;
    pub const PLAYER_ATTACK: i32 = 10;
    pub const DRONE_MAX_HP: i32 = 30;
    pub const DRONE_ATTACK: i32 = 5;

    // ===== items =====
    pub const MAX_INVENTORY_SLOTS: usize = 3;
    pub const MEDKIT_HEAL: i32 = 30;
    pub const BATTERY_BONUS: i32 = 10;
    pub const EMP_DAMAGE: i32 = 20;
}
