//! Field-of-view computation.
//!
//! Visibility is recomputed from scratch once at the end of every consumed
//! turn; the explored set only ever grows. Sight is tested per target tile
//! with an integer Bresenham walk, not shadow-casting, so diagonal walls can
//! leak visibility around corners. That leakage is deliberate.

use crate::config::GameConfig;
use crate::state::{Position, TileGrid, VisibilityState};

/// Recomputes the visible set around `origin` and folds it into the
/// explored set.
///
/// A tile is visible when it lies within [`GameConfig::FOV_RADIUS`]
/// (Euclidean) of the origin and [`line_of_sight`] from the origin succeeds.
pub fn recompute(grid: &TileGrid, origin: Position, visibility: &mut VisibilityState) {
    visibility.reset_visible();

    let radius = GameConfig::FOV_RADIUS;
    for y in origin.y - radius..=origin.y + radius {
        for x in origin.x - radius..=origin.x + radius {
            let target = Position::new(x, y);
            if !grid.contains(target) {
                continue;
            }
            if origin.distance(target) <= radius as f64 && line_of_sight(grid, origin, target) {
                visibility.mark_visible(target);
            }
        }
    }
}

/// Integer Bresenham walk from `from` to `to`.
///
/// The walk fails the first time it passes through a wall strictly before
/// reaching the target; reaching the target always succeeds, so a wall face
/// is itself visible.
pub fn line_of_sight(grid: &TileGrid, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = from.x;
    let mut y = from.y;

    loop {
        if x == to.x && y == to.y {
            return true;
        }
        if !grid.is_floor(Position::new(x, y)) {
            return false;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
