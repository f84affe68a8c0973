use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::Position;

/// The two tile kinds forming the dungeon grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// Fixed-size 2D tile grid.
///
/// Immutable after generation; only the generator carves walls into floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid filled entirely with walls.
    pub fn filled_with_walls(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.contains(position)
            .then(|| self.tiles[(position.y * self.width + position.x) as usize])
    }

    /// Carves the tile at `position`. Out-of-bounds writes are ignored, which
    /// matches how corridor carving clips against the border.
    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        if self.contains(position) {
            self.tiles[(position.y * self.width + position.x) as usize] = tile;
        }
    }

    pub fn is_floor(&self, position: Position) -> bool {
        self.tile(position) == Some(Tile::Floor)
    }

    /// Number of floor tiles in the grid.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }
}

/// Axis-aligned rectangular floor region produced by generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center tile, rounding toward the top-left like integer division.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.x + self.width
            && position.y >= self.y
            && position.y < self.y + self.height
    }

    /// Bounding-box intersection test with a 1-tile buffer on all sides.
    /// Rooms that merely touch are rejected so walls always separate them.
    pub fn intersects_inflated(&self, other: &Room) -> bool {
        self.x - 1 < other.x + other.width
            && other.x - 1 < self.x + self.width
            && self.y - 1 < other.y + other.height
            && other.y - 1 < self.y + self.height
    }
}

/// Accepted rooms in generation order. Room 0 is the player start room.
pub type RoomList = ArrayVec<Room, { GameConfig::MAX_ROOMS }>;

/// Per-turn visibility plus the monotonically growing explored set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    width: i32,
    height: i32,
    visible: Vec<bool>,
    explored: Vec<bool>,
}

impl VisibilityState {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let len = (width * height) as usize;
        Self {
            width,
            height,
            visible: vec![false; len],
            explored: vec![false; len],
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height)
            .then(|| (position.y * self.width + position.x) as usize)
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.visible[i])
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.explored[i])
    }

    /// Clears the per-turn visible set. The explored set is never cleared.
    pub fn reset_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Marks a tile visible, which also marks it explored.
    pub fn mark_visible(&mut self, position: Position) {
        if let Some(i) = self.index(position) {
            self.visible[i] = true;
            self.explored[i] = true;
        }
    }

    pub fn visible_tiles(&self) -> &[bool] {
        &self.visible
    }

    pub fn explored_tiles(&self) -> &[bool] {
        &self.explored
    }
}

/// Static dungeon layout plus visibility bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub grid: TileGrid,
    pub rooms: RoomList,
    pub visibility: VisibilityState,
}

impl WorldState {
    pub fn new(grid: TileGrid, rooms: RoomList) -> Self {
        let visibility = VisibilityState::new(grid.width(), grid.height());
        Self {
            grid,
            rooms,
            visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_as_all_walls() {
        let grid = TileGrid::filled_with_walls(4, 3);
        assert_eq!(grid.floor_count(), 0);
        assert_eq!(grid.tile(Position::new(3, 2)), Some(Tile::Wall));
        assert_eq!(grid.tile(Position::new(4, 2)), None);
    }

    #[test]
    fn inflated_intersection_rejects_touching_rooms() {
        let a = Room::new(2, 2, 4, 4);
        // Shares no tiles with `a` but touches its right edge.
        let b = Room::new(6, 2, 3, 3);
        assert!(a.intersects_inflated(&b));
        // One tile of wall between them is enough.
        let c = Room::new(7, 2, 3, 3);
        assert!(!a.intersects_inflated(&c));
    }

    #[test]
    fn mark_visible_implies_explored() {
        let mut vis = VisibilityState::new(5, 5);
        let p = Position::new(2, 3);
        vis.mark_visible(p);
        assert!(vis.is_visible(p) && vis.is_explored(p));

        vis.reset_visible();
        assert!(!vis.is_visible(p));
        assert!(vis.is_explored(p));
    }
}
