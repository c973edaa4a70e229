//! Voxel grid coordinates and the six axis faces.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A position in the 3-D voxel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent position one step in `dir`. Wraps at the `i32` edge of
    /// the grid.
    pub fn offset(self, dir: Direction) -> Self {
        self.offset_by(dir, 1)
    }

    /// The position `n` steps in `dir`, wrapping at the `i32` edge.
    pub fn offset_by(self, dir: Direction, n: i32) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self::new(
            self.x.wrapping_add(dx.wrapping_mul(n)),
            self.y.wrapping_add(dy.wrapping_mul(n)),
            self.z.wrapping_add(dz.wrapping_mul(n)),
        )
    }

    /// All six axis-neighbours, paired with the direction that reaches them.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, BlockPos)> {
        Direction::all().into_iter().map(move |dir| (dir, self.offset(dir)))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The six axis-aligned faces of a voxel.
///
/// Declaration order is the canonical iteration order used by discovery
/// and route generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All six faces in canonical order.
    pub fn all() -> [Direction; 6] {
        [
            Direction::Down,
            Direction::Up,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ]
    }

    /// The face pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit offset `(dx, dy, dz)` for this direction. North is -z.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
