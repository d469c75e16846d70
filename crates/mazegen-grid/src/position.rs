//! Grid coordinates and unit step directions.
//!
//! A [`Position`] is a signed `(column, row)` pair. Signed coordinates let a
//! step off the edge of the grid be expressed (and then rejected by the
//! bounds check) instead of wrapping around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A `(column, row)` location. `x` grows east, `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The top-left cell.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise sum, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_add(self, rhs: Position) -> Option<Position> {
        Some(Position::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Componentwise difference, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_sub(self, rhs: Position) -> Option<Position> {
        Some(Position::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    /// The neighbor one step towards `direction`, or `None` past the edge of
    /// the `i32` coordinate space.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Position> {
        self.checked_add(direction.offset())
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis-aligned unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in the order the generator lists its candidates:
    /// up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The unit displacement for one step in this direction.
    #[inline]
    pub const fn offset(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::West => Position::new(-1, 0),
            Direction::East => Position::new(1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The direction of the single unit step leading from `from` to `to`.
    ///
    /// Returns `None` when the positions are equal or not unit-adjacent.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let diff = to.checked_sub(from)?;
        Direction::ALL.into_iter().find(|d| d.offset() == diff)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
