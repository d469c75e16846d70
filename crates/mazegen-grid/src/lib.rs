//! Mazegen Grid -- the maze data model.
//!
//! A [`Grid`](grid::Grid) owns a fixed `width x height` block of
//! [`Cell`](cell::Cell)s. Each cell records whether generation has visited it
//! and whether a passage leads to its east or south neighbor. West and north
//! passages are never stored; they are read from the neighbor's east/south
//! flag, so every passage has exactly one source of truth.
//!
//! # Quick Start
//!
//! ```
//! use mazegen_grid::prelude::*;
//!
//! let mut grid = Grid::new(2, 1).unwrap();
//! grid.mark_passage(Position::new(0, 0), Position::new(0, 0)).unwrap();
//! grid.mark_passage(Position::new(1, 0), Position::new(0, 0)).unwrap();
//!
//! assert!(grid.cell(Position::new(0, 0)).unwrap().connected_east);
//! assert!(grid.is_connected(Position::new(1, 0), Direction::West).unwrap());
//! assert_eq!(grid.passage_count(), 1);
//! ```

#![deny(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod position;
pub mod snapshot;

use position::Position;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A position lies outside `[0, width) x [0, height)`.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// A grid was requested with a zero or unaddressable dimension.
    #[error("invalid grid dimensions {width}x{height} -- both must be positive and fit an i32 coordinate")]
    InvalidDimensions { width: usize, height: usize },

    /// A passage was requested between two cells that are not neighbors.
    #[error("cannot carve a passage from {previous} to {current} -- cells are not adjacent")]
    NonAdjacentPassage {
        current: Position,
        previous: Position,
    },

    /// A snapshot's cell list does not describe a grid of its dimensions.
    #[error("snapshot does not match its dimensions: {reason}")]
    SnapshotMismatch { reason: String },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::cell::Cell;
    pub use crate::grid::Grid;
    pub use crate::position::{Direction, Position};
    pub use crate::snapshot::GridSnapshot;
    pub use crate::GridError;
}
