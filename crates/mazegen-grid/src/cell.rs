//! A single grid slot.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One cell of the maze grid.
///
/// Only the east and south passages are stored. The west passage of a cell
/// is its west neighbor's `connected_east`, and the north passage is its
/// north neighbor's `connected_south`; see [`Grid::is_connected`](crate::grid::Grid::is_connected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Coordinates of this cell (redundant with its storage index).
    pub position: Position,
    /// Set once generation has carved into this cell.
    pub visited: bool,
    /// A passage exists to the cell at `position + (1, 0)`.
    pub connected_east: bool,
    /// A passage exists to the cell at `position + (0, 1)`.
    pub connected_south: bool,
}

impl Cell {
    /// An unvisited cell with no passages.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            visited: false,
            connected_east: false,
            connected_south: false,
        }
    }

    /// Forget any generation state.
    pub fn clear(&mut self) {
        *self = Cell::new(self.position);
    }
}
