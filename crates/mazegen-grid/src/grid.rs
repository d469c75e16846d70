//! Fixed-size rectangular grid of [`Cell`]s.
//!
//! Cells live in a flat `Vec` in column-major order
//! (`index = x * height + y`). The grid never grows or shrinks after
//! construction; generation only flips the per-cell flags.
//!
//! Passages are stored in canonical form: a passage between two horizontal
//! neighbors is the western cell's `connected_east`, and a passage between two
//! vertical neighbors is the northern cell's `connected_south`. Nothing else
//! records a passage, so the two cells can never disagree.

use crate::cell::Cell;
use crate::position::{Direction, Position};
use crate::GridError;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `width x height` grid of cells addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Column-major cell storage.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unvisited and disconnected.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimensions`] if either dimension is zero, does not
    /// fit an `i32` coordinate, or the `(2w+1) x (2h+1)` drawing of the grid
    /// would overflow `usize`. Every accepted grid can therefore be rendered.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid.clone())?;
        drawn_extent(width)
            .zip(drawn_extent(height))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(invalid)?;

        let mut cells = Vec::with_capacity(len);
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                cells.push(Cell::new(Position::new(x, y)));
            }
        }

        tracing::debug!(width, height, cells = len, "grid allocated");

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`, never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in storage (column-major) order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All positions in storage (column-major) order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|c| c.position)
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn is_in_range(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        if !self.is_in_range(position) {
            return None;
        }
        Some(position.x as usize * self.height + position.y as usize)
    }

    fn checked_index(&self, position: Position) -> Result<usize, GridError> {
        self.index(position).ok_or(GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        })
    }

    /// The cell at `position`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `position` lies outside the grid.
    pub fn cell(&self, position: Position) -> Result<&Cell, GridError> {
        let idx = self.checked_index(position)?;
        Ok(&self.cells[idx])
    }

    /// Mutable access to the cell at `position`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `position` lies outside the grid.
    pub fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let idx = self.checked_index(position)?;
        Ok(&mut self.cells[idx])
    }

    /// Carve a passage from `previous` into `current`.
    ///
    /// Marks `current` visited, then sets the canonical flag on whichever of
    /// the two cells is west/north of the other. When `current == previous`
    /// only the visited flag changes. Nothing is mutated if validation fails.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] if either position lies outside the grid.
    /// - [`GridError::NonAdjacentPassage`] if the positions are neither equal
    ///   nor one unit apart along exactly one axis.
    pub fn mark_passage(&mut self, current: Position, previous: Position) -> Result<(), GridError> {
        let cur = self.checked_index(current)?;
        let prev = self.checked_index(previous)?;
        if current != previous && Direction::between(previous, current).is_none() {
            return Err(GridError::NonAdjacentPassage { current, previous });
        }

        self.cells[cur].visited = true;

        let diff = current - previous;
        if diff.x < 0 {
            self.cells[cur].connected_east = true;
        } else if diff.x > 0 {
            self.cells[prev].connected_east = true;
        } else if diff.y < 0 {
            self.cells[cur].connected_south = true;
        } else if diff.y > 0 {
            self.cells[prev].connected_south = true;
        }

        tracing::trace!(%current, %previous, "passage marked");
        Ok(())
    }

    /// Whether a passage leads out of `position` towards `direction`.
    ///
    /// East and south read the cell's own flags; west and north read the
    /// neighbor's east/south flag. A step that would leave the grid is never
    /// connected.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `position` lies outside the grid.
    pub fn is_connected(&self, position: Position, direction: Direction) -> Result<bool, GridError> {
        let cell = self.cell(position)?;
        let neighbor = match position.step(direction) {
            Some(n) if self.is_in_range(n) => n,
            _ => return Ok(false),
        };
        let connected = match direction {
            Direction::East => cell.connected_east,
            Direction::South => cell.connected_south,
            Direction::West => self.cell(neighbor)?.connected_east,
            Direction::North => self.cell(neighbor)?.connected_south,
        };
        Ok(connected)
    }

    /// In-range neighbors of `position`, in [`Direction::ALL`] order.
    ///
    /// Accepts any position; steps past the `i32` coordinate limits are
    /// skipped like any other off-grid step.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| Some((d, position.step(d)?)))
            .filter(move |&(_, p)| self.is_in_range(p))
    }

    /// Neighbors reachable from `position` through a carved passage.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `position` lies outside the grid.
    pub fn open_neighbors(&self, position: Position) -> Result<Vec<Position>, GridError> {
        let mut out = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if self.is_connected(position, direction)? {
                out.extend(position.step(direction));
            }
        }
        Ok(out)
    }

    /// Every carved passage as `(cell, East | South)`, in storage order.
    pub fn passages(&self) -> impl Iterator<Item = (Position, Direction)> + '_ {
        self.cells.iter().flat_map(|c| {
            [
                (c.connected_east, Direction::East),
                (c.connected_south, Direction::South),
            ]
            .into_iter()
            .filter(|&(set, _)| set)
            .map(move |(_, d)| (c.position, d))
        })
    }

    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.connected_east as usize + c.connected_south as usize)
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Return every cell to unvisited and disconnected.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }
}

/// `2n + 1`: a grid side measured in text cells, walls included.
fn drawn_extent(n: usize) -> Option<usize> {
    n.checked_mul(2)?.checked_add(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
