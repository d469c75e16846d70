//! Serializable grid snapshots with BLAKE3 hashing.
//!
//! A [`GridSnapshot`] captures the full cell state of a [`Grid`] together
//! with a BLAKE3 hex digest of a fixed little-endian byte encoding of that
//! state (see [`Grid::state_hash`]). Two grids with the same dimensions and
//! identical cell flags always produce the same digest, which makes the hash
//! a cheap equality witness for determinism tests (same seed, same maze).
//!
//! ```
//! use mazegen_grid::prelude::*;
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.mark_passage(Position::new(1, 0), Position::new(0, 0)).unwrap();
//!
//! let snapshot = grid.capture_snapshot();
//! assert_eq!(snapshot.hash.len(), 64);
//! assert_eq!(snapshot.hash, grid.state_hash());
//! assert_eq!(Grid::from_snapshot(&snapshot).unwrap(), grid);
//! ```

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::GridError;

// ---------------------------------------------------------------------------
// GridSnapshot
// ---------------------------------------------------------------------------

/// A serializable copy of a grid's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    /// Cells in column-major order.
    pub cells: Vec<Cell>,
    /// BLAKE3 hex digest (64 lowercase hex chars) of the dimensions and
    /// cells, as computed by [`Grid::state_hash`].
    pub hash: String,
}

// ---------------------------------------------------------------------------
// Hashing helpers
// ---------------------------------------------------------------------------

fn compute_hash(width: usize, height: usize, cells: &[Cell]) -> String {
    let mut hasher = blake3::Hasher::new();

    hasher.update(&(width as u64).to_le_bytes());
    hasher.update(&(height as u64).to_le_bytes());

    // Cells in storage order.
    for c in cells {
        hasher.update(&c.position.x.to_le_bytes());
        hasher.update(&c.position.y.to_le_bytes());
        hasher.update(&[
            c.visited as u8,
            c.connected_east as u8,
            c.connected_south as u8,
        ]);
    }

    hasher.finalize().to_hex().to_string()
}

// ---------------------------------------------------------------------------
// Grid snapshot methods
// ---------------------------------------------------------------------------

impl Grid {
    /// Copy the grid state into a [`GridSnapshot`].
    pub fn capture_snapshot(&self) -> GridSnapshot {
        let cells = self.cells().to_vec();
        let hash = compute_hash(self.width(), self.height(), &cells);
        GridSnapshot {
            width: self.width(),
            height: self.height(),
            cells,
            hash,
        }
    }

    /// BLAKE3 hex digest of the current grid state.
    ///
    /// The hashed bytes are `width` and `height` as little-endian `u64`,
    /// then for each cell in column-major order its `x` and `y` as
    /// little-endian `i32` followed by one byte each for `visited`,
    /// `connected_east`, and `connected_south`.
    pub fn state_hash(&self) -> String {
        compute_hash(self.width(), self.height(), self.cells())
    }

    /// Rebuild a grid from a snapshot.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDimensions`] if the snapshot dimensions are invalid.
    /// - [`GridError::SnapshotMismatch`] if the cell list does not match the
    ///   dimensions (wrong length or a cell stored at the wrong index).
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Grid, GridError> {
        let mut grid = Grid::new(snapshot.width, snapshot.height)?;
        if snapshot.cells.len() != grid.len() {
            return Err(GridError::SnapshotMismatch {
                reason: format!(
                    "expected {} cells for {}x{}, found {}",
                    grid.len(),
                    snapshot.width,
                    snapshot.height,
                    snapshot.cells.len()
                ),
            });
        }

        let positions: Vec<_> = grid.positions().collect();
        for (expected, stored) in positions.into_iter().zip(&snapshot.cells) {
            if stored.position != expected {
                return Err(GridError::SnapshotMismatch {
                    reason: format!("cell {} stored where {} belongs", stored.position, expected),
                });
            }
            *grid.cell_mut(expected)? = *stored;
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn hash_is_blake3_hex() {
        let grid = Grid::new(2, 2).unwrap();
        let hash = grid.state_hash();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_covers_the_documented_byte_layout() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.mark_passage(Position::new(0, 0), Position::new(0, 0)).unwrap();
        grid.mark_passage(Position::new(1, 0), Position::new(0, 0)).unwrap();

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u64.to_le_bytes());
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&[1, 1, 0]);
        bytes.extend_from_slice(&1i32.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&[1, 0, 0]);

        let expected = blake3::hash(&bytes).to_hex().to_string();
        assert_eq!(grid.state_hash(), expected);
        assert_eq!(grid.capture_snapshot().hash, expected);
    }

    #[test]
    fn hash_tracks_state_changes() {
        let mut grid = Grid::new(3, 3).unwrap();
        let blank = grid.state_hash();
        grid.mark_passage(Position::new(0, 1), Position::new(0, 0)).unwrap();
        let carved = grid.state_hash();
        assert_ne!(blank, carved);

        grid.reset();
        assert_eq!(grid.state_hash(), blank);
    }

    #[test]
    fn hash_depends_on_dimensions() {
        let a = Grid::new(2, 3).unwrap();
        let b = Grid::new(3, 2).unwrap();
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn snapshot_roundtrip_through_json() {
        let mut grid = Grid::new(4, 2).unwrap();
        grid.mark_passage(Position::new(0, 0), Position::new(0, 0)).unwrap();
        grid.mark_passage(Position::new(1, 0), Position::new(0, 0)).unwrap();

        let snapshot = grid.capture_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
        assert_eq!(Grid::from_snapshot(&parsed).unwrap(), grid);
    }

    #[test]
    fn mismatched_snapshot_rejected() {
        let grid = Grid::new(2, 2).unwrap();
        let mut snapshot = grid.capture_snapshot();
        snapshot.cells.pop();
        assert!(matches!(
            Grid::from_snapshot(&snapshot),
            Err(GridError::SnapshotMismatch { .. })
        ));

        let mut swapped = grid.capture_snapshot();
        swapped.cells.swap(0, 1);
        assert!(matches!(
            Grid::from_snapshot(&swapped),
            Err(GridError::SnapshotMismatch { .. })
        ));
    }
}
