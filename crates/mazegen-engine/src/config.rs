//! Maze dimensions and generation entry point.

use mazegen_grid::position::Position;

use crate::ConfigError;

/// Default maze width in cells.
pub const DEFAULT_WIDTH: usize = 21;

/// Default maze height in cells.
pub const DEFAULT_HEIGHT: usize = 17;

/// Preferred start cell, used whenever the grid is at least 2x2.
pub const DEFAULT_START: Position = Position::new(1, 1);

/// [`DEFAULT_START`] if a `width x height` grid has it, else the top-left
/// cell.
pub fn default_start(width: usize, height: usize) -> Position {
    if width > 1 && height > 1 {
        DEFAULT_START
    } else {
        Position::ORIGIN
    }
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of cell columns. Must be positive.
    pub width: usize,
    /// Number of cell rows. Must be positive.
    pub height: usize,
    /// Cell the depth-first walk starts from. Must lie inside the grid.
    pub start: Position,
}

impl Default for MazeConfig {
    /// 21x17 cells, walk starting at `(1, 1)`.
    fn default() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl MazeConfig {
    /// A config of the given size, starting at [`default_start`].
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: default_start(width, height),
        }
    }

    /// Check the config before any grid is allocated.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimensions`] if either dimension is zero.
    /// - [`ConfigError::StartOutsideGrid`] if `start` is not a grid cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let inside = self.start.x >= 0
            && self.start.y >= 0
            && (self.start.x as usize) < self.width
            && (self.start.y as usize) < self.height;
        if !inside {
            return Err(ConfigError::StartOutsideGrid {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_21_by_17_from_one_one() {
        let config = MazeConfig::default();
        assert_eq!((config.width, config.height), (21, 17));
        assert_eq!(config.start, Position::new(1, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn thin_grids_start_at_origin() {
        assert_eq!(MazeConfig::with_size(2, 2).start, Position::new(1, 1));
        assert_eq!(MazeConfig::with_size(1, 1).start, Position::ORIGIN);
        assert_eq!(MazeConfig::with_size(2, 1).start, Position::ORIGIN);
        assert_eq!(MazeConfig::with_size(1, 9).start, Position::ORIGIN);
        for (w, h) in [(1, 1), (2, 1), (1, 9), (2, 2), (21, 17)] {
            assert!(MazeConfig::with_size(w, h).validate().is_ok(), "{w}x{h}");
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = MazeConfig::with_size(0, 4).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { width: 0, height: 4 }));
    }

    #[test]
    fn start_must_be_inside() {
        let mut config = MazeConfig::with_size(3, 3);
        config.start = Position::new(3, 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutsideGrid { .. })
        ));
        config.start = Position::new(-1, 1);
        assert!(config.validate().is_err());
        config.start = Position::new(2, 2);
        assert!(config.validate().is_ok());
    }
}
