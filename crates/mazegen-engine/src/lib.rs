//! Mazegen Engine -- perfect maze generation and text rendering.
//!
//! This crate builds on [`mazegen_grid`] to carve a perfect maze (a spanning
//! tree over the grid, so exactly one path joins any two cells) with a
//! randomized depth-first walk, and to draw the result as a character
//! canvas.
//!
//! Randomness is injected: anything implementing
//! [`RandomSource`](rng::RandomSource) drives the walk, including every
//! `rand` generator. The same random sequence always yields the same maze.
//!
//! # Quick Start
//!
//! ```
//! use mazegen_engine::prelude::*;
//!
//! let config = MazeConfig::with_size(6, 4);
//! let maze = Maze::generate(&config, &mut seeded(7)).unwrap();
//!
//! assert_eq!(maze.grid().visited_count(), 24);
//! assert_eq!(maze.grid().passage_count(), 23);
//!
//! let canvas = maze.render(&Renderer::new(Glyphs::ascii()));
//! assert_eq!(canvas.rows().count(), 9);
//! println!("{canvas}");
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod generator;
pub mod maze;
pub mod render;
pub mod rng;

use mazegen_grid::position::Position;
use mazegen_grid::GridError;

/// Re-export the grid crate for convenience.
pub use mazegen_grid;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while carving a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The walk was asked to start on a cell the grid does not have.
    #[error("start cell {start} is outside the {width}x{height} grid")]
    StartOutOfBounds {
        start: Position,
        width: usize,
        height: usize,
    },

    /// A grid operation failed during the walk.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors in a [`MazeConfig`](config::MazeConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("maze dimensions {width}x{height} are invalid -- width and height must both be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("start cell {start} is outside the {width}x{height} maze")]
    StartOutsideGrid {
        start: Position,
        width: usize,
        height: usize,
    },

    #[error("wall and open glyphs must differ, both are {glyph:?}")]
    IndistinctGlyphs { glyph: char },
}

/// Any failure from [`Maze::generate`](maze::Maze::generate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid maze config: {0}")]
    Config(#[from] ConfigError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    // Re-export everything from the grid prelude.
    pub use mazegen_grid::prelude::*;

    pub use crate::config::MazeConfig;
    pub use crate::generator::{GenerationReport, Generator};
    pub use crate::maze::Maze;
    pub use crate::render::{Canvas, Glyphs, Renderer};
    pub use crate::rng::{seeded, RandomSource, ScriptedSource};
    pub use crate::{ConfigError, GenerationError, MazeError};
}
