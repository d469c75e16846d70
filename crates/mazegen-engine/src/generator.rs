//! Randomized depth-first maze carving.
//!
//! [`Generator::carve`] walks the grid depth-first from a start cell. On the
//! first visit to a cell it carves the passage it arrived through, then tries
//! all four neighbors in a random order, each exactly once. Cells that are
//! off-grid or already visited end that branch of the walk. The carved
//! passages form a spanning tree over every cell reachable from the start,
//! which on a rectangular grid is every cell.
//!
//! The walk uses an explicit stack instead of native recursion, so grid size
//! is bounded by memory rather than by call-stack depth. Each stack frame
//! keeps the directions it has not tried yet and draws the next one only
//! when the frame is resumed. Random draws therefore happen in the same
//! order as in the recursive formulation, and a given random sequence yields
//! the same maze either way.
//!
//! ```
//! use mazegen_engine::prelude::*;
//!
//! let mut grid = Grid::new(8, 5).unwrap();
//! let mut rng = seeded(42);
//! let report = Generator::new(Position::ORIGIN).carve(&mut grid, &mut rng).unwrap();
//!
//! assert_eq!(report.cells_visited, 40);
//! assert_eq!(report.passages_carved, 39);
//! assert_eq!(grid.passage_count(), 39);
//! ```

use std::time::{Duration, Instant};

use mazegen_grid::grid::Grid;
use mazegen_grid::position::{Direction, Position};

use crate::rng::RandomSource;
use crate::GenerationError;

// ---------------------------------------------------------------------------
// GenerationReport
// ---------------------------------------------------------------------------

/// Counters and timing for one [`Generator::carve`] run. Not comparable as
/// a whole since `elapsed` differs between identical runs; compare the
/// counters.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Cells newly marked visited, including the start cell.
    pub cells_visited: usize,
    /// Passages carved between cells.
    pub passages_carved: usize,
    /// Deepest the explicit stack grew (the longest walk from the start).
    pub max_stack_depth: usize,
    /// Calls made to the random source.
    pub random_draws: usize,
    /// Wall-clock time spent carving.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A cell on the walk together with the directions it has yet to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    candidates: [Direction; 4],
    remaining: usize,
}

impl Frame {
    fn new(position: Position) -> Self {
        Self {
            position,
            candidates: Direction::ALL,
            remaining: Direction::ALL.len(),
        }
    }

    /// Pick and remove a uniformly random untried direction. The relative
    /// order of the rest is preserved.
    fn take<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Direction> {
        if self.remaining == 0 {
            return None;
        }
        let i = rng.next_below(self.remaining);
        let direction = self.candidates[i];
        self.candidates.copy_within(i + 1..self.remaining, i);
        self.remaining -= 1;
        Some(direction)
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Depth-first passage carver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    start: Position,
}

impl Generator {
    pub fn new(start: Position) -> Self {
        Self { start }
    }

    /// Carve a maze into `grid`, drawing directions from `rng`.
    ///
    /// The start cell is marked with itself as the previous cell, which sets
    /// no passage flag. If the start cell is already visited nothing is
    /// carved.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::StartOutOfBounds`] if the start cell is not in
    ///   `grid`.
    /// - [`GenerationError::Grid`] if a grid operation fails mid-walk. Every
    ///   step is range-checked first, so this indicates a bug.
    pub fn carve<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<GenerationReport, GenerationError> {
        let started = Instant::now();
        let mut report = GenerationReport::default();

        if !grid.is_in_range(self.start) {
            return Err(GenerationError::StartOutOfBounds {
                start: self.start,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.cell(self.start)?.visited {
            tracing::warn!(start = %self.start, "start cell already visited, nothing to carve");
            report.elapsed = started.elapsed();
            return Ok(report);
        }

        grid.mark_passage(self.start, self.start)?;
        report.cells_visited = 1;

        let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());
        stack.push(Frame::new(self.start));
        report.max_stack_depth = 1;

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.take(rng) else {
                stack.pop();
                continue;
            };
            report.random_draws += 1;

            let from = frame.position;
            let Some(next) = from.step(direction).filter(|&n| grid.is_in_range(n)) else {
                continue;
            };
            if grid.cell(next)?.visited {
                continue;
            }

            grid.mark_passage(next, from)?;
            report.cells_visited += 1;
            report.passages_carved += 1;

            stack.push(Frame::new(next));
            report.max_stack_depth = report.max_stack_depth.max(stack.len());
        }

        report.elapsed = started.elapsed();
        tracing::debug!(
            start = %self.start,
            cells_visited = report.cells_visited,
            passages_carved = report.passages_carved,
            max_stack_depth = report.max_stack_depth,
            random_draws = report.random_draws,
            elapsed_us = report.elapsed.as_micros() as u64,
            "maze carved"
        );

        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
