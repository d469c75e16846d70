//! Text rendering of a carved grid.
//!
//! Every cell becomes a one-glyph "room" at canvas `(2x + 1, 2y + 1)`,
//! surrounded by wall glyphs. A passage opens the single border glyph
//! between two rooms. The canvas is `(2 * width + 1) x (2 * height + 1)`.
//!
//! Two extra openings are always punched: the entrance on the west border of
//! cell `(0, 0)` and the exit on the east border of the bottom-right cell.
//!
//! ```
//! use mazegen_engine::prelude::*;
//!
//! let grid = Grid::new(1, 1).unwrap();
//! let canvas = Renderer::new(Glyphs::ascii()).render(&grid);
//! assert_eq!(canvas.to_string(), "###\n # \n###");
//! ```

use std::fmt;
use std::io;

use mazegen_grid::grid::Grid;
use mazegen_grid::position::{Direction, Position};

use crate::ConfigError;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// The two characters a canvas is drawn with. Always distinct, so an open
/// glyph can be told apart from a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    wall: char,
    open: char,
}

impl Default for Glyphs {
    /// Full block walls, space floors.
    fn default() -> Self {
        Self {
            wall: '\u{2588}',
            open: ' ',
        }
    }
}

impl Glyphs {
    /// # Errors
    ///
    /// [`ConfigError::IndistinctGlyphs`] if `wall == open`.
    pub fn new(wall: char, open: char) -> Result<Self, ConfigError> {
        if wall == open {
            return Err(ConfigError::IndistinctGlyphs { glyph: wall });
        }
        Ok(Self { wall, open })
    }

    #[inline]
    pub fn wall(&self) -> char {
        self.wall
    }

    #[inline]
    pub fn open(&self) -> char {
        self.open
    }

    /// `#` walls, space floors.
    pub fn ascii() -> Self {
        Self {
            wall: '#',
            open: ' ',
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A rectangular character matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    open: char,
    glyphs: Vec<char>,
}

impl Canvas {
    /// `width * height` fits a `usize` for every canvas drawn from a
    /// [`Grid`]; `Grid::new` rejects anything larger.
    fn filled(width: usize, height: usize, glyphs: Glyphs) -> Self {
        Self {
            width,
            height,
            open: glyphs.open,
            glyphs: vec![glyphs.wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The glyph at column `x`, row `y`, or `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y * self.width + x])
    }

    /// Whether `(x, y)` holds the open glyph.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(self.open)
    }

    fn clear(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.glyphs[y * self.width + x] = self.open;
        }
    }

    /// Rows top to bottom, each built only when the iterator reaches it.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.glyphs
            .chunks(self.width)
            .map(|row| row.iter().collect())
    }

    /// Stream the canvas to `out`, one line per row.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.rows() {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Canvas {
    /// Rows joined by `\n`, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Converts a [`Grid`] into a [`Canvas`]. Never mutates the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Canvas coordinates of the room for in-grid `cell`, shifted one glyph
    /// in `toward` when given. Computed in `usize`, where every room of a
    /// drawable grid fits.
    fn room(cell: Position, toward: Option<Direction>) -> (usize, usize) {
        let x = cell.x as usize * 2 + 1;
        let y = cell.y as usize * 2 + 1;
        match toward {
            None => (x, y),
            Some(Direction::North) => (x, y - 1),
            Some(Direction::South) => (x, y + 1),
            Some(Direction::West) => (x - 1, y),
            Some(Direction::East) => (x + 1, y),
        }
    }

    pub fn render(&self, grid: &Grid) -> Canvas {
        let mut canvas = Canvas::filled(grid.width() * 2 + 1, grid.height() * 2 + 1, self.glyphs);

        for cell in grid.cells().iter().filter(|c| c.visited) {
            let (x, y) = Self::room(cell.position, None);
            canvas.clear(x, y);
            if cell.connected_east {
                let (x, y) = Self::room(cell.position, Some(Direction::East));
                canvas.clear(x, y);
            }
            if cell.connected_south {
                let (x, y) = Self::room(cell.position, Some(Direction::South));
                canvas.clear(x, y);
            }
        }

        let (x, y) = Self::room(Position::ORIGIN, Some(Direction::West));
        canvas.clear(x, y);
        let last = Position::new(grid.width() as i32 - 1, grid.height() as i32 - 1);
        let (x, y) = Self::room(last, Some(Direction::East));
        canvas.clear(x, y);

        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            "maze rendered"
        );
        canvas
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
