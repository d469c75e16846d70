//! One-call maze construction: config in, carved grid out.

use mazegen_grid::grid::Grid;

use crate::config::MazeConfig;
use crate::generator::{GenerationReport, Generator};
use crate::render::{Canvas, Renderer};
use crate::rng::RandomSource;
use crate::MazeError;

/// A fully generated maze and the diagnostics from carving it.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    report: GenerationReport,
}

impl Maze {
    /// Validate `config`, allocate the grid, and carve it with `rng`.
    ///
    /// # Errors
    ///
    /// [`MazeError::Config`] for an invalid config; [`MazeError::Grid`] or
    /// [`MazeError::Generation`] if allocation or carving fails.
    pub fn generate<R: RandomSource + ?Sized>(
        config: &MazeConfig,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        config.validate()?;
        let mut grid = Grid::new(config.width, config.height)?;
        let report = Generator::new(config.start).carve(&mut grid, rng)?;

        tracing::info!(
            width = config.width,
            height = config.height,
            passages = report.passages_carved,
            "maze generated"
        );

        Ok(Self {
            grid,
            report,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn render(&self, renderer: &Renderer) -> Canvas {
        renderer.render(&self.grid)
    }

    /// BLAKE3 digest of the carved grid.
    pub fn state_hash(&self) -> String {
        self.grid.state_hash()
    }
}
