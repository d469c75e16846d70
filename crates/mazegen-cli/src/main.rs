//! `mazegen` -- print a randomly generated perfect maze.
//!
//! Set `RUST_LOG=debug` to see generation diagnostics on stderr; stdout
//! carries only the maze.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use mazegen_engine::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use mazegen_engine::prelude::*;

/// Generate a perfect maze and print it as text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Random seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Column of the cell the walk starts from [default: 1 on mazes of at
    /// least 2x2, else 0]
    #[arg(long, allow_negative_numbers = true)]
    start_x: Option<i32>,

    /// Row of the cell the walk starts from [default: 1 on mazes of at
    /// least 2x2, else 0]
    #[arg(long, allow_negative_numbers = true)]
    start_y: Option<i32>,

    /// Draw walls with `#` instead of full blocks
    #[arg(long)]
    ascii: bool,

    /// Print a title line and a blank line before the maze
    #[arg(long)]
    title: Option<String>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = MazeConfig::with_size(args.width, args.height);
    config.start = Position::new(
        args.start_x.unwrap_or(config.start.x),
        args.start_y.unwrap_or(config.start.y),
    );
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "seeding random source");

    let maze = Maze::generate(&config, &mut seeded(seed))
        .with_context(|| format!("failed to generate a {}x{} maze", config.width, config.height))?;

    let glyphs = if args.ascii {
        Glyphs::ascii()
    } else {
        Glyphs::default()
    };
    let canvas = maze.render(&Renderer::new(glyphs));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Some(title) = &args.title {
        writeln!(out, "{title}")?;
        writeln!(out)?;
    }
    canvas.write_to(&mut out).context("failed to write maze")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
