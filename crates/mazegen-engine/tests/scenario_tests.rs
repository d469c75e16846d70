//! Small fixed scenarios for generation and rendering.

use mazegen_engine::prelude::*;

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// Route library events to the test harness output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// 1x1
// ---------------------------------------------------------------------------

#[test]
fn one_by_one_grid() {
    let maze = Maze::generate(&MazeConfig::with_size(1, 1), &mut seeded(0)).unwrap();
    let grid = maze.grid();

    assert_eq!(grid.visited_count(), 1);
    assert_eq!(grid.passage_count(), 0);

    let canvas = maze.render(&Renderer::new(Glyphs::ascii()));
    assert_eq!((canvas.width(), canvas.height()), (3, 3));
    // Entrance west of the room, exit east of it.
    let rows: Vec<String> = canvas.rows().collect();
    assert_eq!(rows, vec!["###", "   ", "###"]);
}

// ---------------------------------------------------------------------------
// 2x1
// ---------------------------------------------------------------------------

#[test]
fn two_by_one_grid() {
    for seed in 0..10 {
        let maze = Maze::generate(&MazeConfig::with_size(2, 1), &mut seeded(seed)).unwrap();
        let grid = maze.grid();

        assert!(grid.cell(p(0, 0)).unwrap().visited);
        assert!(grid.cell(p(1, 0)).unwrap().visited);
        assert!(grid.cell(p(0, 0)).unwrap().connected_east);
        assert!(!grid.cell(p(0, 0)).unwrap().connected_south);
        assert!(!grid.cell(p(1, 0)).unwrap().connected_east);

        let canvas = maze.render(&Renderer::new(Glyphs::ascii()));
        assert_eq!((canvas.width(), canvas.height()), (5, 3));
        let middle = canvas.rows().nth(1).unwrap();
        assert_eq!(middle, "     ");
    }
}

#[test]
fn two_by_one_grid_started_from_the_east() {
    let config = MazeConfig {
        width: 2,
        height: 1,
        start: p(1, 0),
    };
    let maze = Maze::generate(&config, &mut seeded(3)).unwrap();
    // Arriving from the east still stores the passage on the western cell.
    assert!(maze.grid().cell(p(0, 0)).unwrap().connected_east);
    assert_eq!(maze.grid().passage_count(), 1);
}

// ---------------------------------------------------------------------------
// Scripted walks
// ---------------------------------------------------------------------------

#[test]
fn always_first_choice_on_2x2_snakes_south_then_east() {
    // Candidate order is north, south, west, east; always taking the first
    // untried one goes south from (0,0), east to (1,1), then north to (1,0).
    let config = MazeConfig {
        start: Position::ORIGIN,
        ..MazeConfig::with_size(2, 2)
    };
    let maze = Maze::generate(&config, &mut ScriptedSource::first()).unwrap();
    let grid = maze.grid();

    assert!(grid.is_connected(p(0, 0), Direction::South).unwrap());
    assert!(grid.is_connected(p(0, 1), Direction::East).unwrap());
    assert!(grid.is_connected(p(1, 1), Direction::North).unwrap());
    assert!(!grid.is_connected(p(0, 0), Direction::East).unwrap());
    assert_eq!(maze.report().max_stack_depth, 4);

    let rows: Vec<String> = maze
        .render(&Renderer::new(Glyphs::ascii()))
        .rows()
        .collect();
    assert_eq!(rows, vec!["#####", "  # #", "# # #", "#    ", "#####"]);
}

#[test]
fn always_first_choice_from_default_start_on_2x2() {
    // From (1,1): north to (1,0), west to (0,0), south to (0,1).
    let config = MazeConfig::with_size(2, 2);
    assert_eq!(config.start, p(1, 1));
    let maze = Maze::generate(&config, &mut ScriptedSource::first()).unwrap();
    let grid = maze.grid();

    assert!(grid.is_connected(p(1, 1), Direction::North).unwrap());
    assert!(grid.is_connected(p(1, 0), Direction::West).unwrap());
    assert!(grid.is_connected(p(0, 0), Direction::South).unwrap());
    assert!(!grid.is_connected(p(0, 1), Direction::East).unwrap());
    assert_eq!(maze.report().max_stack_depth, 4);

    let rows: Vec<String> = maze
        .render(&Renderer::new(Glyphs::ascii()))
        .rows()
        .collect();
    assert_eq!(rows, vec!["#####", "    #", "# # #", "# #  ", "#####"]);
}

#[test]
fn different_seeds_usually_differ() {
    let config = MazeConfig::with_size(12, 12);
    let hashes: std::collections::HashSet<String> = (0..10)
        .map(|seed| Maze::generate(&config, &mut seeded(seed)).unwrap().state_hash())
        .collect();
    assert!(hashes.len() > 1, "ten seeds produced one maze");
}

#[test]
fn default_glyph_output_streams_to_a_writer() {
    init_tracing();
    let maze = Maze::generate(&MazeConfig::default(), &mut seeded(2)).unwrap();
    let canvas = maze.render(&Renderer::default());

    let mut out = Vec::new();
    canvas.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 35);
    assert!(text.lines().all(|l| l.chars().count() == 43));
    assert!(text.chars().all(|c| c == '\u{2588}' || c == ' ' || c == '\n'));
    assert_eq!(text.trim_end_matches('\n'), canvas.to_string());
}
