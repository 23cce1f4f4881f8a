//! Command-line interface: load a board, solve it and report the moves

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::algorithm::solver::{GreedySolver, Move};
use crate::io::configuration::{
    DEFAULT_PLAY_HEIGHT, DEFAULT_PLAY_WIDTH, DEFAULT_SEED, DEFAULT_TILE_KINDS,
    MAX_PLAY_DIMENSION, REPLAY_FRAME_DELAY_MS,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::logging;
use crate::io::parse::parse_tags;
use crate::io::progress::ProgressManager;
use crate::io::visualization::ReplayCapture;
use crate::spatial::Grid;
use crate::spatial::generator::random_board;

#[derive(Parser)]
#[command(name = "linkmatch")]
#[command(
    author,
    version,
    about = "Solve connect-and-eliminate tile boards with a greedy linker"
)]
/// Command-line arguments for the board solver
pub struct Cli {
    /// Comma-separated tags, x-major order; `_` marks an empty cell
    #[arg(value_name = "TILES", conflicts_with_all = ["file", "random"])]
    pub tiles: Option<String>,

    /// Read the tag list from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Play area width, excluding the border
    #[arg(short = 'w', long, default_value_t = DEFAULT_PLAY_WIDTH)]
    pub width: usize,

    /// Play area height, excluding the border
    #[arg(short = 'H', long, default_value_t = DEFAULT_PLAY_HEIGHT)]
    pub height: usize,

    /// Generate a random paired board instead of reading one
    #[arg(short, long)]
    pub random: bool,

    /// Number of distinct tile kinds for random boards
    #[arg(short, long, default_value_t = DEFAULT_TILE_KINDS)]
    pub kinds: usize,

    /// Seed for random boards
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write an animated GIF replay of the moves to this path
    #[arg(long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Delay between replay frames in milliseconds
    #[arg(long, default_value_t = REPLAY_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Suppress the board printout and progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> log::LevelFilter {
        logging::level_for(self.verbose, self.quiet)
    }
}

/// Drives one board from input to reported solution
pub struct BoardProcessor {
    cli: Cli,
}

impl BoardProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Install logging, then solve and print to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if logging cannot be installed, the board cannot be
    /// loaded, the solver stalls, or the replay cannot be written
    pub fn process(&self) -> Result<()> {
        logging::init(self.cli.log_level())?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Solve the board and write the report to `out`
    ///
    /// Moves found before a stall are still written before the error returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be loaded, the solver stalls, the
    /// report cannot be written, or the replay cannot be exported
    pub fn process_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let grid = self.load_grid()?;
        let total_tiles = grid.occupied_count();

        if !self.cli.quiet {
            writeln!(out, "{grid}")?;
        }

        let mut replay = self.cli.visualize.as_ref().map(|_| ReplayCapture::new(&grid));
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(total_tiles)
        } else {
            ProgressManager::hidden(total_tiles)
        };

        let mut solver = GreedySolver::new(grid);
        let outcome = loop {
            match solver.step() {
                Ok(more) => {
                    progress.update_pass(solver.passes(), total_tiles - solver.remaining_tiles());
                    if !more {
                        progress.finish_solved(solver.moves().len());
                        break Ok(());
                    }
                }
                Err(error) => {
                    progress.finish_stalled();
                    break Err(error);
                }
            }
        };

        Self::write_moves(out, solver.moves())?;

        if let (Some(path), Some(capture)) = (&self.cli.visualize, replay.as_mut()) {
            capture.record_moves(solver.moves());
            if capture.move_count() > 0 {
                capture.export_gif(path, self.cli.frame_delay)?;
            }
        }

        outcome
    }

    fn write_moves<W: Write>(out: &mut W, moves: &[Move]) -> Result<()> {
        for (index, step) in moves.iter().enumerate() {
            writeln!(out, "step {}: {step}", index + 1)?;
        }
        Ok(())
    }

    fn load_grid(&self) -> Result<Grid<String>> {
        self.validate_dimensions()?;

        if self.cli.random {
            log::info!(
                "generating {}x{} board with {} kinds (seed {})",
                self.cli.width,
                self.cli.height,
                self.cli.kinds,
                self.cli.seed
            );
            return random_board(self.cli.width, self.cli.height, self.cli.kinds, self.cli.seed);
        }

        let input = if let Some(path) = &self.cli.file {
            std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?
        } else if let Some(tiles) = &self.cli.tiles {
            tiles.clone()
        } else {
            return Err(invalid_parameter(
                "tiles",
                &"",
                &"provide a tag list, --file or --random",
            ));
        };

        let mut grid = Grid::new(self.cli.width, self.cli.height);
        grid.init(parse_tags(&input))?;
        Ok(grid)
    }

    fn validate_dimensions(&self) -> Result<()> {
        for (parameter, value) in [("width", self.cli.width), ("height", self.cli.height)] {
            if value == 0 || value > MAX_PLAY_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_PLAY_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}
