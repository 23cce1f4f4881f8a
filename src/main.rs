//! CLI entry point for the greedy tile-link solver

use clap::Parser;
use linkmatch::io::cli::{BoardProcessor, Cli};

fn main() -> linkmatch::Result<()> {
    let cli = Cli::parse();
    let processor = BoardProcessor::new(cli);
    processor.process()
}
