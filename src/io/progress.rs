//! Terminal progress display for solver passes

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks cleared tiles across solver passes
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for a board with `total_tiles` tiles
    pub fn new(total_tiles: usize) -> Self {
        let bar = ProgressBar::new(total_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix("solving");
        Self { bar }
    }

    /// Create a bar that never draws, for quiet runs and tests
    pub fn hidden(total_tiles: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_tiles as u64);
        Self { bar }
    }

    /// Report the tiles cleared after a pass
    pub fn update_pass(&self, pass: usize, cleared_tiles: usize) {
        self.bar.set_position(cleared_tiles as u64);
        self.bar.set_message(format!("(pass {pass})"));
    }

    /// Tiles reported as cleared so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar after the board was cleared
    pub fn finish_solved(&self, moves: usize) {
        self.bar.finish_with_message(format!("cleared in {moves} moves"));
    }

    /// Close the bar after the solver stalled, leaving it at the stall point
    pub fn finish_stalled(&self) {
        self.bar.abandon_with_message("stalled");
    }
}
