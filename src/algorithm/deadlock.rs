//! Stall detection for the greedy pass loop

use crate::algorithm::groups::TileGroups;
use crate::io::error::PuzzleError;

/// Snapshot of the board when a pass eliminated nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlockReport {
    /// Pass index (1-based) that made no progress
    pub pass: usize,
    /// Moves committed before the stall
    pub moves_made: usize,
    /// Tiles still on the board
    pub remaining_tiles: usize,
    /// Groups still holding live tiles
    pub stuck_groups: usize,
    /// Groups with an odd live count; at least one tile of each can never clear
    pub unpaired_tags: usize,
}

impl DeadlockReport {
    /// Summarise the groups left over after a stalled pass
    pub fn diagnose<T>(groups: &TileGroups<T>, pass: usize, moves_made: usize) -> Self {
        let unpaired_tags = groups
            .iter()
            .filter(|group| group.live_count() % 2 == 1)
            .count();

        Self {
            pass,
            moves_made,
            remaining_tiles: groups.live_tiles(),
            stuck_groups: groups.active_count(),
            unpaired_tags,
        }
    }

    /// Check whether odd tag counts alone make the board impossible
    pub const fn has_unpaired_tiles(&self) -> bool {
        self.unpaired_tags > 0
    }
}

impl From<DeadlockReport> for PuzzleError {
    fn from(report: DeadlockReport) -> Self {
        Self::Unsolvable {
            pass: report.pass,
            moves_made: report.moves_made,
            remaining_tiles: report.remaining_tiles,
            unpaired_tags: report.unpaired_tags,
        }
    }
}
