//! Greedy pair elimination over a tile grid
//!
//! Each pass walks the tag groups in discovery order. Within a group, the
//! first linkable pair of live members (ascending index order) is removed
//! and the scan restarts on the shrunk group until no pair remains. A pass
//! that removes nothing ends the search with `Unsolvable`.
//!
//! The strategy never backtracks, so some boards that could be cleared under
//! a different elimination order are reported as unsolvable.

use std::fmt;
use std::hash::Hash;

use crate::algorithm::connectivity;
use crate::algorithm::deadlock::DeadlockReport;
use crate::algorithm::groups::{TileGroup, TileGroups};
use crate::io::error::Result;
use crate::spatial::{Grid, Position};

/// One recorded elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Cell activated first
    pub first: Position,
    /// Cell activated second
    pub second: Position,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// Ordered elimination sequence that clears a board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    /// Moves in the order they must be replayed
    pub moves: Vec<Move>,
    /// Solver passes it took to find them
    pub passes: usize,
}

impl Solution {
    /// Number of moves
    pub const fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check whether the board was already empty
    pub const fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Cells to activate, two per move, in replay order
    pub fn activations(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves
            .iter()
            .flat_map(|step| [step.first, step.second])
    }
}

/// Greedy, non-backtracking solver that owns the grid it clears
#[derive(Debug, Clone)]
pub struct GreedySolver<T> {
    grid: Grid<T>,
    groups: TileGroups<T>,
    moves: Vec<Move>,
    passes: usize,
}

impl<T: Clone + Eq + Hash> GreedySolver<T> {
    /// Index the grid's tiles by tag and take ownership of the grid
    pub fn new(grid: Grid<T>) -> Self {
        let groups = TileGroups::from_grid(&grid);
        log::debug!(
            "solver indexed {} tiles into {} groups",
            groups.live_tiles(),
            groups.active_count()
        );

        Self {
            grid,
            groups,
            moves: Vec::new(),
            passes: 0,
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Release the grid, for example to inspect a stalled board
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Moves committed so far
    pub const fn moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    /// Passes run so far
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Tiles not yet eliminated
    pub fn remaining_tiles(&self) -> usize {
        self.groups.live_tiles()
    }

    /// Check whether every group has been cleared
    pub const fn is_solved(&self) -> bool {
        self.groups.is_empty()
    }

    /// Next pair the scan would eliminate, without changing any state
    pub fn find_move(&self) -> Option<Move> {
        self.groups
            .iter()
            .find_map(|group| self.find_pair_in(group))
    }

    /// Summary of the current board for stall reporting
    pub fn deadlock_report(&self) -> DeadlockReport {
        DeadlockReport::diagnose(&self.groups, self.passes, self.moves.len())
    }

    /// Run one pass over every active group
    ///
    /// Returns the number of pairs eliminated. Groups emptied by the pass are
    /// dropped before returning.
    ///
    /// # Errors
    ///
    /// Propagates link errors from the grid; these cannot occur for pairs the
    /// scan selects, since both cells always hold the group's tag.
    pub fn run_pass(&mut self) -> Result<usize> {
        let mut eliminated = 0;

        for index in 0..self.groups.active_count() {
            while let Some(candidate) = self.next_pair(index) {
                if !self.grid.link(candidate.first, candidate.second)? {
                    break;
                }
                if let Some(group) = self.groups.get_mut(index) {
                    group.retire(candidate.first);
                    group.retire(candidate.second);
                }
                self.moves.push(candidate);
                eliminated += 1;

                log::debug!("step {}: {candidate}", self.moves.len());
            }
        }

        self.passes += 1;
        let dropped = self.groups.prune();
        log::trace!(
            "pass {}: {eliminated} pairs eliminated, {dropped} groups cleared, {} tiles remain",
            self.passes,
            self.groups.live_tiles()
        );

        Ok(eliminated)
    }

    /// Run one pass and report whether more work remains
    ///
    /// Returns `Ok(false)` once the board is clear.
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` when the pass eliminates nothing
    pub fn step(&mut self) -> Result<bool> {
        if self.is_solved() {
            return Ok(false);
        }

        if self.run_pass()? == 0 {
            let report = self.deadlock_report();
            log::warn!(
                "no linkable pair in pass {}: {} tiles left in {} groups",
                report.pass,
                report.remaining_tiles,
                report.stuck_groups
            );
            return Err(report.into());
        }

        Ok(!self.is_solved())
    }

    /// Run passes until the board is clear
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` if a pass makes no progress. Moves committed before
    /// the stall remain available through [`Self::moves`].
    pub fn solve(&mut self) -> Result<Solution> {
        while self.step()? {}

        Ok(Solution {
            moves: self.moves.clone(),
            passes: self.passes,
        })
    }

    fn next_pair(&self, group_index: usize) -> Option<Move> {
        self.groups
            .get(group_index)
            .and_then(|group| self.find_pair_in(group))
    }

    fn find_pair_in(&self, group: &TileGroup<T>) -> Option<Move> {
        let live = group.live_members();

        live.iter().enumerate().find_map(|(i, &first)| {
            live.iter().skip(i + 1).find_map(|&second| {
                let same_tag = match (self.grid.type_at(first), self.grid.type_at(second)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                };
                (same_tag && connectivity::linkable(&self.grid, first, second))
                    .then_some(Move { first, second })
            })
        })
    }
}

/// Solve a grid with the greedy strategy
///
/// # Errors
///
/// Returns `Unsolvable` if the greedy scan stalls before the board is clear
pub fn solve<T: Clone + Eq + Hash>(grid: Grid<T>) -> Result<Solution> {
    GreedySolver::new(grid).solve()
}
