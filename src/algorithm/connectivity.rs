//! Bounded-turn link reachability between two cells
//!
//! A link is a path through empty cells with at most two right-angle turns.
//! Turns are modelled by the empty runs radiating from each endpoint: one
//! turn means a cell on one endpoint's run sees the other endpoint in a
//! straight line, two turns means a cell on each run see each other.
//!
//! None of these predicates compare tags; matching is the caller's concern.

use crate::io::error::{PuzzleError, Result};
use crate::spatial::{Grid, Position};

/// Check whether two cells are joined by a straight run of empty cells
///
/// The cells must share exactly one axis. Adjacent cells are always directly
/// linkable; identical cells never are.
pub fn directly_linkable<T>(grid: &Grid<T>, a: Position, b: Position) -> bool {
    if a.x == b.x && a.y == b.y {
        return false;
    }

    if a.x == b.x {
        let (start, end) = ordered(a.y, b.y);
        ((start + 1)..end).all(|y| grid.is_empty_at(Position::new(a.x, y)))
    } else if a.y == b.y {
        let (start, end) = ordered(a.x, b.x);
        ((start + 1)..end).all(|x| grid.is_empty_at(Position::new(x, a.y)))
    } else {
        false
    }
}

/// Empty cells visible from `p` in a straight line
///
/// Walks left, right, up and down in that order, stopping each walk at the
/// first occupied cell or the grid edge. `p` itself is never included.
pub fn empty_reach<T>(grid: &Grid<T>, p: Position) -> Vec<Position> {
    if !grid.contains(p) {
        return Vec::new();
    }

    let left = (0..p.x).rev().map(|x| Position::new(x, p.y));
    let right = (p.x + 1..grid.width()).map(|x| Position::new(x, p.y));
    let up = (0..p.y).rev().map(|y| Position::new(p.x, y));
    let down = (p.y + 1..grid.height()).map(|y| Position::new(p.x, y));

    let mut reach = Vec::new();
    reach.extend(left.take_while(|&q| grid.is_empty_at(q)));
    reach.extend(right.take_while(|&q| grid.is_empty_at(q)));
    reach.extend(up.take_while(|&q| grid.is_empty_at(q)));
    reach.extend(down.take_while(|&q| grid.is_empty_at(q)));
    reach
}

/// Number of turns on the first link found between `a` and `b`
///
/// Rules are tried in order: direct, a turn at a cell seen from `a`, a turn
/// at a cell seen from `b`, then two turns joining both reaches.
pub fn link_turns<T>(grid: &Grid<T>, a: Position, b: Position) -> Option<usize> {
    if directly_linkable(grid, a, b) {
        return Some(0);
    }

    let a_reach = empty_reach(grid, a);
    if a_reach.iter().any(|&p| directly_linkable(grid, p, b)) {
        return Some(1);
    }

    let b_reach = empty_reach(grid, b);
    if b_reach.iter().any(|&q| directly_linkable(grid, q, a)) {
        return Some(1);
    }

    let two_turns = a_reach
        .iter()
        .any(|&p| b_reach.iter().any(|&q| directly_linkable(grid, p, q)));
    two_turns.then_some(2)
}

/// Check whether `a` and `b` can be linked with at most two turns
pub fn linkable<T>(grid: &Grid<T>, a: Position, b: Position) -> bool {
    link_turns(grid, a, b).is_some()
}

/// Reachability query that rejects empty endpoints
///
/// # Errors
///
/// Returns `SelfLink` if `a` and `b` are the same cell, and
/// `EmptyCellOperation` naming the first endpoint found empty
pub fn check_linkable<T>(grid: &Grid<T>, a: Position, b: Position) -> Result<bool> {
    if a == b {
        return Err(PuzzleError::SelfLink { position: a });
    }
    for position in [a, b] {
        if grid.is_empty_at(position) {
            return Err(PuzzleError::EmptyCellOperation { position });
        }
    }
    Ok(linkable(grid, a, b))
}

const fn ordered(first: usize, second: usize) -> (usize, usize) {
    if first < second {
        (first, second)
    } else {
        (second, first)
    }
}
