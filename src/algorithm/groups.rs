//! Per-tag index of live tiles used by the solver
//!
//! Members are never physically removed. Each group keeps a liveness bit per
//! member so that pair scans iterate a stable sequence while eliminated
//! members are skipped.

use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;

use crate::spatial::{Grid, Position};

/// Live set of interior cells sharing one tag
#[derive(Debug, Clone)]
pub struct TileGroup<T> {
    tag: T,
    members: Vec<Position>,
    live: BitVec,
}

impl<T> TileGroup<T> {
    fn new(tag: T) -> Self {
        Self {
            tag,
            members: Vec::new(),
            live: BitVec::new(),
        }
    }

    fn push(&mut self, position: Position) {
        self.members.push(position);
        self.live.push(true);
    }

    /// Tag shared by every member
    pub const fn tag(&self) -> &T {
        &self.tag
    }

    /// Number of members not yet eliminated
    pub fn live_count(&self) -> usize {
        self.live.count_ones()
    }

    /// Check whether every member has been eliminated
    pub fn is_exhausted(&self) -> bool {
        self.live.not_any()
    }

    /// Positions of the members still in play, in discovery order
    pub fn live_members(&self) -> Vec<Position> {
        self.live
            .iter_ones()
            .filter_map(|index| self.members.get(index).copied())
            .collect()
    }

    /// Mark a member as eliminated; returns `false` if it was not live
    pub fn retire(&mut self, position: Position) -> bool {
        let Some(index) = self.members.iter().position(|&member| member == position) else {
            return false;
        };
        let was_live = self.live.get(index).as_deref() == Some(&true);
        self.live.set(index, false);
        was_live
    }
}

/// All tag groups of a board, in the order their tags were first seen
#[derive(Debug, Clone)]
pub struct TileGroups<T> {
    groups: Vec<TileGroup<T>>,
}

impl<T: Clone + Eq + Hash> TileGroups<T> {
    /// Index the occupied interior cells of a grid by tag
    ///
    /// Cells are visited `x` outer and `y` inner, which fixes both the group
    /// order and the member order within each group.
    pub fn from_grid(grid: &Grid<T>) -> Self {
        let mut slots: HashMap<T, usize> = HashMap::new();
        let mut groups: Vec<TileGroup<T>> = Vec::new();

        for position in grid.interior_positions() {
            let Some(tag) = grid.type_at(position) else {
                continue;
            };
            let slot = *slots.entry(tag.clone()).or_insert_with(|| {
                groups.push(TileGroup::new(tag.clone()));
                groups.len() - 1
            });
            if let Some(group) = groups.get_mut(slot) {
                group.push(position);
            }
        }

        Self { groups }
    }
}

impl<T> TileGroups<T> {
    /// Number of groups still holding live members
    pub const fn active_count(&self) -> usize {
        self.groups.len()
    }

    /// Check whether every group has been dropped
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total live members across all groups
    pub fn live_tiles(&self) -> usize {
        self.groups.iter().map(TileGroup::live_count).sum()
    }

    /// Iterate the active groups in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, TileGroup<T>> {
        self.groups.iter()
    }

    /// Access one active group
    pub fn get(&self, index: usize) -> Option<&TileGroup<T>> {
        self.groups.get(index)
    }

    /// Mutable access to one active group
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TileGroup<T>> {
        self.groups.get_mut(index)
    }

    /// Drop groups with no live members; returns how many were dropped
    pub fn prune(&mut self) -> usize {
        let before = self.groups.len();
        self.groups.retain(|group| !group.is_exhausted());
        before - self.groups.len()
    }
}

impl<'a, T> IntoIterator for &'a TileGroups<T> {
    type Item = &'a TileGroup<T>;
    type IntoIter = std::slice::Iter<'a, TileGroup<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
