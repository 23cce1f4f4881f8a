//! Seeded random boards built from same-tag pairs
//!
//! Every tag appears an even number of times, so no tile is left without a
//! partner. Whether the greedy solver can clear the result is not checked.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Generate a fully populated board of paired tags `"0"`, `"1"`, ...
///
/// Each pair draws its tag uniformly from `kinds` options; the pairs are then
/// shuffled across the play area. The same seed always yields the same board.
///
/// # Errors
///
/// Returns `InvalidParameter` if `kinds` is zero or the play area has an odd
/// number of cells
pub fn random_board(
    play_width: usize,
    play_height: usize,
    kinds: usize,
    seed: u64,
) -> Result<Grid<String>> {
    if kinds == 0 {
        return Err(invalid_parameter(
            "kinds",
            &kinds,
            &"at least one tile kind is required",
        ));
    }

    let cells = play_width * play_height;
    if cells % 2 != 0 {
        return Err(invalid_parameter(
            "size",
            &format!("{play_width}x{play_height}"),
            &"play area must hold an even number of tiles",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut tags = Vec::with_capacity(cells);
    for _ in 0..cells / 2 {
        let kind = rng.random_range(0..kinds).to_string();
        tags.push(kind.clone());
        tags.push(kind);
    }
    tags.shuffle(&mut rng);

    Grid::with_tags(play_width, play_height, tags)
}
