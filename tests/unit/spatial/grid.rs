//! Tests for grid construction, border handling and the checked link operation

#[cfg(test)]
mod tests {
    use linkmatch::{Grid, Position, PuzzleError};

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    // Tests that interior cells are filled x-major and the border stays empty
    // Verified by swapping the loop order during init
    #[test]
    fn test_init_fills_interior_x_major() {
        let Ok(grid) = Grid::with_tags(2, 3, ["a", "b", "c", "d", "e", "f"]) else {
            unreachable!("six tags fit a 2x3 play area");
        };

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.type_at(pos(1, 1)), Some(&"a"));
        assert_eq!(grid.type_at(pos(1, 3)), Some(&"c"));
        assert_eq!(grid.type_at(pos(2, 1)), Some(&"d"));
        assert_eq!(grid.type_at(pos(2, 3)), Some(&"f"));

        for x in 0..grid.width() {
            assert!(grid.is_empty_at(pos(x, 0)));
            assert!(grid.is_empty_at(pos(x, grid.height() - 1)));
        }
        for y in 0..grid.height() {
            assert!(grid.is_empty_at(pos(0, y)));
            assert!(grid.is_empty_at(pos(grid.width() - 1, y)));
        }
        assert_eq!(grid.occupied_count(), 6);
    }

    // Tests wrong-length input is rejected and leaves the grid empty
    // Verified by removing the length check
    #[test]
    fn test_init_rejects_wrong_length() {
        let mut grid: Grid<&str> = Grid::new(2, 2);
        let result = grid.init(["A", "B", "C"].map(Some));

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidInput {
                expected: 4,
                actual: 3
            })
        ));
        assert!(grid.is_cleared());
    }

    // Tests that a populated grid cannot be repopulated
    // Verified by dropping the initialized flag
    #[test]
    fn test_init_only_once() {
        let mut grid = Grid::new(1, 2);
        assert!(grid.init([Some("A"), Some("A")]).is_ok());

        let second = grid.init([Some("B"), Some("B")]);
        assert!(matches!(second, Err(PuzzleError::AlreadyInitialized)));
        assert_eq!(grid.type_at(pos(1, 1)), Some(&"A"));
    }

    // Tests the empty sentinel in init input
    // Verified by treating None as a tag
    #[test]
    fn test_init_accepts_empty_sentinel() {
        let mut grid = Grid::new(3, 1);
        assert!(grid.init([Some("A"), None, Some("A")]).is_ok());

        assert!(grid.is_empty_at(pos(2, 1)));
        assert_eq!(grid.occupied_count(), 2);
    }

    // Tests that cleared cells stay empty and clearing again is a no-op
    // Verified by restoring the tag on a second clear
    #[test]
    fn test_clear_is_monotonic() {
        let Ok(mut grid) = Grid::with_tags(2, 1, ["A", "B"]) else {
            unreachable!("two tags fit a 2x1 play area");
        };

        assert_eq!(grid.clear(pos(1, 1)), Some("A"));
        assert_eq!(grid.type_at(pos(1, 1)), None);
        assert_eq!(grid.clear(pos(1, 1)), None);
        assert_eq!(grid.type_at(pos(1, 1)), None);
        assert_eq!(grid.type_at(pos(2, 1)), Some(&"B"));
    }

    // Tests off-grid reads behave as empty cells
    // Verified by returning a tag for out-of-range lookups
    #[test]
    fn test_off_grid_reads_empty() {
        let Ok(grid) = Grid::with_tags(1, 1, ["A"]) else {
            unreachable!("one tag fits a 1x1 play area");
        };

        assert!(grid.cell(pos(5, 5)).is_none());
        assert!(grid.type_at(pos(5, 5)).is_none());
        assert!(!grid.contains(pos(3, 0)));
        assert!(grid.contains(pos(2, 2)));
        assert!(grid.is_interior(pos(1, 1)));
        assert!(!grid.is_interior(pos(0, 1)));
    }

    // Tests that a successful link clears both cells
    // Verified by clearing only the first cell
    #[test]
    fn test_link_clears_matching_pair() {
        let Ok(mut grid) = Grid::with_tags(2, 1, ["A", "A"]) else {
            unreachable!("two tags fit a 2x1 play area");
        };

        assert!(matches!(grid.link(pos(1, 1), pos(2, 1)), Ok(true)));
        assert!(grid.is_cleared());
    }

    // Tests the link error precedence of mismatch, empty and self links
    // Verified by checking emptiness before tag equality
    #[test]
    fn test_link_rejects_invalid_pairs() {
        let mut grid = Grid::new(3, 1);
        assert!(grid.init([Some("A"), Some("B"), None]).is_ok());

        assert!(matches!(
            grid.link(pos(1, 1), pos(2, 1)),
            Err(PuzzleError::TypeMismatch { .. })
        ));
        assert!(matches!(
            grid.link(pos(1, 1), pos(3, 1)),
            Err(PuzzleError::TypeMismatch { .. })
        ));
        assert!(matches!(
            grid.link(pos(3, 1), pos(0, 0)),
            Err(PuzzleError::EmptyCellOperation { .. })
        ));
        assert!(matches!(
            grid.link(pos(1, 1), pos(1, 1)),
            Err(PuzzleError::SelfLink { .. })
        ));
        assert_eq!(grid.occupied_count(), 2);
    }

    // Tests an unreachable same-tag pair is reported without mutation
    // Verified by clearing before checking reachability
    #[test]
    fn test_link_unreachable_pair_is_untouched() {
        // A and B in a diagonal 2x2 block need three turns
        let Ok(mut grid) = Grid::with_tags(2, 2, ["A", "B", "B", "A"]) else {
            unreachable!("four tags fit a 2x2 play area");
        };

        assert!(matches!(grid.link(pos(1, 1), pos(2, 2)), Ok(false)));
        assert_eq!(grid.occupied_count(), 4);
    }

    // Tests the matrix printout, one x line per text line
    // Verified by iterating columns instead of rows
    #[test]
    fn test_display_renders_padded_matrix() {
        let Ok(grid) = Grid::with_tags(1, 2, ["A", "B"]) else {
            unreachable!("two tags fit a 1x2 play area");
        };

        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec![". . . .", ". A B .", ". . . ."]);
    }
}
