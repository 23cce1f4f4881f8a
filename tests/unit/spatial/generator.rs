//! Tests for seeded random board generation

#[cfg(test)]
mod tests {
    use linkmatch::PuzzleError;
    use linkmatch::spatial::generator::random_board;
    use std::collections::HashMap;

    // Tests every tag appears an even number of times on a full board
    // Verified by pushing a single tile per pair
    #[test]
    fn test_random_board_is_fully_paired() {
        let Ok(grid) = random_board(10, 7, 7, 42) else {
            unreachable!("a 10x7 board has an even cell count");
        };

        assert_eq!(grid.occupied_count(), 70);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for position in grid.interior_positions() {
            if let Some(tag) = grid.type_at(position) {
                *counts.entry(tag.clone()).or_default() += 1;
            }
        }

        assert!(counts.len() <= 7);
        assert!(counts.values().all(|count| count % 2 == 0));
        assert!(
            counts
                .keys()
                .all(|tag| tag.parse::<usize>().is_ok_and(|kind| kind < 7))
        );
    }

    // Tests the same seed reproduces the same board and another seed differs
    // Verified by seeding from entropy
    #[test]
    fn test_random_board_is_deterministic() {
        let (Ok(first), Ok(second), Ok(other)) = (
            random_board(6, 6, 4, 7),
            random_board(6, 6, 4, 7),
            random_board(6, 6, 4, 8),
        ) else {
            unreachable!("6x6 boards have an even cell count");
        };

        assert_eq!(first.to_string(), second.to_string());
        assert_ne!(first.to_string(), other.to_string());
    }

    // Tests odd play areas and zero kinds are rejected
    // Verified by removing parameter validation
    #[test]
    fn test_random_board_rejects_invalid_parameters() {
        assert!(matches!(
            random_board(3, 3, 4, 1),
            Err(PuzzleError::InvalidParameter {
                parameter: "size",
                ..
            })
        ));
        assert!(matches!(
            random_board(2, 2, 0, 1),
            Err(PuzzleError::InvalidParameter {
                parameter: "kinds",
                ..
            })
        ));
    }
}
