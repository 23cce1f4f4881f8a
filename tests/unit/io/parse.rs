//! Tests for flat tag list parsing

#[cfg(test)]
mod tests {
    use linkmatch::io::parse::parse_tags;

    // Tests whitespace is stripped anywhere inside an entry
    // Verified by trimming only the entry ends
    #[test]
    fn test_parse_strips_whitespace() {
        let tags = parse_tags(" 2, 1 ,\n0,1 2");

        assert_eq!(
            tags,
            vec![
                Some("2".to_string()),
                Some("1".to_string()),
                Some("0".to_string()),
                Some("12".to_string()),
            ]
        );
    }

    // Tests blank entries and the empty tag become empty cells
    // Verified by keeping blank entries as tags
    #[test]
    fn test_parse_empty_sentinels() {
        let tags = parse_tags("A,_,, ,A");

        assert_eq!(tags.len(), 5);
        assert_eq!(tags.iter().filter(|tag| tag.is_none()).count(), 3);
        assert_eq!(tags.first(), Some(&Some("A".to_string())));
    }

    // Tests a trailing separator adds one empty entry
    // Verified by dropping the final split segment
    #[test]
    fn test_parse_trailing_separator() {
        let tags = parse_tags("a,a,");

        assert_eq!(
            tags,
            vec![Some("a".to_string()), Some("a".to_string()), None]
        );
    }
}
