//! Flat tag list parsing for the command-line collaborator

use crate::io::configuration::{EMPTY_TAG, TAG_SEPARATOR};

/// Split a comma-separated tag list into grid input
///
/// All whitespace inside an entry is removed, so `"1, 2,\n3"` yields three
/// tags. An entry that is blank or equal to [`EMPTY_TAG`] becomes `None`.
///
/// Every separator starts a new entry, so a trailing separator yields one
/// more empty cell: `"a,a,"` is three entries, the last one empty.
pub fn parse_tags(input: &str) -> Vec<Option<String>> {
    input
        .split(TAG_SEPARATOR)
        .map(|entry| {
            let tag: String = entry.chars().filter(|c| !c.is_whitespace()).collect();
            (!tag.is_empty() && tag != EMPTY_TAG).then_some(tag)
        })
        .collect()
}
