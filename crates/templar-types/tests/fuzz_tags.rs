//! Property-based tests for tag parsing and search matching.

use proptest::prelude::*;
use templar_types::{parse_tags, TemplateSummary};

proptest! {
    /// Parsed tags are never empty and never carry surrounding whitespace.
    #[test]
    fn parsed_tags_are_trimmed_and_non_empty(input in "[a-z ,\\t]{0,64}") {
        for tag in parse_tags(&input) {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tag.contains(','));
        }
    }

    /// A summary always matches any substring of its own name.
    #[test]
    fn name_substring_always_matches(name in "[A-Za-z ]{1,24}", start in 0usize..24, len in 0usize..24) {
        let start = start.min(name.len());
        let end = (start + len).min(name.len());
        let summary = TemplateSummary {
            id: "id".into(),
            name: name.clone(),
            description: String::new(),
            tags: vec![],
        };
        prop_assert!(summary.matches(&name[start..end]));
    }
}
