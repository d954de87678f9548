//! Property-based tests for `slugify`.

use proptest::prelude::*;
use templar_store_fs::slug::{slugify, MAX_SLUG_LEN};

proptest! {
    /// Arbitrary input never panics and never exceeds the length cap.
    #[test]
    fn bounded_length(input in "\\PC{0,256}") {
        prop_assert!(slugify(&input).chars().count() <= MAX_SLUG_LEN);
    }

    /// ASCII input only ever yields `[a-z0-9_]`.
    #[test]
    fn ascii_charset(input in "[ -~]{0,128}") {
        let slug = slugify(&input);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unexpected char in {slug:?}",
        );
    }

    /// Slugifying a slug is a no-op for ASCII input.
    #[test]
    fn idempotent_on_ascii(input in "[ -~]{0,128}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    /// Same input, same output.
    #[test]
    fn deterministic(input in "\\PC{0,64}") {
        prop_assert_eq!(slugify(&input), slugify(&input));
    }
}
