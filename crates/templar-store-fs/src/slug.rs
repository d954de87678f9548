//! Identifier generation from template names.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a generated slug, in characters.
pub const MAX_SLUG_LEN: usize = 64;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("static pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("static pattern"));

/// Normalizes a name into a filesystem-safe identifier.
///
/// Lower-cases and trims the input, removes everything that is not a
/// (Unicode) word character, whitespace or hyphen, collapses runs of
/// whitespace, underscores and hyphens into a single `_`, and truncates
/// the result to [`MAX_SLUG_LEN`] characters.
///
/// Different names may produce the same slug; uniqueness is the
/// repository's concern.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let joined = SEPARATORS.replace_all(&stripped, "_");
    joined.chars().take(MAX_SLUG_LEN).collect()
}
