use regex::Regex;
use std::sync::LazyLock;

/// Number of leading characters dropped from a compacted feed name.
///
/// Numbered feed names look like `"465633 (2009 JR5)"`; once compacted, the first six characters
/// are the catalogue number and the rest is the provisional designation. Names with a different
/// shape lose characters of the designation itself.
pub const NAME_PREFIX_LEN: usize = 6;

static STRIP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s()]").unwrap());

/// Derives the small-body database search string from a feed object name.
///
/// All whitespace and parentheses are removed, then [`NAME_PREFIX_LEN`] characters are dropped
/// from the front. Names that are too short yield an empty key.
pub fn sbdb_lookup_key(name: &str) -> String {
    STRIP_REGEX.replace_all(name, "").chars().skip(NAME_PREFIX_LEN).collect()
}
