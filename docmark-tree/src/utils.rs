//! Small helpers shared across passes.
use regex::Regex;

/// Create a regex that never matches anything.
///
/// Fallback for static patterns that fail to compile.
///
/// # Panics
///
/// Panics if `[^\s\S]` fails to compile, which cannot happen.
#[must_use]
#[allow(
  clippy::expect_used,
  reason = "This pattern is guaranteed to be valid"
)]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Case-insensitive ASCII prefix test.
#[must_use]
pub fn starts_with_ignore_ascii_case(haystack: &str, prefix: &str) -> bool {
  haystack
    .get(..prefix.len())
    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
