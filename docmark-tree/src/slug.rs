//! GitHub-compatible heading slugs.
//!
//! Slugs are produced the way GitHub renders heading anchors: the text is
//! lowercased, everything that is not a letter, mark, number, connector
//! punctuation, hyphen or space is removed, and every space becomes a hyphen.
//! A [`Slugger`] additionally keeps every slug it handed out unique.
use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::utils::never_matching_regex;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} -]").unwrap_or_else(|e| {
    log::error!(
      "Failed to compile slug STRIP_RE regex: {e}\n Falling back to never \
       matching regex."
    );
    never_matching_regex()
  })
});

/// Slugify `text` without any disambiguation.
///
/// ```
/// assert_eq!(docmark_tree::slug::slugify("Hello, World!"), "hello-world");
/// assert_eq!(docmark_tree::slug::slugify("Install  Steps"), "install--steps");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
  STRIP_RE
    .replace_all(&text.to_lowercase(), "")
    .replace(' ', "-")
}

/// Stateful slug generator that disambiguates repeated slugs with a numeric
/// suffix: `foo`, `foo-1`, `foo-2`.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
  occurrences: HashMap<String, usize>,
}

impl Slugger {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Slug `text`, unique among every slug this instance returned since the
  /// last [`reset`](Self::reset).
  pub fn slug(&mut self, text: &str) -> String {
    let original = slugify(text);
    let mut slug = original.clone();

    while self.occurrences.contains_key(&slug) {
      let count = self.occurrences.entry(original.clone()).or_insert(0);
      *count += 1;
      slug = format!("{original}-{count}");
    }

    self.occurrences.insert(slug.clone(), 0);
    slug
  }

  /// Forget every slug seen so far.
  pub fn reset(&mut self) {
    self.occurrences.clear();
  }
}
