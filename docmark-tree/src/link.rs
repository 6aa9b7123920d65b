//! Link classification and resolution helpers for the anchor pass.
use url::Url;

use crate::utils::starts_with_ignore_ascii_case;

/// Prefix of in-site documentation routes.
pub const DOCS_ROUTE_PREFIX: &str = "/docs";

/// Where an `href` points, which decides how the anchor pass rewrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
  /// `http://`, `https://` or protocol-relative `//`.
  Absolute,
  /// Anything relative that the site does not route itself; resolved
  /// against the source repository.
  Repository,
  /// A same-page `#hash` or a `/docs` route.
  InSite {
    /// The link targets a `/docs` route rather than a bare hash.
    docs: bool,
  },
}

impl LinkKind {
  /// Classify an `href`.
  ///
  /// ```
  /// use docmark_tree::link::LinkKind;
  ///
  /// assert_eq!(LinkKind::classify("//cdn.example.com"), LinkKind::Absolute);
  /// assert_eq!(LinkKind::classify("../README.md"), LinkKind::Repository);
  /// assert_eq!(LinkKind::classify("#usage"), LinkKind::InSite { docs: false });
  /// assert_eq!(LinkKind::classify("/docs/api"), LinkKind::InSite { docs: true });
  /// ```
  #[must_use]
  pub fn classify(href: &str) -> Self {
    if is_absolute_url(href) {
      return Self::Absolute;
    }

    let docs = href.starts_with(DOCS_ROUTE_PREFIX);
    if href.starts_with('#') || docs {
      Self::InSite { docs }
    } else {
      // Other rooted paths such as `/blog` land here as well
      Self::Repository
    }
  }

  /// Whether links of this kind open in a new browsing context.
  #[must_use]
  pub const fn is_external(self) -> bool {
    matches!(self, Self::Absolute | Self::Repository)
  }
}

/// `http://`, `https://` (any case) or `//`.
#[must_use]
pub fn is_absolute_url(href: &str) -> bool {
  href.starts_with("//")
    || starts_with_ignore_ascii_case(href, "http://")
    || starts_with_ignore_ascii_case(href, "https://")
}

/// Strip the file extension from the path portion of a link, keeping any
/// `#hash` or `?query` suffix.
///
/// ```
/// use docmark_tree::link::remove_ext;
///
/// assert_eq!(remove_ext("/docs/guide.md#setup"), "/docs/guide#setup");
/// assert_eq!(remove_ext("/docs/guide?tab=1"), "/docs/guide?tab=1");
/// ```
#[must_use]
pub fn remove_ext(path: &str) -> String {
  let base_len = path.find(['#', '?']).unwrap_or(path.len());
  let (base, suffix) = path.split_at(base_len);

  match base.rfind('.') {
    Some(dot) => format!("{}{suffix}", &base[..dot]),
    None => path.to_owned(),
  }
}

/// Split an `href` into the part before the first `#` and the segment
/// between the first and second `#`. Anything after a second `#` is dropped,
/// and an empty hash is `None`.
///
/// ```
/// use docmark_tree::link::split_hash;
///
/// assert_eq!(split_hash("/docs/a.md#Setup"), ("/docs/a.md", Some("Setup")));
/// assert_eq!(split_hash("../g#A#B"), ("../g", Some("A")));
/// assert_eq!(split_hash("guide.md#"), ("guide.md", None));
/// ```
#[must_use]
pub fn split_hash(href: &str) -> (&str, Option<&str>) {
  let mut parts = href.split('#');
  let path = parts.next().unwrap_or_default();
  (path, parts.next().filter(|hash| !hash.is_empty()))
}

/// Base URL of a document inside the source repository.
#[must_use]
pub fn repository_file_url(repo_url: &str, file_path: &str) -> String {
  format!("{repo_url}/{}", file_path.strip_prefix('/').unwrap_or(file_path))
}

/// Resolve `href` against the document's location in the repository.
///
/// # Errors
///
/// Returns an error if the base does not parse as a URL or the reference
/// cannot be joined onto it.
pub fn resolve_repository_link(
  repo_url: &str,
  file_path: &str,
  href: &str,
) -> Result<String, url::ParseError> {
  let base = Url::parse(&repository_file_url(repo_url, file_path))?;
  Ok(base.join(href)?.to_string())
}
