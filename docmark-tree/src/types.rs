//! Types for the docmark-tree public API.
use serde::{Deserialize, Serialize};

use crate::tree::Node;

/// A heading that received an anchor id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Flattened heading text.
  pub text:  String,
  /// Heading level (2-6).
  pub level: u8,
  /// Generated anchor id, unique within the document.
  pub id:    String,
}

/// Per-document configuration for the annotation passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransformConfig {
  /// Logical source path of the document, e.g. `/docs/getting-started.md`.
  pub file_path: String,
  /// Base URL of the source repository, used for links the site does not
  /// route itself.
  pub repo_url:  String,
}

impl TransformConfig {
  #[must_use]
  pub fn new<P: Into<String>, R: Into<String>>(file_path: P, repo_url: R) -> Self {
    Self {
      file_path: file_path.into(),
      repo_url:  repo_url.into(),
    }
  }
}

/// Result of running a document through [`DocProcessor`](crate::DocProcessor).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderResult {
  /// The annotated tree.
  pub tree:    Node,
  /// The annotated tree serialized as HTML.
  pub html:    String,
  /// Annotated headings, in document order.
  pub headers: Vec<Header>,
  /// Text of the first `h1`, if any.
  pub title:   Option<String>,
}
