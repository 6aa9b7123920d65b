//! End-to-end document processing.
//!
//! [`DocProcessor`] takes a document in any of the supported input forms,
//! runs a fresh [`DocTreeAnnotator`] over it and hands back the annotated
//! tree together with its HTML and heading list.
use log::debug;

use crate::{
  html,
  markdown::{self, MarkdownOptions},
  text,
  transform::DocTreeAnnotator,
  tree::Node,
  types::{RenderResult, TransformConfig},
};

/// Renders and annotates documents.
#[derive(Debug, Clone, Default)]
pub struct DocProcessor {
  options: MarkdownOptions,
}

impl DocProcessor {
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown and annotate the result.
  #[must_use]
  pub fn render(&self, markdown: &str, config: &TransformConfig) -> RenderResult {
    self.annotate_tree(markdown::to_tree(markdown, self.options), config)
  }

  /// Annotate an HTML fragment.
  #[must_use]
  pub fn annotate_html(&self, html: &str, config: &TransformConfig) -> RenderResult {
    self.annotate_tree(html::parse_fragment(html), config)
  }

  /// Annotate an already parsed tree.
  #[must_use]
  pub fn annotate_tree(&self, mut tree: Node, config: &TransformConfig) -> RenderResult {
    debug!("Annotating {}", config.file_path);

    let title = find_title(&tree);
    let headers = DocTreeAnnotator::new(config).annotate(&mut tree);
    let html = html::to_html(&tree);

    RenderResult {
      tree,
      html,
      headers,
      title,
    }
  }
}

/// Flattened text of the first non-empty `h1`.
fn find_title(node: &Node) -> Option<String> {
  if node.tag_name() == Some("h1") {
    let text = text::to_string(node);
    let text = text.trim();
    if !text.is_empty() {
      return Some(text.to_owned());
    }
  }

  node.children()?.iter().find_map(find_title)
}
