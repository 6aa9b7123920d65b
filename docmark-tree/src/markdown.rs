//! Markdown front end: `comrak` renders HTML, which is then parsed into the
//! document tree.
use comrak::{Options, markdown_to_html};

use crate::{html, tree::Node};

/// Options for the Markdown front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
  /// task lists, autolinks, footnotes).
  pub gfm: bool,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm: cfg!(feature = "gfm"),
    }
  }
}

impl MarkdownOptions {
  /// Build comrak options. Raw HTML is always passed through since card
  /// markup is written by hand.
  fn comrak_options(self) -> Options<'static> {
    let mut options = Options::default();
    if self.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    options.render.r#unsafe = true;
    options
  }
}

/// Render Markdown to HTML.
#[must_use]
pub fn to_html(markdown: &str, options: MarkdownOptions) -> String {
  markdown_to_html(markdown, &options.comrak_options())
}

/// Render Markdown straight to a document tree.
#[must_use]
pub fn to_tree(markdown: &str, options: MarkdownOptions) -> Node {
  html::parse_fragment(&to_html(markdown, options))
}
