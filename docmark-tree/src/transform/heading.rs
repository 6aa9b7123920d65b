//! Heading anchors and permalinks.
use log::debug;

use super::TreeTransformer;
use crate::{
  icon::permalink_icon,
  slug::Slugger,
  text,
  tree::{Element, Node},
  types::Header,
  visit::visit_elements_mut,
};

/// Heading levels that receive anchors. `h1` is the page title and is left
/// alone.
pub const ANCHORED_HEADINGS: [&str; 5] = ["h2", "h3", "h4", "h5", "h6"];

/// Gives every non-empty `h2`-`h6` a document-unique id.
///
/// The heading's children become:
///
/// ```text
/// <span id="{id}"></span>
/// <a href="#{id}">{original children}</a>
/// <span class="permalink">{icon}</span>
/// ```
///
/// The empty span is the scroll target.
#[derive(Debug, Default)]
pub struct HeadingAnnotator {
  slugger: Slugger,
  headers: Vec<Header>,
}

impl HeadingAnnotator {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Annotate a single heading element. Headings without text are skipped so
  /// they never claim an id.
  pub fn annotate(&mut self, heading: &mut Element) {
    let text = text::flatten(&heading.children);
    if text.is_empty() {
      return;
    }

    let id = self.slugger.slug(&text);
    debug!("Heading '{text}' anchored as #{id}");

    heading.set_property("className", "heading");
    let content = std::mem::take(&mut heading.children);
    heading.children = vec![
      Element::new("span").with_property("id", id.as_str()).into(),
      Element::new("a")
        .with_property("href", format!("#{id}"))
        .with_children(content)
        .into(),
      Element::new("span")
        .with_property("className", "permalink")
        .with_child(permalink_icon())
        .into(),
    ];

    if let Some(level) = heading.heading_level() {
      self.headers.push(Header { text, level, id });
    }
  }

  /// Headings annotated so far, in document order.
  #[must_use]
  pub fn into_headers(self) -> Vec<Header> {
    self.headers
  }
}

impl TreeTransformer for HeadingAnnotator {
  fn transform(&mut self, tree: &mut Node) {
    visit_elements_mut(
      tree,
      |element| ANCHORED_HEADINGS.contains(&element.tag_name.as_str()),
      |heading| self.annotate(heading),
    );
  }
}
