//! Annotation passes over the document tree.
//!
//! Three passes run in a fixed order, each walking the whole tree:
//!
//! - [`anchor`]: classify every link and rewrite its `href`
//! - [`heading`]: give `h2`-`h6` an id, a self-link and a permalink icon
//! - [`card`]: normalize the `div.card` authoring convention
//!
//! Every pass implements [`TreeTransformer`]. [`DocTreeAnnotator`] wires them
//! together with a fresh pair of sluggers per document.
pub mod anchor;
pub mod card;
pub mod heading;

pub use anchor::AnchorRewriter;
pub use card::CardRestructurer;
pub use heading::HeadingAnnotator;

use crate::{
  tree::Node,
  types::{Header, TransformConfig},
};

/// A single in-place pass over a document tree.
pub trait TreeTransformer {
  fn transform(&mut self, tree: &mut Node);
}

/// Runs the anchor, heading and card passes over one document.
///
/// [`annotate`](Self::annotate) consumes the annotator: the heading pass is
/// not idempotent, so an annotator is good for exactly one tree.
///
/// # Examples
///
/// ```
/// use docmark_tree::{DocTreeAnnotator, TransformConfig, html};
///
/// let config =
///   TransformConfig::new("/docs/intro.md", "https://github.com/org/repo");
/// let mut tree = html::parse_fragment("<h2>Hello World</h2>");
/// let headers = DocTreeAnnotator::new(&config).annotate(&mut tree);
///
/// assert_eq!(headers[0].id, "hello-world");
/// assert!(html::to_html(&tree).contains(r##"<a href="#hello-world">"##));
/// ```
#[derive(Debug)]
pub struct DocTreeAnnotator<'a> {
  anchors:  AnchorRewriter<'a>,
  headings: HeadingAnnotator,
  cards:    CardRestructurer,
}

impl<'a> DocTreeAnnotator<'a> {
  #[must_use]
  pub fn new(config: &'a TransformConfig) -> Self {
    Self {
      anchors:  AnchorRewriter::new(config),
      headings: HeadingAnnotator::new(),
      cards:    CardRestructurer,
    }
  }

  /// Annotate `tree` in place and return the headings that received ids.
  pub fn annotate(self, tree: &mut Node) -> Vec<Header> {
    let Self {
      mut anchors,
      mut headings,
      mut cards,
    } = self;

    anchors.transform(tree);
    headings.transform(tree);
    cards.transform(tree);

    headings.into_headers()
  }
}
