//! Card markup normalization.
//!
//! Authors write cards as
//!
//! ```html
//! <div class="card">
//!   <a href="/docs/x"><b>Title:</b> <small>What you will find</small></a>
//! </div>
//! ```
//!
//! and the anchor's content is reduced to an `h4` title (without the trailing
//! colon) followed by the `small` description.
use log::trace;

use super::TreeTransformer;
use crate::{
  tree::{Element, Node},
  visit::visit_elements_mut,
};

/// Restructures `div.card` anchors. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardRestructurer;

impl CardRestructurer {
  /// Restructure one card. Divs that do not follow the card convention are
  /// left untouched.
  pub fn restructure(self, card: &mut Element) {
    if !card.has_class("card") {
      return;
    }

    let Some(anchor) = card
      .children
      .iter_mut()
      .find_map(|child| child.as_element_mut().filter(|el| el.tag_name == "a"))
    else {
      return;
    };

    if anchor.children.is_empty() {
      return;
    }

    let (Some(mut title), Some(text)) = (
      first_child_tagged(&anchor.children, "b"),
      first_child_tagged(&anchor.children, "small"),
    ) else {
      return;
    };

    if let Some(Node::Text(last)) = title.children.last_mut()
      && let Some(stripped) = last.value.strip_suffix(':')
    {
      last.value = stripped.to_owned();
    }

    trace!("Restructuring card titled {:?}", crate::text::flatten(&title.children));
    title.tag_name = "h4".to_owned();
    anchor.children = vec![title.into(), text.into()];
  }
}

fn first_child_tagged(children: &[Node], tag: &str) -> Option<Element> {
  children
    .iter()
    .filter_map(Node::as_element)
    .find(|el| el.tag_name == tag)
    .cloned()
}

impl TreeTransformer for CardRestructurer {
  fn transform(&mut self, tree: &mut Node) {
    let cards = *self;
    visit_elements_mut(
      tree,
      |element| element.tag_name == "div",
      |div| cards.restructure(div),
    );
  }
}
