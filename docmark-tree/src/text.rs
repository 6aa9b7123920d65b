//! Text flattening.
use crate::tree::Node;

/// Concatenate every descendant text leaf of `node` in document order.
///
/// Comments and raw markup do not contribute; an element with no text
/// descendants flattens to the empty string.
#[must_use]
pub fn to_string(node: &Node) -> String {
  let mut text = String::new();
  push_text(node, &mut text);
  text
}

/// Flatten a list of sibling nodes, as [`to_string`] does for their parent.
#[must_use]
pub fn flatten(nodes: &[Node]) -> String {
  let mut text = String::new();
  for node in nodes {
    push_text(node, &mut text);
  }
  text
}

fn push_text(node: &Node, out: &mut String) {
  match node {
    Node::Text(literal) => out.push_str(&literal.value),
    Node::Comment(_) | Node::Raw(_) | Node::Doctype => {},
    Node::Root(_) | Node::Element(_) => {
      for child in node.children().unwrap_or_default() {
        push_text(child, out);
      }
    },
  }
}
