//! Mutable pre-order traversal over the document tree.
use crate::tree::{Element, Node};

/// Visit every element matching `test`, in document order.
///
/// The visitor runs before the element's children are walked, so children it
/// installs are visited too. Returning from the visitor never stops the walk.
pub fn visit_elements_mut<T, V>(tree: &mut Node, test: T, mut visitor: V)
where
  T: Fn(&Element) -> bool,
  V: FnMut(&mut Element),
{
  walk(tree, &test, &mut visitor);
}

fn walk(
  node: &mut Node,
  test: &dyn Fn(&Element) -> bool,
  visitor: &mut dyn FnMut(&mut Element),
) {
  if let Node::Element(element) = node
    && test(element)
  {
    visitor(element);
  }

  if let Some(children) = node.children_mut() {
    for child in children {
      walk(child, test, visitor);
    }
  }
}
