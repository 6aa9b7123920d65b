//! The permalink icon placed after every annotated heading.
use crate::tree::{Element, Node};

/// Build the permalink icon sub-tree: a small inline "link" glyph.
#[must_use]
pub fn permalink_icon() -> Node {
  let path = |d: &str| -> Node { Element::new("path").with_property("d", d).into() };

  Element::new("svg")
    .with_property("viewBox", "0 0 24 24")
    .with_property("width", "16")
    .with_property("height", "16")
    .with_property("stroke", "currentColor")
    .with_property("stroke-width", "1.5")
    .with_property("stroke-linecap", "round")
    .with_property("stroke-linejoin", "round")
    .with_property("fill", "none")
    .with_property("shape-rendering", "geometricPrecision")
    .with_property("aria-hidden", "true")
    .with_child(path(
      "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71",
    ))
    .with_child(path(
      "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
    ))
    .into()
}
