//! Conversion between HTML and the document tree.
//!
//! Parsing goes through `kuchikikiki` (html5ever), so the tree is whatever a
//! browser would build for the fragment. Serialization writes the tree
//! directly with `html-escape` rather than rebuilding a `kuchikikiki` DOM
//! just to use its serializer.
use kuchikikiki::NodeRef;
use log::trace;
use tendril::TendrilSink;

use crate::tree::{Element, Node, Properties, PropertyValue};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
  "source", "track", "wbr",
];

/// Elements whose text content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Parse an HTML fragment into a [`Node::Root`].
///
/// The fragment is parsed as a document. The `<html>`, `<head>` and `<body>`
/// wrappers the parser inserts are dropped and their content lifted to the
/// top level in document order, so a leading `<style>` or a comment before
/// the first element is kept. Doctypes and processing instructions are
/// dropped.
#[must_use]
pub fn parse_fragment(html: &str) -> Node {
  let document = kuchikikiki::parse_html().one(html);

  let mut children = Vec::new();
  lift_wrapped_children(&document, &mut children);

  trace!("Parsed HTML fragment into {} top-level nodes", children.len());
  Node::root(children)
}

fn lift_wrapped_children(parent: &NodeRef, out: &mut Vec<Node>) {
  for child in parent.children() {
    let is_wrapper = child
      .as_element()
      .is_some_and(|element| matches!(&*element.name.local, "html" | "head" | "body"));

    if is_wrapper {
      lift_wrapped_children(&child, out);
    } else if let Some(node) = convert(&child) {
      out.push(node);
    }
  }
}

fn convert_children(parent: &NodeRef) -> Vec<Node> {
  parent.children().filter_map(|child| convert(&child)).collect()
}

fn convert(node: &NodeRef) -> Option<Node> {
  if let Some(element) = node.as_element() {
    let mut properties = Properties::new();
    for (name, attribute) in &element.attributes.borrow().map {
      let (key, value) = attribute_to_property(name.local.as_ref(), &attribute.value);
      properties.insert(key, value);
    }

    // `<template>` keeps its content in a separate fragment
    let children = element
      .template_contents
      .as_ref()
      .map_or_else(|| convert_children(node), convert_children);

    return Some(Node::Element(Element {
      tag_name: element.name.local.as_ref().to_owned(),
      properties,
      children,
    }));
  }

  if let Some(text) = node.as_text() {
    return Some(Node::text(text.borrow().as_str()));
  }

  node
    .as_comment()
    .map(|comment| Node::comment(comment.borrow().as_str()))
}

fn attribute_to_property(name: &str, value: &str) -> (String, PropertyValue) {
  match name {
    "class" => (
      "className".to_owned(),
      PropertyValue::List(value.split_whitespace().map(ToOwned::to_owned).collect()),
    ),
    "for" => ("htmlFor".to_owned(), PropertyValue::String(value.to_owned())),
    _ => (name.to_owned(), PropertyValue::String(value.to_owned())),
  }
}

fn property_to_attribute(name: &str) -> &str {
  match name {
    "className" => "class",
    "htmlFor" => "for",
    _ => name,
  }
}

/// Serialize a tree to HTML.
///
/// A root serializes as the concatenation of its children.
#[must_use]
pub fn to_html(node: &Node) -> String {
  let mut out = String::new();
  write_node(node, &mut out, false);
  out
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
  match node {
    Node::Root(root) => {
      for child in &root.children {
        write_node(child, out, false);
      }
    },
    Node::Element(element) => write_element(element, out),
    Node::Text(text) if raw_text => out.push_str(&text.value),
    Node::Text(text) => out.push_str(&html_escape::encode_text(&text.value)),
    Node::Comment(comment) => {
      out.push_str("<!--");
      out.push_str(&comment.value);
      out.push_str("-->");
    },
    Node::Raw(raw) => out.push_str(&raw.value),
    Node::Doctype => out.push_str("<!doctype html>"),
  }
}

fn write_element(element: &Element, out: &mut String) {
  out.push('<');
  out.push_str(&element.tag_name);

  for (name, value) in &element.properties {
    let Some(rendered) = value.to_attribute_value() else {
      continue;
    };
    out.push(' ');
    out.push_str(property_to_attribute(name));
    if matches!(value, PropertyValue::Bool(true)) {
      continue;
    }
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(&rendered));
    out.push('"');
  }
  out.push('>');

  if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
    return;
  }

  let raw_text = RAW_TEXT_ELEMENTS.contains(&element.tag_name.as_str());
  for child in &element.children {
    write_node(child, out, raw_text);
  }

  out.push_str("</");
  out.push_str(&element.tag_name);
  out.push('>');
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_fragment_shapes_tree() {
    let tree = parse_fragment(
      r#"<p class="lead intro">Hi <a href="/docs/x.md">there</a><!-- c --></p>"#,
    );
    let children = tree.children().unwrap();
    assert_eq!(children.len(), 1);

    let paragraph = children[0].as_element().unwrap();
    assert_eq!(paragraph.tag_name, "p");
    assert_eq!(
      paragraph.properties.get("className"),
      Some(&PropertyValue::List(vec!["lead".into(), "intro".into()]))
    );
    assert_eq!(paragraph.children[0], Node::text("Hi "));
    assert_eq!(paragraph.children[1].tag_name(), Some("a"));
    assert_eq!(paragraph.children[2], Node::comment(" c "));
  }

  #[test]
  fn test_leading_style_is_kept() {
    let tree = parse_fragment("<style>p { margin: 0; }</style><p>x</p>");
    let tags: Vec<_> = tree.children().unwrap().iter().filter_map(Node::tag_name).collect();
    assert_eq!(tags, vec!["style", "p"]);
  }

  #[test]
  fn test_comments_outside_elements_are_kept() {
    let html = "<!-- keep me --><h2>x</h2><!-- and me -->";
    let tree = parse_fragment(html);
    assert_eq!(tree.children().unwrap()[0], Node::comment(" keep me "));
    assert_eq!(to_html(&tree), html);
  }

  #[test]
  fn test_doctype_and_number_lists_serialize() {
    let tree = Node::root(vec![
      Node::Doctype,
      Element::new("area")
        .with_property("coords", PropertyValue::NumberList(vec![0.0, 0.0, 10.0]))
        .into(),
    ]);
    assert_eq!(to_html(&tree), r#"<!doctype html><area coords="0, 0, 10">"#);
  }

  #[test]
  fn test_label_for_maps_to_html_for() {
    let tree = parse_fragment(r#"<label for="q">Search</label>"#);
    let label = tree.children().unwrap()[0].as_element().unwrap();
    assert_eq!(label.string_property("htmlFor"), Some("q"));
    assert_eq!(to_html(&tree), r#"<label for="q">Search</label>"#);
  }

  #[test]
  fn test_serialization_escapes() {
    let tree = Node::root(vec![
      Element::new("p")
        .with_property("title", "a \"quoted\" <value>")
        .with_child(Node::text("1 < 2 & 3"))
        .into(),
    ]);
    assert_eq!(
      to_html(&tree),
      "<p title=\"a &quot;quoted&quot; &lt;value&gt;\">1 &lt; 2 &amp; 3</p>"
    );
  }

  #[test]
  fn test_void_boolean_and_raw_text() {
    let tree = Node::root(vec![
      Element::new("input")
        .with_property("disabled", true)
        .with_property("checked", false)
        .into(),
      Element::new("style")
        .with_child(Node::text(".a > .b { color: red; }"))
        .into(),
    ]);
    assert_eq!(
      to_html(&tree),
      "<input disabled><style>.a > .b { color: red; }</style>"
    );
  }

  #[test]
  fn test_html_round_trip_keeps_markup() {
    let html = r#"<h2 class="x">A <em>b</em></h2><ul><li>one</li></ul><img src="a.png">"#;
    assert_eq!(to_html(&parse_fragment(html)), html);
  }
}
