//! Document tree model.
//!
//! The tree follows the shape of [hast](https://github.com/syntax-tree/hast):
//! element nodes carry a tag name, a map of properties and an ordered list of
//! children, and leaves carry a string value. The serde encoding is
//! hast-compatible so trees produced by other tooling can be read directly.
//!
//! # Examples
//!
//! ```
//! use docmark_tree::{Element, Node};
//!
//! let link = Element::new("a")
//!   .with_property("href", "#setup")
//!   .with_child(Node::text("Setup"));
//!
//! assert_eq!(link.string_property("href"), Some("#setup"));
//! ```
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Property map of an element, in insertion order.
pub type Properties = IndexMap<String, PropertyValue>;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
  /// Top-level container of a document or fragment.
  Root(Root),
  /// An element such as `<a>` or `<h2>`.
  Element(Element),
  /// A text leaf.
  Text(Literal),
  /// An HTML comment.
  Comment(Literal),
  /// Markup passed through verbatim on serialization.
  Raw(Literal),
  /// A document type declaration, serialized as `<!doctype html>`.
  Doctype,
}

/// The root node: nothing but children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
  #[serde(default)]
  pub children: Vec<Node>,
}

/// A leaf carrying a string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
  pub value: String,
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
  pub tag_name:   String,
  #[serde(default, deserialize_with = "deserialize_properties")]
  pub properties: Properties,
  #[serde(default)]
  pub children:   Vec<Node>,
}

/// Value of an element property.
///
/// `className` is conventionally a [`PropertyValue::List`], but a plain
/// string is accepted everywhere a class list is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
  Bool(bool),
  Number(f64),
  String(String),
  List(Vec<String>),
  /// Numeric list such as `coords`.
  NumberList(Vec<f64>),
}

/// Decode properties, dropping `null` values the way hast treats them as
/// absent.
fn deserialize_properties<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = IndexMap::<String, Option<PropertyValue>>::deserialize(deserializer)?;
  Ok(
    raw
      .into_iter()
      .filter_map(|(key, value)| value.map(|value| (key, value)))
      .collect(),
  )
}

impl Node {
  /// Create an empty root.
  #[must_use]
  pub const fn root(children: Vec<Self>) -> Self {
    Self::Root(Root { children })
  }

  /// Create a text leaf.
  #[must_use]
  pub fn text<S: Into<String>>(value: S) -> Self {
    Self::Text(Literal {
      value: value.into(),
    })
  }

  /// Create a comment leaf.
  #[must_use]
  pub fn comment<S: Into<String>>(value: S) -> Self {
    Self::Comment(Literal {
      value: value.into(),
    })
  }

  /// Tag name of the node, present only for elements.
  #[must_use]
  pub fn tag_name(&self) -> Option<&str> {
    match self {
      Self::Element(element) => Some(element.tag_name.as_str()),
      _ => None,
    }
  }

  #[must_use]
  pub const fn as_element(&self) -> Option<&Element> {
    match self {
      Self::Element(element) => Some(element),
      _ => None,
    }
  }

  pub const fn as_element_mut(&mut self) -> Option<&mut Element> {
    match self {
      Self::Element(element) => Some(element),
      _ => None,
    }
  }

  /// Children of the node, `None` for leaves.
  #[must_use]
  pub fn children(&self) -> Option<&[Self]> {
    match self {
      Self::Root(root) => Some(&root.children),
      Self::Element(element) => Some(&element.children),
      Self::Text(_) | Self::Comment(_) | Self::Raw(_) | Self::Doctype => None,
    }
  }

  pub const fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
    match self {
      Self::Root(root) => Some(&mut root.children),
      Self::Element(element) => Some(&mut element.children),
      Self::Text(_) | Self::Comment(_) | Self::Raw(_) | Self::Doctype => None,
    }
  }
}

impl From<Element> for Node {
  fn from(element: Element) -> Self {
    Self::Element(element)
  }
}

impl Element {
  /// Create an element with no properties and no children.
  #[must_use]
  pub fn new<S: Into<String>>(tag_name: S) -> Self {
    Self {
      tag_name:   tag_name.into(),
      properties: Properties::new(),
      children:   Vec::new(),
    }
  }

  /// Builder-style property setter.
  #[must_use]
  pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
  where
    K: Into<String>,
    V: Into<PropertyValue>,
  {
    self.set_property(key, value);
    self
  }

  /// Builder-style child append.
  #[must_use]
  pub fn with_child<N: Into<Node>>(mut self, child: N) -> Self {
    self.children.push(child.into());
    self
  }

  /// Builder-style children replacement.
  #[must_use]
  pub fn with_children(mut self, children: Vec<Node>) -> Self {
    self.children = children;
    self
  }

  /// Insert or overwrite a property.
  pub fn set_property<K, V>(&mut self, key: K, value: V)
  where
    K: Into<String>,
    V: Into<PropertyValue>,
  {
    self.properties.insert(key.into(), value.into());
  }

  /// Property value if it is a string.
  #[must_use]
  pub fn string_property(&self, key: &str) -> Option<&str> {
    match self.properties.get(key) {
      Some(PropertyValue::String(value)) => Some(value.as_str()),
      _ => None,
    }
  }

  /// Whether `className` contains `token`.
  ///
  /// Works for both the list form and a whitespace-separated string.
  #[must_use]
  pub fn has_class(&self, token: &str) -> bool {
    match self.properties.get("className") {
      Some(PropertyValue::List(classes)) => {
        classes.iter().any(|class| class == token)
      },
      Some(PropertyValue::String(classes)) => {
        classes.split_whitespace().any(|class| class == token)
      },
      _ => false,
    }
  }

  /// Whether the tag is one of `h1`-`h6`; returns the level if so.
  #[must_use]
  pub fn heading_level(&self) -> Option<u8> {
    match self.tag_name.as_str() {
      "h1" => Some(1),
      "h2" => Some(2),
      "h3" => Some(3),
      "h4" => Some(4),
      "h5" => Some(5),
      "h6" => Some(6),
      _ => None,
    }
  }
}

impl PropertyValue {
  /// Render the value the way it appears in an HTML attribute.
  ///
  /// Returns `None` for `false`, which omits the attribute entirely.
  #[must_use]
  pub fn to_attribute_value(&self) -> Option<String> {
    match self {
      Self::Bool(true) => Some(String::new()),
      Self::Bool(false) => None,
      Self::Number(number) => Some(number.to_string()),
      Self::String(value) => Some(value.clone()),
      Self::List(values) => Some(values.join(" ")),
      Self::NumberList(values) => {
        Some(
          values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        )
      },
    }
  }
}

impl fmt::Display for PropertyValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_attribute_value().unwrap_or_default())
  }
}

impl From<&str> for PropertyValue {
  fn from(value: &str) -> Self {
    Self::String(value.to_owned())
  }
}

impl From<String> for PropertyValue {
  fn from(value: String) -> Self {
    Self::String(value)
  }
}

impl From<bool> for PropertyValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<f64> for PropertyValue {
  fn from(value: f64) -> Self {
    Self::Number(value)
  }
}

impl From<Vec<String>> for PropertyValue {
  fn from(values: Vec<String>) -> Self {
    Self::List(values)
  }
}

impl From<&[&str]> for PropertyValue {
  fn from(values: &[&str]) -> Self {
    Self::List(values.iter().map(|value| (*value).to_owned()).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_has_class_list_and_string_forms() {
    let listed = Element::new("div")
      .with_property("className", &["card", "wide"][..]);
    assert!(listed.has_class("card"));
    assert!(!listed.has_class("car"));

    let spaced = Element::new("div").with_property("className", "wide card");
    assert!(spaced.has_class("card"));

    // Substrings of a token are not tokens
    let other = Element::new("div").with_property("className", "cards");
    assert!(!other.has_class("card"));
  }

  #[test]
  fn test_property_attribute_values() {
    assert_eq!(PropertyValue::Bool(true).to_attribute_value(), Some(String::new()));
    assert_eq!(PropertyValue::Bool(false).to_attribute_value(), None);
    assert_eq!(
      PropertyValue::List(vec!["a".into(), "b".into()]).to_attribute_value(),
      Some("a b".to_string())
    );
    assert_eq!(PropertyValue::Number(2.0).to_string(), "2");
    assert_eq!(
      PropertyValue::NumberList(vec![1.0, 2.5, 3.0]).to_string(),
      "1, 2.5, 3"
    );
  }

  #[test]
  fn test_children_of_leaves() {
    let mut text = Node::text("leaf");
    assert!(text.children().is_none());
    assert!(text.children_mut().is_none());
    assert_eq!(text.tag_name(), None);

    let element: Node = Element::new("p").with_child(Node::text("x")).into();
    assert_eq!(element.tag_name(), Some("p"));
    assert_eq!(element.children().map(<[Node]>::len), Some(1));
  }
}
