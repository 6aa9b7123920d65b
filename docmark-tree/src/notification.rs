//! The notification box: a bordered container for callouts in the docs.
use crate::tree::{Element, Node};

/// Default top margin of the box.
pub const DEFAULT_MARGIN_TOP: &str = "1.5rem";
/// Default viewport width under which the mobile layout applies.
pub const DEFAULT_MOBILE_WIDTH: &str = "950px";

/// A styled container around arbitrary content.
///
/// ```
/// use docmark_tree::{Node, html, notification::Notification};
///
/// let node = Notification::default().wrap(vec![Node::text("Heads up")]);
/// let html = html::to_html(&node);
///
/// assert!(html.starts_with(r#"<div class="notification">Heads up<style>"#));
/// assert!(html.contains("margin-top: 1.5rem;"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
  /// Top margin; [`DEFAULT_MARGIN_TOP`] when unset.
  pub margin_top:   Option<String>,
  /// Breakpoint for the mobile layout; [`DEFAULT_MOBILE_WIDTH`] when unset.
  pub mobile_width: Option<String>,
}

impl Notification {
  #[must_use]
  pub fn margin_top(&self) -> &str {
    self.margin_top.as_deref().unwrap_or(DEFAULT_MARGIN_TOP)
  }

  #[must_use]
  pub fn mobile_width(&self) -> &str {
    self.mobile_width.as_deref().unwrap_or(DEFAULT_MOBILE_WIDTH)
  }

  /// Stylesheet for the box.
  #[must_use]
  pub fn css(&self) -> String {
    format!(
      ".notification {{
  min-height: 2.5rem;
  padding: 0.375rem 1rem;
  margin-top: {margin_top};
  border: 1px solid #d8d8d8;
  border-radius: 5px;
}}
@media screen and (max-width: {mobile_width}) {{
  .notification {{
    margin-top: 0;
    margin-bottom: 1rem;
  }}
}}
",
      margin_top = self.margin_top(),
      mobile_width = self.mobile_width(),
    )
  }

  /// Wrap `children` in the box, followed by its stylesheet.
  #[must_use]
  pub fn wrap(&self, children: Vec<Node>) -> Node {
    Element::new("div")
      .with_property("className", vec!["notification".to_owned()])
      .with_children(children)
      .with_child(Element::new("style").with_child(Node::text(self.css())))
      .into()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let css = Notification::default().css();
    assert!(css.contains("margin-top: 1.5rem;"));
    assert!(css.contains("@media screen and (max-width: 950px)"));
    assert!(css.contains("border: 1px solid #d8d8d8;"));
  }

  #[test]
  fn test_custom_values() {
    let notification = Notification {
      margin_top:   Some("0".into()),
      mobile_width: Some("600px".into()),
    };
    let css = notification.css();
    assert!(css.contains("margin-top: 0;\n  border"));
    assert!(css.contains("(max-width: 600px)"));
  }

  #[test]
  fn test_wrap_keeps_children_first() {
    let node = Notification::default().wrap(vec![
      Node::text("a"),
      Element::new("code").into(),
    ]);
    let div = node.as_element().unwrap();
    assert!(div.has_class("notification"));
    assert_eq!(div.children.len(), 3);
    assert_eq!(div.children[2].tag_name(), Some("style"));
  }
}
