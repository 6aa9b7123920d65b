//! Link rewriting.
//!
//! External links (absolute URLs and anything the site does not route) are
//! styled as `absolute` and open in a new context without access to the
//! referring page. Links the repository resolves relative to the document
//! become absolute repository URLs. Same-page hashes and `/docs` routes are
//! styled as `relative`, get their hash slugged to match heading ids, and
//! `/docs` routes lose their file extension.
use log::{trace, warn};

use super::TreeTransformer;
use crate::{
  link::{self, LinkKind},
  slug::Slugger,
  tree::{Element, Node},
  types::TransformConfig,
  visit::visit_elements_mut,
};

/// Rewrites the `href` of every `<a>` in the tree.
#[derive(Debug)]
pub struct AnchorRewriter<'a> {
  config:  &'a TransformConfig,
  slugger: Slugger,
}

impl<'a> AnchorRewriter<'a> {
  #[must_use]
  pub fn new(config: &'a TransformConfig) -> Self {
    Self {
      config,
      slugger: Slugger::new(),
    }
  }

  /// Rewrite a single anchor element. Anchors without a non-empty string
  /// `href` are left alone.
  pub fn rewrite(&mut self, anchor: &mut Element) {
    let Some(href) = anchor
      .string_property("href")
      .filter(|href| !href.is_empty())
      .map(ToOwned::to_owned)
    else {
      return;
    };

    let kind = LinkKind::classify(&href);
    trace!("Rewriting {kind:?} link '{href}'");

    if kind.is_external() {
      anchor.set_property("className", "absolute");
      anchor.set_property("target", "_blank");
      anchor.set_property("rel", "noopener noreferrer");

      if kind == LinkKind::Repository
        && let Some(resolved) = self.resolve_repository_href(&href)
      {
        anchor.set_property("href", resolved);
      }
      return;
    }

    anchor.set_property("className", "relative");

    let mut rewritten = self.slug_hash(&href);

    if matches!(kind, LinkKind::InSite { docs: true }) {
      rewritten = link::remove_ext(&rewritten);
    }
    anchor.set_property("href", rewritten);
  }

  /// Rebuild `href` from its path and slugged hash, as split by
  /// [`link::split_hash`].
  fn slug_hash(&mut self, href: &str) -> String {
    // Hashes are slugged independently of each other
    self.slugger.reset();

    match link::split_hash(href) {
      (path, Some(hash)) => format!("{path}#{}", self.slugger.slug(hash)),
      (path, None) => path.to_owned(),
    }
  }

  /// Resolve a repository link, slugging its hash the same way GitHub ids
  /// the headings of rendered files.
  fn resolve_repository_href(&mut self, href: &str) -> Option<String> {
    let reference = self.slug_hash(href);

    match link::resolve_repository_link(
      &self.config.repo_url,
      &self.config.file_path,
      &reference,
    ) {
      Ok(resolved) => Some(resolved),
      Err(e) => {
        warn!(
          "Could not resolve '{href}' against repository '{}' for {}: {e}",
          self.config.repo_url, self.config.file_path
        );
        None
      },
    }
  }
}

impl TreeTransformer for AnchorRewriter<'_> {
  fn transform(&mut self, tree: &mut Node) {
    visit_elements_mut(
      tree,
      |element| element.tag_name == "a",
      |anchor| self.rewrite(anchor),
    );
  }
}
