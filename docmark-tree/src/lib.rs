//! # docmark-tree
//!
//! Annotation passes for documentation pages. A page is parsed into a
//! hast-like document tree, and three passes rewrite it in place:
//!
//! - **Links** are classified as absolute, repository-relative or in-site.
//!   External links open in a new context with `rel="noopener noreferrer"`,
//!   repository links become absolute URLs, in-site hashes are slugged to
//!   match heading ids and `/docs` routes lose their file extension.
//! - **Headings** (`h2`-`h6`) get a document-unique id, a self-link around
//!   their content and a permalink icon.
//! - **Cards** (`div.card` wrapping a link with a bold title and a small
//!   caption) are normalized to an `h4` title followed by the caption.
//!
//! ## Quick Start
//!
//! ```rust
//! use docmark_tree::{DocProcessor, MarkdownOptions, TransformConfig};
//!
//! let config = TransformConfig::new(
//!   "/docs/getting-started.md",
//!   "https://github.com/org/repo/blob/main",
//! );
//! let processor = DocProcessor::new(MarkdownOptions::default());
//! let result = processor.render(
//!   "## Install\n\nSee [the API](/docs/api.md#Usage).",
//!   &config,
//! );
//!
//! assert_eq!(result.headers[0].id, "install");
//! assert!(result.html.contains(r#"href="/docs/api#usage""#));
//! ```
//!
//! Working on a tree directly:
//!
//! ```rust
//! use docmark_tree::{DocTreeAnnotator, TransformConfig, html};
//!
//! let config = TransformConfig::new("/docs/a.md", "https://github.com/org/repo");
//! let mut tree = html::parse_fragment(r#"<a href="https://example.com">x</a>"#);
//! DocTreeAnnotator::new(&config).annotate(&mut tree);
//!
//! assert_eq!(
//!   html::to_html(&tree),
//!   r#"<a href="https://example.com" class="absolute" target="_blank" rel="noopener noreferrer">x</a>"#
//! );
//! ```

pub mod error;
pub mod html;
mod icon;
pub mod json;
pub mod link;
pub mod markdown;
pub mod notification;
mod processor;
pub mod slug;
pub mod text;
pub mod transform;
mod tree;
mod types;
pub mod utils;
pub mod visit;

pub use crate::{
  error::{TreeError, TreeResult},
  icon::permalink_icon,
  markdown::MarkdownOptions,
  processor::DocProcessor,
  slug::Slugger,
  transform::{DocTreeAnnotator, TreeTransformer},
  tree::{Element, Literal, Node, Properties, PropertyValue, Root},
  types::{Header, RenderResult, TransformConfig},
};
