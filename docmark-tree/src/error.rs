//! Error types for reading and writing document trees.
use std::path::PathBuf;

/// Result type for tree I/O.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while loading or encoding a document tree.
///
/// The annotation passes themselves never fail; these only cover getting a
/// tree in and out.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
  #[error("failed to read `{path}`: {source}")]
  ReadFile {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid document tree JSON: {0}")]
  Json(#[from] serde_json::Error),
}
