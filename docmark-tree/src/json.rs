//! hast-compatible JSON encoding of the document tree.
use std::{fs, path::Path};

use crate::{
  error::{TreeError, TreeResult},
  tree::Node,
};

/// Decode a tree from hast JSON.
///
/// # Errors
///
/// Returns [`TreeError::Json`] if the input is not a valid tree.
pub fn from_str(json: &str) -> TreeResult<Node> {
  Ok(serde_json::from_str(json)?)
}

/// Read and decode a tree from a hast JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid
/// tree.
pub fn from_file<P: AsRef<Path>>(path: P) -> TreeResult<Node> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(|source| {
    TreeError::ReadFile {
      path: path.to_path_buf(),
      source,
    }
  })?;
  from_str(&content)
}

/// Encode a tree as pretty-printed hast JSON.
///
/// # Errors
///
/// Returns [`TreeError::Json`] if serialization fails, which only happens
/// for non-finite numeric properties.
pub fn to_string_pretty(node: &Node) -> TreeResult<String> {
  Ok(serde_json::to_string_pretty(node)?)
}
