use std::io;

use thiserror::Error;

/// Error type for configuration and rendering in the docmark binary.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("TOML serialization error: {0}")]
  TomlSer(#[from] toml::ser::Error),

  #[error("Document tree error: {0}")]
  Tree(#[from] docmark_tree::TreeError),
}
