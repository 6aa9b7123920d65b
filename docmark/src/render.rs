use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use docmark_tree::{DocProcessor, MarkdownOptions, RenderResult, TransformConfig, json};
use log::{debug, info};

use crate::{
  config::{Config, OutputFormat},
  error::ConfigError,
};

/// Front end used to turn an input file into a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
  Markdown,
  Html,
  Json,
}

impl InputKind {
  /// Pick the front end from the file extension.
  ///
  /// # Errors
  ///
  /// Returns an error for a missing or unsupported extension.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .as_deref()
    {
      Some("md" | "markdown") => Ok(Self::Markdown),
      Some("html" | "htm") => Ok(Self::Html),
      Some("json") => Ok(Self::Json),
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported input file: {}. Use .md, .markdown, .html, .htm or \
           .json",
          path.display()
        )))
      },
    }
  }
}

/// Annotate `input` and return the rendered output as a string.
///
/// `file_path` is the document's logical path; when `None` it is derived
/// from `input` via [`Config::logical_path`].
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, no repository
/// URL is configured, or the result cannot be encoded.
pub fn render_file(
  config: &Config,
  input: &Path,
  file_path: Option<&str>,
) -> Result<String, ConfigError> {
  let kind = InputKind::from_path(input)?;
  let file_path = file_path.map_or_else(|| config.logical_path(input), ToOwned::to_owned);
  let transform = TransformConfig::new(file_path, config.repo_url()?);
  let processor = DocProcessor::new(MarkdownOptions { gfm: config.gfm() });

  debug!(
    "Rendering {} as {:?} (logical path {})",
    input.display(),
    kind,
    transform.file_path
  );

  let result = match kind {
    InputKind::Markdown => {
      processor.render(&fs::read_to_string(input)?, &transform)
    },
    InputKind::Html => {
      processor.annotate_html(&fs::read_to_string(input)?, &transform)
    },
    InputKind::Json => processor.annotate_tree(json::from_file(input)?, &transform),
  };

  info!(
    "Annotated {} ({} headings)",
    input.display(),
    result.headers.len()
  );

  encode(&result, config.format())
}

fn encode(result: &RenderResult, format: OutputFormat) -> Result<String, ConfigError> {
  match format {
    OutputFormat::Html => Ok(result.html.clone()),
    OutputFormat::Json => Ok(json::to_string_pretty(&result.tree)?),
  }
}

/// Write rendered output to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<(), ConfigError> {
  match output {
    Some(path) => {
      if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
      {
        fs::create_dir_all(parent)?;
      }
      fs::write(path, content)?;
      info!("Wrote {}", path.display());
    },
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(content.as_bytes())?;
      if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
      }
    },
  }
  Ok(())
}
