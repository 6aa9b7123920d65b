use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Command line interface for docmark
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "docmark: heading anchors, permalinks and link rewriting for docs"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the docmark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new docmark configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "docmark.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Annotate a Markdown, HTML or hast JSON document.
  Render {
    /// Document to annotate. The front end is picked from the extension
    /// (.md/.markdown, .html/.htm, .json).
    #[arg(short, long)]
    input: PathBuf,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logical path of the document on the site, e.g. `/docs/a/b.md`.
    /// Defaults to the input path relative to the content root.
    #[arg(long = "file-path")]
    file_path: Option<String>,

    /// Base URL of the source repository.
    #[arg(long = "repo-url")]
    repo_url: Option<String>,

    /// Output format.
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long = "no-gfm", action = clap::ArgAction::SetTrue)]
    no_gfm: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
