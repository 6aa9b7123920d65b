use std::{
  fmt,
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file names picked up from the working directory when no `-c` flag
/// is given.
const DISCOVERED_CONFIG_FILES: [&str; 4] =
  ["docmark.toml", "docmark.json", ".docmark.toml", ".docmark.json"];

/// Output format of the `render` command.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Serialized HTML fragment.
  #[default]
  Html,
  /// hast-compatible JSON tree.
  Json,
}

impl FromStr for OutputFormat {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "html" => Ok(Self::Html),
      "json" => Ok(Self::Json),
      other => {
        Err(ConfigError::Config(format!(
          "Unknown output format '{other}'. Expected 'html' or 'json'"
        )))
      },
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Html => "html",
      Self::Json => "json",
    })
  }
}

/// Configuration for docmark.
///
/// Every field is optional so that several config files, `--config`
/// overrides and CLI flags can be layered; the accessors supply defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Base URL of the source repository, e.g.
  /// `https://github.com/org/repo/blob/main`.
  pub repo_url: Option<String>,

  /// Whether to enable GitHub Flavored Markdown extensions.
  pub gfm: Option<bool>,

  /// Output format.
  pub format: Option<OutputFormat>,

  /// Directory the site is served from. Input paths are made relative to it
  /// before being used as the document's logical path.
  pub content_root: Option<PathBuf>,
}

impl Config {
  /// Load a single config file. The format is picked from the extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension, or fails to parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .as_deref()
    {
      Some("json") => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}. Use .toml or .json",
          path.display()
        )))
      },
    }
  }

  /// Load and merge config files in order, falling back to a discovered
  /// config file, then apply `KEY=VALUE` overrides.
  ///
  /// # Errors
  ///
  /// Returns an error if any file fails to load or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        config = Self::from_file(&discovered)?;
      }
    } else {
      for path in config_files {
        config.merge(Self::from_file(path)?);
      }
      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
    }

    config.apply_overrides(config_overrides)?;
    Ok(config)
  }

  /// Look for a config file in the working directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    DISCOVERED_CONFIG_FILES
      .iter()
      .map(|filename| current_dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Merge `other` into this config; values set in `other` win.
  pub fn merge(&mut self, other: Self) {
    if other.repo_url.is_some() {
      self.repo_url = other.repo_url;
    }
    if other.gfm.is_some() {
      self.gfm = other.gfm;
    }
    if other.format.is_some() {
      self.format = other.format;
    }
    if other.content_root.is_some() {
      self.content_root = other.content_root;
    }
  }

  /// Apply `KEY=VALUE` overrides.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is malformed, names an unknown key, or
  /// has a value of the wrong type.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
      "repo_url" => self.repo_url = Some(value.to_string()),
      "gfm" => {
        self.gfm = Some(value.parse().map_err(|_| {
          ConfigError::Config(format!(
            "Invalid boolean for 'gfm': '{value}'"
          ))
        })?);
      },
      "format" => self.format = Some(value.parse()?),
      "content_root" => self.content_root = Some(PathBuf::from(value)),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }
    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// The repository URL, which every render needs.
  ///
  /// # Errors
  ///
  /// Returns an error if no repository URL has been configured.
  pub fn repo_url(&self) -> Result<&str, ConfigError> {
    self
      .repo_url
      .as_deref()
      .filter(|url| !url.is_empty())
      .ok_or_else(|| {
        ConfigError::Config(
          "A repository URL must be provided via --repo-url, repo_url in a \
           config file, or --config repo_url=URL."
            .to_string(),
        )
      })
  }

  #[must_use]
  pub fn gfm(&self) -> bool {
    self.gfm.unwrap_or(true)
  }

  #[must_use]
  pub fn format(&self) -> OutputFormat {
    self.format.unwrap_or_default()
  }

  /// Logical path of `input`: relative to the content root, `/`-separated
  /// and rooted.
  ///
  /// ```
  /// use std::path::{Path, PathBuf};
  ///
  /// use docmark::config::Config;
  ///
  /// let config = Config {
  ///   content_root: Some(PathBuf::from("site")),
  ///   ..Config::default()
  /// };
  /// assert_eq!(config.logical_path(Path::new("site/docs/a.md")), "/docs/a.md");
  /// ```
  #[must_use]
  pub fn logical_path(&self, input: &Path) -> String {
    let relative = self
      .content_root
      .as_deref()
      .and_then(|root| input.strip_prefix(root).ok())
      .unwrap_or(input);

    let segments: Vec<_> = relative
      .components()
      .filter_map(|component| {
        match component {
          std::path::Component::Normal(segment) => {
            Some(segment.to_string_lossy())
          },
          _ => None,
        }
      })
      .collect();

    format!("/{}", segments.join("/"))
  }

  /// Write a commented default config file.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unknown or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let defaults = Self {
      repo_url:     Some("https://github.com/org/repo/blob/main".to_string()),
      gfm:          Some(true),
      format:       Some(OutputFormat::Html),
      content_root: Some(PathBuf::from(".")),
    };

    let content = match format {
      "toml" => {
        format!(
          "# docmark configuration\n#\n# repo_url: base URL used for links \
           that the site does not route itself.\n# content_root: directory \
           the site is served from.\n\n{}",
          toml::to_string_pretty(&defaults)?
        )
      },
      "json" => serde_json::to_string_pretty(&defaults)?,
      other => {
        return Err(ConfigError::Config(format!(
          "Unknown config format '{other}'. Expected 'toml' or 'json'"
        )));
      },
    };

    fs::write(path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
