use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

mod cli;
mod config;
mod error;
mod render;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!("Failed to generate configuration file: {}", output.display())
      })?;

      info!(
        "Configuration file created successfully. Edit it to set your \
         repository URL."
      );
      Ok(())
    },

    Commands::Render {
      input,
      output,
      file_path,
      repo_url,
      format,
      no_gfm,
    } => {
      let mut config = Config::load(&cli.config_files, &cli.config_overrides)
        .wrap_err("Failed to load configuration")?;

      // CLI flags take precedence over files and overrides
      config.merge(Config {
        repo_url:     repo_url.clone(),
        gfm:          no_gfm.then_some(false),
        format:       *format,
        content_root: None,
      });

      let rendered = render::render_file(&config, input, file_path.as_deref())
        .wrap_err_with(|| format!("Failed to render {}", input.display()))?;

      render::write_output(output.as_deref(), &rendered).wrap_err_with(|| {
        output.as_ref().map_or_else(
          || "Failed to write to stdout".to_string(),
          |path| format!("Failed to write {}", path.display()),
        )
      })
    },
  }
}
