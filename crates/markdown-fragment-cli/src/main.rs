use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_fragment_config::{Config, RenderConfig};
use markdown_fragment_engine::io;
use std::path::{Path, PathBuf};

mod browse;
mod cli;
mod render;

use cli::{ClassArgs, Cli, Commands};

fn init_config(
    config_path: &Path,
    notes_path: Option<PathBuf>,
    force: bool,
    classes: ClassArgs,
) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }

    let config = Config {
        notes_path,
        render: RenderConfig {
            blockquote_class: classes.blockquote_class,
            table_class: classes.table_class,
        },
    };
    config.save_to_path(config_path)?;
    log::info!("wrote {}", config_path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Init must work even when the existing file no longer parses
    if let Commands::Init {
        notes_path,
        force,
        classes,
    } = cli.command
    {
        return init_config(&config_path, notes_path, force, classes);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();
    log::debug!("using config {}", config_path.display());

    match cli.command {
        Commands::Render {
            inputs,
            out_dir,
            trace,
            classes,
        } => render::run(&inputs, out_dir.as_deref(), trace, classes.resolve(&config)),
        Commands::Browse { dir, classes } => {
            let from_config = dir.is_none();
            let Some(notes_path) = dir.or_else(|| config.notes_path.clone()) else {
                bail!(
                    "No notes directory given and no notes_path set in {}",
                    config_path.display()
                );
            };

            io::validate_notes_dir(&notes_path).with_context(|| {
                if from_config {
                    format!("notes_path from config file '{}'", config_path.display())
                } else {
                    "notes directory argument".to_string()
                }
            })?;

            browse::run(notes_path, classes.resolve(&config))
        }
        Commands::Init { .. } => unreachable!("init is handled before the config is loaded"),
    }
}
