//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use markdown_fragment_config::Config;
use markdown_fragment_engine::RenderOptions;

/// Render markdown into HTML fragments
#[derive(Parser)]
#[command(name = "mdfrag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render markdown files (or stdin) to HTML
    Render {
        /// Glob patterns of files to render, `-` for stdin
        #[arg(default_value = "-")]
        inputs: Vec<String>,

        /// Write `.html` files here, mirroring the inputs' directories, instead of
        /// printing to stdout
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Print every intermediate buffer to stderr
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        classes: ClassArgs,
    },

    /// Browse a notes directory with a live HTML preview
    Browse {
        /// Notes directory, defaults to `notes_path` from the config file
        dir: Option<PathBuf>,

        #[command(flatten)]
        classes: ClassArgs,
    },

    /// Write a starter configuration file
    Init {
        /// Default directory for `browse`
        #[arg(long)]
        notes_path: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        classes: ClassArgs,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ClassArgs {
    /// CSS class for `<blockquote>` elements
    #[arg(long)]
    pub blockquote_class: Option<String>,

    /// CSS class for `<table>` elements
    #[arg(long)]
    pub table_class: Option<String>,
}

impl ClassArgs {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(&self, config: &Config) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(class) = self
            .blockquote_class
            .as_ref()
            .or(config.render.blockquote_class.as_ref())
        {
            options = options.with_blockquote_class(class.as_str());
        }
        if let Some(class) = self
            .table_class
            .as_ref()
            .or(config.render.table_class.as_ref())
        {
            options = options.with_table_class(class.as_str());
        }
        options
    }
}
