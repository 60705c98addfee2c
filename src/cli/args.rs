//! Command-line interface definitions.

use crate::config::HandleEncoding;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Author bio fragment generator for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitebio.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitebio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Read the resolved query result from a JSON file instead of the config
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a sitebio.toml with default settings
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render the bio fragment to stdout
    #[command(visible_alias = "r")]
    Render {
        /// Handle encoding in the link target
        #[arg(short, long, value_enum)]
        encoding: Option<HandleEncoding>,

        /// Write the fragment to this file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render the bio fragment into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Handle encoding in the link target
        #[arg(short, long, value_enum)]
        encoding: Option<HandleEncoding>,

        /// Output directory path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Print the resolved query result as JSON
    #[command(visible_alias = "q")]
    Query {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
