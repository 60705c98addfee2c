//! sitebio - author bio fragment generator for static sites.

#![allow(dead_code)]

mod bio;
mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "root: {}", config.get_root().display());

    let provider = || bio::select_provider(cli.data.as_ref(), &config);

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Render { output, .. } => {
            cli::render::render(provider()?.as_ref(), &config, output.as_deref())
        }
        Commands::Build { .. } => cli::render::build(provider()?.as_ref(), &config).map(|_| ()),
        Commands::Query { pretty, output } => {
            cli::query::run(provider()?.as_ref(), *pretty, output.as_deref())
        }
    }
}
