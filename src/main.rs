//! Lectern - theme tags and post-render path rewriting for course sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod markdown;
mod page;
mod rewrite;
mod sanitize;
mod tags;
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

    match &cli.command {
        Commands::Rewrite { dir } => cli::rewrite::run(dir.as_deref(), &config),
        Commands::Render { file, page_dir } => {
            cli::render::run(file, page_dir.as_deref(), &config)
        }
    }
}
