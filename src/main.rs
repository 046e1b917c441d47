//! assetref - a static code generator for strongly-typed game asset references.

#![allow(dead_code)]

mod cli;
mod config;
mod generate;
mod logger;
mod project;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { args } => cli::generate::run(&config, args),
        Commands::Check => cli::check::run(&config),
    }
}
