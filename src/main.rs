//! lumen-config - check and export a lumen blog's site configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use lumen_config::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::check_config(&cli),
        Commands::Show { pretty } => cli::show::show_config(&cli, *pretty),
        Commands::Init { force, example } => cli::init::init_config(&cli, *force, *example),
    }
}
