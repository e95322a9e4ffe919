//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Check, export and scaffold a lumen blog's site.toml
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, then print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated config as JSON for the site generator
    #[command(visible_alias = "s")]
    Show {
        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a starter site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Write the bundled example site instead of the blank template
        #[arg(short, long)]
        example: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_pretty() {
        let cli = Cli::parse_from(["lumen-config", "show", "--pretty"]);
        assert!(matches!(cli.command, Commands::Show { pretty: true }));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["lumen-config", "check", "-C", "blog/site.toml", "-v"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, PathBuf::from("blog/site.toml"));
        assert!(cli.verbose);
    }
}
