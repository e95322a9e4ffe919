//! `show` command: JSON export for the site generator.

use anyhow::{Context, Result};
use lumen_config::config::SiteConfig;

use super::{Cli, common};

/// Load the config and print it to stdout as JSON.
pub fn show_config(cli: &Cli, pretty: bool) -> Result<()> {
    let site = common::load_site(cli)?;
    println!("{}", render(&site, pretty)?);
    Ok(())
}

fn render(site: &SiteConfig, pretty: bool) -> Result<String> {
    let json = site.to_json().context("Failed to serialize site config")?;
    let out = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        json.to_string()
    };
    Ok(out)
}
