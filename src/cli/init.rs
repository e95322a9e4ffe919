//! `init` command: write a starter `site.toml`.

use anyhow::{Context, Result, bail};
use lumen_config::config::{EMBEDDED_CONFIG, SiteConfig};
use lumen_config::log;
use std::{fs, path::Path};

use super::Cli;

/// Write the template to `--config` (relative to the current directory).
pub fn init_config(cli: &Cli, force: bool, example: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = cwd.join(&cli.config);

    write_config(&path, force, example)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Generate site.toml content with comments
pub fn generate_config_template(example: bool) -> String {
    let mut out = format!(
        "# lumen-config site configuration (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    if example {
        out.push_str(EMBEDDED_CONFIG);
    } else {
        out.push_str(&SiteConfig::starter_template());
    }
    out
}

fn write_config(path: &Path, force: bool, example: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `lumen-config init --force` to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template(example))
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
