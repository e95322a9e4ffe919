//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::sync::Arc;

use lumen_config::config::{self, ConfigError, ConfigSource, SiteConfig, find_config_file};
use lumen_config::debug;

use super::Cli;

/// Locate `--config` and install it as the process-wide site config.
pub fn load_site(cli: &Cli) -> Result<Arc<SiteConfig>> {
    let path = find_config_file(&cli.config)
        .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))
        .context("Run 'lumen-config init' to create one")?;

    debug!("config"; "using {}", path.display());
    Ok(config::load(ConfigSource::File(path))?)
}

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_reported_once() {
        let cli = Cli {
            color: clap::ColorChoice::Never,
            config: "no-such-dir-7f3a/site.toml".into(),
            verbose: false,
            command: crate::cli::Commands::Check,
        };

        let err = load_site(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));

        let report = format!("{err:?}");
        assert_eq!(report.matches("not found").count(), 1, "{report}");
        assert!(report.contains("lumen-config init"));
    }

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }
}
