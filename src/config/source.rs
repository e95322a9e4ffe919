//! Where a site config comes from.

use super::{ConfigError, SiteConfig};
use std::path::PathBuf;

/// Bundled example record (the hargwit.com blog).
pub const EMBEDDED_CONFIG: &str = include_str!("../embed/site.toml");

/// Input for [`crate::config::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A `site.toml` on disk; its directory becomes the site root.
    File(PathBuf),
    /// The record compiled into the binary.
    Embedded,
    /// TOML text supplied by the caller.
    Inline(String),
}

impl ConfigSource {
    /// Parse and validate the source into a config.
    pub fn read(&self) -> Result<SiteConfig, ConfigError> {
        match self {
            Self::File(path) => SiteConfig::from_path(path),
            Self::Embedded => SiteConfig::from_str(EMBEDDED_CONFIG),
            Self::Inline(content) => SiteConfig::from_str(content),
        }
    }
}
