//! Validated site configuration record for a lumen-themed static blog.
//!
//! The record is parsed from `site.toml` (or the bundled example), checked
//! field by field, and installed once into a process-wide handle that the
//! site generator reads from.
//!
//! ```ignore
//! use lumen_config::config::{self, ConfigSource};
//!
//! config::load(ConfigSource::File("site.toml".into()))?;
//! let site = config::get()?;
//! println!("{} ({} posts per page)", site.title, site.posts_per_page);
//! ```

pub mod config;
pub mod logger;

pub use config::{ConfigError, ConfigSource, SiteConfig, get, load};
