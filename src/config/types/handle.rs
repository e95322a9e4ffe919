//! Load-once config handle.
//!
//! Uses `arc-swap` for lock-free reads. The handle starts empty and is
//! filled exactly once; there is no reload.

use super::ConfigError;
use crate::config::{ConfigSource, SiteConfig};
use arc_swap::ArcSwapOption;
use std::sync::{Arc, LazyLock};

/// Holds at most one loaded [`SiteConfig`].
///
/// Lifecycle is `uninitialized -> loaded`. The global instance sits behind
/// [`load`] and [`get`]; separate handles are useful for tests and for
/// embedding several sites in one process.
#[derive(Debug)]
pub struct ConfigHandle {
    slot: ArcSwapOption<SiteConfig>,
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigHandle {
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Read, validate and install the config.
    ///
    /// Fails with [`ConfigError::AlreadyLoaded`] if a config is already
    /// installed, including when another thread wins the race.
    pub fn load(&self, source: &ConfigSource) -> Result<Arc<SiteConfig>, ConfigError> {
        if self.is_loaded() {
            return Err(ConfigError::AlreadyLoaded);
        }

        let config = Arc::new(source.read()?);
        self.install(Arc::clone(&config))?;
        Ok(config)
    }

    /// Install an already validated config.
    fn install(&self, config: Arc<SiteConfig>) -> Result<(), ConfigError> {
        let current = self.slot.load();
        if current.is_some() {
            return Err(ConfigError::AlreadyLoaded);
        }

        let previous = self.slot.compare_and_swap(&current, Some(config));
        if previous.is_some() {
            return Err(ConfigError::AlreadyLoaded);
        }
        Ok(())
    }

    /// The loaded config, or [`ConfigError::NotLoaded`].
    #[inline]
    pub fn get(&self) -> Result<Arc<SiteConfig>, ConfigError> {
        self.slot.load_full().ok_or(ConfigError::NotLoaded)
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.slot.load().is_some()
    }
}

/// Global config storage.
static CONFIG: LazyLock<ConfigHandle> = LazyLock::new(ConfigHandle::new);

/// Load the process-wide site config.
pub fn load(source: ConfigSource) -> Result<Arc<SiteConfig>, ConfigError> {
    CONFIG.load(&source)
}

/// The process-wide site config.
#[inline]
pub fn get() -> Result<Arc<SiteConfig>, ConfigError> {
    CONFIG.get()
}

/// Whether the process-wide site config has been loaded.
#[inline]
pub fn is_loaded() -> bool {
    CONFIG.is_loaded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_load() {
        let handle = ConfigHandle::new();
        assert!(!handle.is_loaded());
        assert!(matches!(handle.get(), Err(ConfigError::NotLoaded)));
    }

    #[test]
    fn test_load_then_get_round_trip() {
        let handle = ConfigHandle::new();
        let parsed = SiteConfig::embedded().unwrap();

        let loaded = handle.load(&ConfigSource::Embedded).unwrap();
        let got = handle.get().unwrap();

        assert!(Arc::ptr_eq(&loaded, &got));
        assert_eq!(*got, parsed);
    }

    #[test]
    fn test_second_load_rejected() {
        let handle = ConfigHandle::new();
        handle.load(&ConfigSource::Embedded).unwrap();

        let err = handle.load(&ConfigSource::Embedded).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyLoaded));
        // First value survives
        assert_eq!(handle.get().unwrap().title, "Harry G. Withers");
    }

    #[test]
    fn test_failed_load_leaves_handle_empty() {
        let handle = ConfigHandle::new();
        let bad = ConfigSource::Inline("title = \"no url\"".into());

        let err = handle.load(&bad).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(handle.get(), Err(ConfigError::NotLoaded)));

        // A later valid load still succeeds
        assert!(handle.load(&ConfigSource::Embedded).is_ok());
    }

    #[test]
    fn test_concurrent_loads_install_once() {
        let handle = Arc::new(ConfigHandle::new());
        let results: Vec<_> = (0..8)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || handle.load(&ConfigSource::Embedded).is_ok())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|t| t.join().unwrap())
            .collect();

        assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
        assert!(handle.is_loaded());
    }
}
