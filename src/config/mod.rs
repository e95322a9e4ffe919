//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Table definitions
//! │   ├── author     # [author]
//! │   ├── contacts   # [author.contacts]
//! │   └── menu       # [[menu]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Load-once global handle
//! ├── source         # ConfigSource, embedded record
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                 | Purpose                                      |
//! |---------------------|----------------------------------------------|
//! | `url`               | Absolute base URL (http/https)               |
//! | `pathPrefix`        | Root-relative prefix, starts with `/`        |
//! | `title` ...         | Display strings                              |
//! | `disqusShortname`   | Comments; empty disables                     |
//! | `postsPerPage`      | Pagination size, at least 1                  |
//! | `googleAnalyticsId` | Analytics; empty disables                    |
//! | `useKatex`          | Math rendering                               |
//! | `[[menu]]`          | Navigation, in order                         |
//! | `[author]`          | Name, photo, bio, contacts                   |

pub mod section;
mod source;
pub mod types;
mod util;

pub use section::{ASSETS_DIR, AuthorConfig, ContactPlatform, ContactsConfig, MenuItem};
pub use source::{ConfigSource, EMBEDDED_CONFIG};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigHandle, FieldPath, get, is_loaded,
    load,
};
pub use util::{find_config_file, join_url};

use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Prefix of ignored keys that fall inside the closed contacts table.
const CONTACTS_PREFIX: &str = "author.contacts.";

// ============================================================================
// root configuration
// ============================================================================

/// Blog configuration (`site.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct SiteConfig {
    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: Option<PathBuf>,

    /// Absolute base URL of the deployed site.
    #[config(inline_doc)]
    pub url: String,

    /// Root-relative prefix the site is served under.
    #[config(inline_doc)]
    pub path_prefix: String,

    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Tagline under the title.
    #[config(inline_doc)]
    pub subtitle: String,

    /// Footer copyright notice.
    #[config(inline_doc)]
    pub copyright: String,

    /// Disqus shortname; leave empty to disable comments.
    #[serde(default)]
    pub disqus_shortname: String,

    /// Posts on each index page.
    #[config(inline_doc)]
    pub posts_per_page: i64,

    /// Google Analytics property; leave empty to disable tracking.
    #[serde(default)]
    pub google_analytics_id: String,

    /// Load KaTeX for math in posts.
    #[config(inline_doc)]
    pub use_katex: bool,

    /// Navigation entries, in display order.
    #[config(sub)]
    pub menu: Vec<MenuItem>,

    /// Author profile.
    #[config(sub)]
    pub author: AuthorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: None,
            url: "https://example.com".into(),
            path_prefix: "/".into(),
            title: "My Blog".into(),
            subtitle: String::new(),
            copyright: String::new(),
            disqus_shortname: String::new(),
            posts_per_page: 4,
            google_analytics_id: String::new(),
            use_katex: false,
            menu: vec![MenuItem::default()],
            author: AuthorConfig::default(),
        }
    }
}

impl SiteConfig {
    // ========================================================================
    // loading
    // ========================================================================

    /// Parse and validate configuration from a TOML string.
    ///
    /// No filesystem checks are made since there is no site root.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        config.validate_reporting(&ignored)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// The file's directory becomes the site root.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        config.root = Some(util::normalize_path(root));

        crate::debug!("config"; "loaded {}", path.display());
        config.validate_reporting(&ignored)?;
        Ok(config)
    }

    /// The bundled example record.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_str(EMBEDDED_CONFIG)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once; warnings
    /// are printed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_reporting(&[])
    }

    fn validate_reporting(&self, ignored: &[String]) -> Result<(), ConfigError> {
        let diag = self.diagnose(ignored);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every check without printing anything.
    ///
    /// `ignored` are key paths the deserializer skipped.
    pub fn diagnose(&self, ignored: &[String]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        Self::check_unknown_fields(ignored, &mut diag);
        self.validate_url(&mut diag);
        self.validate_path_prefix(&mut diag);
        self.validate_pagination(&mut diag);

        if self.title.trim().is_empty() {
            diag.warn(Self::FIELDS.title, "site title is empty");
        }

        MenuItem::validate_all(&self.menu, &mut diag);
        self.author.validate(self.root.as_deref(), &mut diag);

        diag
    }

    /// Unknown contact platforms are errors; other unknown keys are warnings.
    fn check_unknown_fields(ignored: &[String], diag: &mut ConfigDiagnostics) {
        for path in ignored {
            if let Some(key) = path.strip_prefix(CONTACTS_PREFIX) {
                diag.error_with_hint(
                    FieldPath::owned(path.clone()),
                    format!("unknown contact platform '{key}'"),
                    format!("supported: {}", ContactPlatform::known_keys()),
                );
            } else {
                diag.warn(FieldPath::owned(path.clone()), "unknown key, ignored");
            }
        }
    }

    /// `url` must be a valid http(s) URL with a host.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    fn validate_path_prefix(&self, diag: &mut ConfigDiagnostics) {
        if !self.path_prefix.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{}' must start with `/`", self.path_prefix),
                format!("use \"/{}\"", self.path_prefix.trim_start_matches('/')),
            );
        }
    }

    fn validate_pagination(&self, diag: &mut ConfigDiagnostics) {
        if self.posts_per_page < 1 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                format!("must be at least 1, got {}", self.posts_per_page),
                "the default is 4",
            );
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the site root (directory of the config file), if loaded from disk.
    pub fn get_root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Absolute path of the author photo, if loaded from disk.
    pub fn photo_path(&self) -> Option<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(ASSETS_DIR).join(&self.author.photo))
    }

    /// Whether Disqus comments are configured.
    pub fn comments_enabled(&self) -> bool {
        !self.disqus_shortname.is_empty()
    }

    /// Whether Google Analytics is configured.
    pub fn analytics_enabled(&self) -> bool {
        !self.google_analytics_id.is_empty()
    }

    /// Pagination size as an unsigned count.
    ///
    /// Validation guarantees `posts_per_page >= 1`.
    pub fn page_size(&self) -> usize {
        usize::try_from(self.posts_per_page).unwrap_or(1).max(1)
    }

    /// Absolute URL for a site path, honoring `pathPrefix`.
    pub fn page_url(&self, path: &str) -> String {
        join_url(&self.url, &self.path_prefix, path)
    }

    /// The record as the site generator reads it (camelCase keys, file order).
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Commented `site.toml` starter.
    pub fn starter_template() -> String {
        Self::template_with_header()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Minimal valid config with `extra` appended to the root table.
///
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_config_str(extra: &str) -> String {
    format!(
        "url = \"https://example.com\"\n\
         pathPrefix = \"/\"\n\
         title = \"Test\"\n\
         subtitle = \"\"\n\
         copyright = \"\"\n\
         postsPerPage = 4\n\
         useKatex = false\n\
         {extra}\n\
         [[menu]]\nlabel = \"Articles\"\npath = \"/\"\n\
         [author]\nname = \"Test\"\nphoto = \"photo.jpg\"\nbio = \"\"\n"
    )
}

#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&test_config_str(extra)).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(content: &str) -> ConfigDiagnostics {
        match SiteConfig::from_str(content) {
            Err(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let err = SiteConfig::from_str("[author\nname = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_embedded_example() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.title, "Harry G. Withers");
        assert_eq!(config.url, "https://hargwit.com");
        assert_eq!(config.posts_per_page, 4);
        assert!(!config.use_katex);
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.google_analytics_id, "UA-146506685-1");
        assert!(!config.comments_enabled());
        assert!(config.analytics_enabled());
        assert_eq!(config.author.contacts.linkedin, "hargwit");
        assert!(config.author.bio.contains("south of England"));
    }

    #[test]
    fn test_menu_order_preserved() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(
            config.menu,
            vec![
                MenuItem::new("Articles", "/"),
                MenuItem::new("About me", "/pages/about"),
            ]
        );
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let config = test_parse_config("");
        assert_eq!(config.disqus_shortname, "");
        assert_eq!(config.google_analytics_id, "");
        assert_eq!(config.author.contacts, ContactsConfig::default());
    }

    #[test]
    fn test_required_field_missing() {
        let content = test_config_str("").replace("title = \"Test\"\n", "");
        let err = SiteConfig::from_str(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_posts_per_page_non_positive() {
        for value in ["0", "-3"] {
            let content = test_config_str("")
                .replace("postsPerPage = 4", &format!("postsPerPage = {value}"));
            let diag = errors_for(&content);
            assert!(diag.has_error_for("postsPerPage"), "postsPerPage = {value}");
        }
    }

    #[test]
    fn test_posts_per_page_wrong_type() {
        let content = test_config_str("").replace("postsPerPage = 4", "postsPerPage = \"four\"");
        let err = SiteConfig::from_str(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_path_prefix_without_slash() {
        let content = test_config_str("").replace("pathPrefix = \"/\"", "pathPrefix = \"blog\"");
        let diag = errors_for(&content);
        assert!(diag.has_error_for("pathPrefix"));
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/blog\""));
    }

    #[test]
    fn test_url_checks() {
        for bad in ["hargwit.com", "ftp://hargwit.com", "not a url"] {
            let content = test_config_str("").replace("https://example.com", bad);
            let diag = errors_for(&content);
            assert!(diag.has_error_for("url"), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_errors_collected_together() {
        let content = test_config_str("")
            .replace("pathPrefix = \"/\"", "pathPrefix = \"\"")
            .replace("postsPerPage = 4", "postsPerPage = 0");
        let diag = errors_for(&content);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_unknown_contact_is_error() {
        let content = format!("{}[author.contacts]\nmyspace = \"tom\"\n", test_config_str(""));
        let diag = errors_for(&content);
        assert!(diag.has_error_for("author.contacts.myspace"));
        let hint = diag.errors()[0].hint.as_deref().unwrap_or_default();
        assert!(hint.contains("soundcloud"));
    }

    #[test]
    fn test_unknown_root_key_is_warning() {
        let content = test_config_str("theme = \"dark\"");
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert_eq!(ignored, vec!["theme".to_string()]);

        let diag = config.diagnose(&ignored);
        assert!(!diag.has_errors());
        assert!(diag.has_warning_for("theme"));
        assert!(SiteConfig::from_str(&content).is_ok());
    }

    #[test]
    fn test_contacts_round_trip() {
        let content = format!(
            "{}[author.contacts]\ntwitter = \"hargwit\"\ngithub = \"hargwit\"\n",
            test_config_str("")
        );
        let config = SiteConfig::from_str(&content).unwrap();
        let present: Vec<_> = config.author.contacts.present().collect();
        assert_eq!(
            present,
            vec![
                (ContactPlatform::Twitter, "hargwit"),
                (ContactPlatform::Github, "hargwit"),
            ]
        );
        assert_eq!(config.author.contacts.email, "");
        assert_eq!(config.author.contacts.soundcloud, "");
    }

    #[test]
    fn test_json_export_uses_interface_keys() {
        let config = SiteConfig::embedded().unwrap();
        let json = config.to_json().unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "url",
                "pathPrefix",
                "title",
                "subtitle",
                "copyright",
                "disqusShortname",
                "postsPerPage",
                "googleAnalyticsId",
                "useKatex",
                "menu",
                "author",
            ]
        );
        assert_eq!(json["menu"][1]["path"], "/pages/about");
        assert_eq!(json["author"]["contacts"]["github"], "hargwit");
    }

    #[test]
    fn test_json_round_trip() {
        let config = SiteConfig::embedded().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_starter_template_is_valid() {
        let template = SiteConfig::starter_template();
        assert!(template.contains("pathPrefix = \"/\""));
        assert!(template.contains("postsPerPage = 4"));
        assert!(template.contains("[[menu]]"));
        assert!(template.contains("[author.contacts]"));

        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.menu, vec![MenuItem::default()]);
    }

    #[test]
    fn test_page_url() {
        let mut config = SiteConfig::embedded().unwrap();
        assert_eq!(config.page_url("/pages/about"), "https://hargwit.com/pages/about");

        config.path_prefix = "/blog".into();
        assert_eq!(config.page_url("/"), "https://hargwit.com/blog/");
        assert_eq!(config.page_size(), 4);
    }

    #[test]
    fn test_from_path_sets_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, EMBEDDED_CONFIG).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        let root = config.get_root().unwrap();
        assert_eq!(root, util::normalize_path(dir.path()));
        assert_eq!(
            config.photo_path(),
            Some(root.join(ASSETS_DIR).join("photo.jpg"))
        );
    }

    /// The only test that touches the process-wide handle.
    #[test]
    fn test_global_lifecycle() {
        assert!(matches!(get(), Err(ConfigError::NotLoaded)));
        assert!(!is_loaded());

        let loaded = load(ConfigSource::Embedded).unwrap();
        let got = get().unwrap();
        assert_eq!(*got, *loaded);
        assert_eq!(got.title, "Harry G. Withers");
        assert_eq!(got.menu.len(), 2);

        assert!(matches!(
            load(ConfigSource::Embedded),
            Err(ConfigError::AlreadyLoaded)
        ));
    }
}
