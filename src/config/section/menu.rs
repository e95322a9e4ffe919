//! `[[menu]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "/pages/about"
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// A navigation entry, rendered in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "menu", array)]
pub struct MenuItem {
    /// Link text.
    #[config(default = "Articles", inline_doc)]
    pub label: String,

    /// Target path, usually root-relative.
    #[config(default = "/", inline_doc)]
    pub path: String,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            label: "Articles".into(),
            path: "/".into(),
        }
    }
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Validate a whole menu.
    ///
    /// # Checks
    /// - every entry has a non-blank `label` and `path`
    /// - the same `path` twice is reported as a warning
    pub fn validate_all(menu: &[Self], diag: &mut ConfigDiagnostics) {
        let section = Self::TEMPLATE_SECTION;
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

        for (i, item) in menu.iter().enumerate() {
            if item.label.trim().is_empty() {
                diag.error(
                    Self::FIELDS.label.at_index(section, i),
                    "menu entry needs a label",
                );
            }

            if item.path.trim().is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.path.at_index(section, i),
                    "menu entry needs a path",
                    "use a root-relative path like \"/pages/about\"",
                );
                continue;
            }

            if let Some(first) = seen.insert(item.path.as_str(), i) {
                diag.warn(
                    Self::FIELDS.path.at_index(section, i),
                    format!("same path as menu[{first}] ({})", item.path),
                );
            }
        }
    }
}
