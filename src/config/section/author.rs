//! `[author]` profile configuration.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Harry G. Withers"
//! photo = "photo.jpg"
//! bio = """
//! Full stack software developer.
//! """
//!
//! [author.contacts]
//! github = "hargwit"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use super::ContactsConfig;
use crate::config::ConfigDiagnostics;

/// Directory (relative to the config file) that author assets resolve under.
pub const ASSETS_DIR: &str = "static";

/// Author shown in the sidebar and on the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "author")]
pub struct AuthorConfig {
    /// Author display name.
    #[config(default = "Jane Doe", inline_doc)]
    pub name: String,

    /// Avatar path, relative to the `static/` assets directory.
    #[config(default = "photo.jpg", inline_doc)]
    pub photo: String,

    /// Free-form biography; line breaks are kept.
    pub bio: String,

    /// Social handles.
    #[serde(default)]
    #[config(sub)]
    pub contacts: ContactsConfig,
}

impl AuthorConfig {
    /// Biography with each line trimmed and blank edges removed.
    ///
    /// The stored `bio` stays verbatim; this is only for display.
    pub fn bio_text(&self) -> String {
        let lines: Vec<&str> = self.bio.lines().map(str::trim).collect();
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
        lines[start..end].join("\n")
    }

    /// Validate author configuration.
    ///
    /// # Checks
    /// - `photo` is non-empty, relative, and does not climb out of the assets dir
    /// - with a known site `root`, a missing photo file is a warning
    /// - an empty `name` is a warning
    pub fn validate(&self, root: Option<&Path>, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.warn(Self::FIELDS.name, "author name is empty");
        }

        if self.photo.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.photo,
                "author photo is required",
                format!("put an image in `{ASSETS_DIR}/` and set photo = \"photo.jpg\""),
            );
            return;
        }

        let photo = Path::new(&self.photo);
        let escapes = photo
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            diag.error_with_hint(
                Self::FIELDS.photo,
                format!("path '{}' must stay inside `{ASSETS_DIR}/`", self.photo),
                "use a relative path without `..`, e.g. \"photo.jpg\"",
            );
            return;
        }

        if let Some(root) = root {
            let resolved = root.join(ASSETS_DIR).join(photo);
            if !resolved.is_file() {
                diag.warn(
                    Self::FIELDS.photo,
                    format!("'{}' does not exist", resolved.display()),
                );
            }
        }
    }
}
