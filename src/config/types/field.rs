//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `author.contacts.github` or `menu[1].path`.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "author")]
/// pub struct AuthorConfig {
///     pub photo: String,
/// }
///
/// // Generated:
/// impl AuthorConfig {
///     pub const FIELDS: AuthorConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(AuthorConfig::FIELDS.photo, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Build a path at runtime (unknown keys, indexed entries).
    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Insert an array index after `section`.
    ///
    /// `menu.label` with section `menu` and index 1 becomes `menu[1].label`.
    /// Paths outside `section` are returned unchanged.
    pub fn at_index(&self, section: &str, index: usize) -> Self {
        match self.0.strip_prefix(section) {
            Some(rest) if rest.is_empty() || rest.starts_with('.') => {
                Self::owned(format!("{section}[{index}]{rest}"))
            }
            _ => self.clone(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        f.write_str(&super::error::styled(&quoted, |s| s.bright_blue().to_string()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
