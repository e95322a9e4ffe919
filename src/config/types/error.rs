//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    // Transparent: the TOML message already names the file position.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),

    #[error("site config requested before it was loaded")]
    NotLoaded,

    #[error("site config is already loaded")]
    AlreadyLoaded,
}

impl ConfigError {
    /// True when the record itself is malformed (bad syntax, wrong type,
    /// missing key, or a failed field check).
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Toml(_) | Self::Diagnostics(_))
    }

    /// Collected field diagnostics, if this is a validation failure.
    pub const fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// Style `text` for stderr, honoring `--color` and TTY detection.
pub(crate) fn styled(text: &str, style: impl Fn(&str) -> String) -> String {
    text.if_supports_color(Stream::Stderr, |t| style(t)).to_string()
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "author.contacts.github")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            styled("[", |s| s.dimmed().to_string()),
            styled(self.field.as_str(), |s| s.cyan().to_string()),
            styled("]", |s| s.dimmed().to_string())
        )?;
        // Error message with red bullet
        write!(f, "{} {}", styled("→", |s| s.red().to_string()), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", styled("hint:", |s| s.yellow().to_string()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (likely authoring mistakes that don't block loading).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    ///
    /// Call this after validation to display all warnings at once.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "site config has questionable values:");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Whether any error was reported for exactly `field`.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field.as_str() == field)
    }

    /// Whether any warning was reported for exactly `field`.
    pub fn has_warning_for(&self, field: &str) -> bool {
        self.warnings.iter().any(|(f, _)| f.as_str() == field)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            styled("config validation failed:", |s| s.red().bold().to_string())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                styled("found", |s| s.dimmed().to_string()),
                styled(&self.errors.len().to_string(), |s| s.red().bold().to_string()),
                styled("errors", |s| s.dimmed().to_string())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
