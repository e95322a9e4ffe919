//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro that only prints in verbose mode
//!
//! Everything goes to stderr so stdout stays clean for `show` output.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "loaded {}", path.display());
//! debug!("config"; "{} unknown keys", ignored.len());
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut err = stderr().lock();
    writeln!(err, "{prefix} {message}").ok();
    err.flush().ok();
}

/// Apply color to a module prefix based on module type.
///
/// Honors `owo_colors::set_override` (the `--color` flag) and TTY detection.
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let stream = Stream::Stderr;
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix
            .if_supports_color(stream, |p| p.bright_red().bold().to_string())
            .to_string(),
        "warning" => prefix
            .if_supports_color(stream, |p| p.bright_yellow().bold().to_string())
            .to_string(),
        "hint" => prefix
            .if_supports_color(stream, |p| p.bright_blue().bold().to_string())
            .to_string(),
        _ => prefix
            .if_supports_color(stream, |p| p.bright_green().bold().to_string())
            .to_string(),
    }
}
