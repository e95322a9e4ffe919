//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Join a base URL, a path prefix and a page path with single slashes.
///
/// # Examples
/// ```ignore
/// join_url("https://hargwit.com", "/", "/pages/about")    -> "https://hargwit.com/pages/about"
/// join_url("https://example.com/", "/blog/", "posts/a")   -> "https://example.com/blog/posts/a"
/// join_url("https://example.com", "/", "/")               -> "https://example.com/"
/// ```
pub fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let mut out = base.trim_end_matches('/').to_string();
    for part in [prefix, path] {
        let part = part.trim_matches('/');
        if !part.is_empty() {
            out.push('/');
            out.push_str(part);
        }
    }
    // Keep trailing slash semantics of the page path ("/" stays a directory)
    if path.ends_with('/') || (path.is_empty() && prefix.ends_with('/')) {
        out.push('/');
    }
    out
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, then falls back to joining with the
/// current directory.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Upward search starting at `start` instead of the cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://hargwit.com", "/", "/pages/about"),
            "https://hargwit.com/pages/about"
        );
        assert_eq!(
            join_url("https://example.com/", "/blog/", "posts/a"),
            "https://example.com/blog/posts/a"
        );
        assert_eq!(join_url("https://example.com", "/", "/"), "https://example.com/");
        assert_eq!(
            join_url("https://example.com", "/blog", "/tags/"),
            "https://example.com/blog/tags/"
        );
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/site.toml"));
        assert!(normalized.is_absolute());
    }
}
