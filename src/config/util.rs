//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Normalize a `base` path prefix to the canonical `/prefix/` form.
///
/// Callers may write `/docs`, `docs/` or `docs`; the generator always
/// works with a leading and trailing slash. The bare root stays `/`.
///
/// # Examples
/// ```ignore
/// normalize_base("/docs")  -> "/docs/"
/// normalize_base("docs/")  -> "/docs/"
/// normalize_base("/")      -> "/"
/// ```
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    format!("/{trimmed}/")
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
