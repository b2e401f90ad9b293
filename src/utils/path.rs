//! Path utilities: expand `~` in user-supplied paths, check input files.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// `~` and `~/…` resolve against the home directory; anything else is kept.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') || r.starts_with('\\') => Some(&r[1..]),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(r), Some(home)) => home.join(r),
        _ => PathBuf::from(path),
    }
}

/// Expanded path of an input file that must already exist.
pub fn resolve_input(path: &str) -> AppResult<PathBuf> {
    let resolved = expand_tilde(path);
    if !resolved.is_file() {
        return Err(AppError::InvalidInput(format!(
            "input file not found: {}",
            resolved.display()
        )));
    }
    Ok(resolved)
}
