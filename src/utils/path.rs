//! Path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_path_canonicalized() {
        let dir = TempDir::new().unwrap();
        let normalized = normalize_path(&dir.path().join("."));
        assert_eq!(normalized, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_absolute_kept() {
        let path = Path::new("/no/such/dir/for/sitebio");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_missing_relative_joined_to_cwd() {
        let normalized = normalize_path(Path::new("no-such-dir-for-sitebio"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("no-such-dir-for-sitebio"));
    }
}
