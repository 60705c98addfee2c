//! Avatar asset lookup.
//!
//! Walks the configured asset directories and returns the first file whose
//! site-relative path matches the avatar pattern. Files are visited in sorted
//! order so the match is stable across builds.

use super::error::{BioError, Result};
use super::query::{AvatarAsset, FixedSize};
use jwalk::WalkDir;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Compiled avatar path pattern.
#[derive(Debug, Clone)]
pub struct AvatarPattern(Regex);

impl AvatarPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|err| BioError::Pattern(pattern.to_string(), err))
    }

    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

/// Find the avatar under `roots`.
///
/// Missing roots are skipped. Returns `None` when nothing matches.
pub fn find_avatar(
    pattern: &AvatarPattern,
    roots: &[PathBuf],
    site_root: &Path,
    size: FixedSize,
) -> Option<AvatarAsset> {
    let mut files: Vec<_> = roots
        .iter()
        .filter(|root| root.is_dir())
        .flat_map(|root| {
            WalkDir::new(root)
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path())
        })
        .collect();
    files.sort();

    files
        .iter()
        .map(|path| site_relative(path, site_root))
        .find(|rel| pattern.is_match(rel))
        .map(|path| AvatarAsset {
            path,
            width: size.width,
            height: size.height,
        })
}

/// Site-relative path with `/` separators.
fn site_relative(path: &Path, site_root: &Path) -> String {
    let rel = path.strip_prefix(site_root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SIZE: FixedSize = FixedSize {
        width: 25,
        height: 25,
    };

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_invalid_pattern() {
        let err = AvatarPattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, BioError::Pattern(p, _) if p == "(unclosed"));
    }

    #[test]
    fn test_first_match_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "assets/b/dwit.jpg");
        touch(dir.path(), "assets/a/dwit.jpg");
        touch(dir.path(), "assets/a/other.png");

        let pattern = AvatarPattern::new("dwit.jpg").unwrap();
        let found = find_avatar(&pattern, &[dir.path().join("assets")], dir.path(), SIZE).unwrap();

        assert_eq!(found.path, "assets/a/dwit.jpg");
        assert_eq!(found.width, 25);
        assert_eq!(found.height, 25);
    }

    #[test]
    fn test_no_match() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "assets/logo.svg");

        let pattern = AvatarPattern::new("dwit.jpg").unwrap();
        assert!(find_avatar(&pattern, &[dir.path().join("assets")], dir.path(), SIZE).is_none());
    }

    #[test]
    fn test_missing_root_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "static/me.png");

        let pattern = AvatarPattern::new(r"me\.png$").unwrap();
        let roots = [dir.path().join("assets"), dir.path().join("static")];
        let found = find_avatar(&pattern, &roots, dir.path(), SIZE).unwrap();
        assert_eq!(found.path, "static/me.png");
    }
}
