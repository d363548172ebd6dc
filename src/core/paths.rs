//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/guide.md");
        assert_eq!(normalize_path(path), "docs/guide.md");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/repo");
        let path = Path::new("/repo/docs/guide.md");
        assert_eq!(make_relative(path, root), Some("docs/guide.md".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/repo");
        let path = Path::new("/other/file.md");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_make_relative_same_as_root() {
        let root = Path::new("/repo");
        assert_eq!(make_relative(root, root), Some("".to_string()));
    }
}
