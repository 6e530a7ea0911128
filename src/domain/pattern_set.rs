//! Ignore-pattern set
//!
//! Compiles the lines of a `.gitignore`-style file into a queryable rule set
//! with gitwildmatch semantics, backed by `ignore::gitignore`.

use crate::error::IgnoreError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::io;
use std::path::Path;

/// Default name of the ignore file looked up in the base directory
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Compiled, read-only set of ignore rules
#[derive(Debug, Clone)]
pub struct PatternSet {
    matcher: Gitignore,
}

impl PatternSet {
    /// A set that matches nothing
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }

    /// Load `file_name` from `base_dir`
    ///
    /// A missing file yields an empty set. A file that exists but cannot be
    /// read or is not valid UTF-8 is an error.
    pub fn load(base_dir: &Path, file_name: &str) -> Result<Self, IgnoreError> {
        let path = base_dir.join(file_name);
        let origin = path.display().to_string();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No ignore file at {}", origin);
                return Ok(Self::empty());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(IgnoreError::Decode { path: origin });
            }
            Err(source) => return Err(IgnoreError::Read { path: origin, source }),
        };

        let set = Self::compile(base_dir, Some(&path), &origin, &content)?;
        log::debug!("Loaded {} ignore rules from {}", set.len(), origin);
        Ok(set)
    }

    /// Compile rules from in-memory `.gitignore` text rooted at `base_dir`
    pub fn from_lines(base_dir: &Path, content: &str) -> Result<Self, IgnoreError> {
        Self::compile(base_dir, None, "<inline>", content)
    }

    fn compile(
        base_dir: &Path,
        source: Option<&Path>,
        origin: &str,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(base_dir);

        for (number, line) in content.lines().enumerate() {
            // git drops malformed patterns and keeps going
            if let Err(e) = builder.add_line(source.map(Path::to_path_buf), line) {
                log::warn!(
                    "Skipping invalid pattern on line {} of {}: {}",
                    number + 1,
                    origin,
                    e
                );
            }
        }

        let matcher = builder.build().map_err(|source| IgnoreError::Build {
            path: origin.to_string(),
            source,
        })?;

        Ok(Self { matcher })
    }

    /// Check whether a path relative to the base directory is excluded
    ///
    /// A path is also excluded when one of its parent directories is.
    pub fn is_match(&self, relative: &Path, is_dir: bool) -> bool {
        if relative.as_os_str().is_empty() || relative.has_root() {
            return false;
        }

        self.matcher
            .matched_path_or_any_parents(relative, is_dir)
            .is_ignore()
    }

    /// Number of compiled rules (exclusions and negations)
    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    /// Check if the set has no rules
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(content: &str) -> PatternSet {
        PatternSet::from_lines(Path::new("/repo"), content).unwrap()
    }

    #[test]
    fn test_empty_matches_nothing() {
        let set = PatternSet::empty();
        assert!(set.is_empty());
        assert!(!set.is_match(Path::new("a.txt"), false));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let set = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "# secrets\n\n*.secret\n").unwrap();

        let set = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.is_match(Path::new("x.secret"), false));
        assert!(!set.is_match(Path::new("x.txt"), false));
    }

    #[test]
    fn test_load_custom_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".printignore"), "*.log\n").unwrap();

        let set = PatternSet::load(dir.path(), ".printignore").unwrap();
        assert!(set.is_match(Path::new("run.log"), false));
    }

    #[test]
    fn test_load_undecodable_file_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), b"*.log\n\xff\xfe\n").unwrap();

        let result = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE);
        assert!(matches!(result, Err(IgnoreError::Decode { .. })));
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".gitignore")).unwrap();

        let result = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE);
        assert!(matches!(result, Err(IgnoreError::Read { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_unstattable_file_fails() {
        // A self-referencing symlink fails stat with ELOOP rather than ENOENT
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");
        std::os::unix::fs::symlink(&path, &path).unwrap();

        let result = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE);
        assert!(matches!(result, Err(IgnoreError::Read { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dangling_symlink_is_empty() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join(".gitignore")).unwrap();

        let set = PatternSet::load(dir.path(), DEFAULT_IGNORE_FILE).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unanchored_glob() {
        let set = set("*.log\n");
        assert!(set.is_match(Path::new("debug.log"), false));
        assert!(set.is_match(Path::new("nested/deep/debug.log"), false));
        assert!(!set.is_match(Path::new("debug.txt"), false));
    }

    #[test]
    fn test_negation_overrides_earlier_rule() {
        let set = set("*.log\n!keep.log\n");
        assert!(set.is_match(Path::new("drop.log"), false));
        assert!(!set.is_match(Path::new("keep.log"), false));
    }

    #[test]
    fn test_later_rule_wins() {
        let set = set("!keep.log\n*.log\n");
        assert!(set.is_match(Path::new("keep.log"), false));
    }

    #[test]
    fn test_directory_only_pattern() {
        let set = set("build/\n");
        assert!(set.is_match(Path::new("build"), true));
        assert!(!set.is_match(Path::new("build"), false));
        assert!(set.is_match(Path::new("build/out.txt"), false));
        assert!(set.is_match(Path::new("sub/build/out.txt"), false));
    }

    #[test]
    fn test_anchored_pattern() {
        let set = set("/top.txt\n");
        assert!(set.is_match(Path::new("top.txt"), false));
        assert!(!set.is_match(Path::new("sub/top.txt"), false));
    }

    #[test]
    fn test_double_star() {
        let set = set("docs/**/*.md\n");
        assert!(set.is_match(Path::new("docs/a/b/c.md"), false));
        assert!(set.is_match(Path::new("docs/c.md"), false));
        assert!(!set.is_match(Path::new("src/c.md"), false));
    }

    #[test]
    fn test_comments_are_not_patterns() {
        let set = set("# *.txt\n");
        assert!(set.is_empty());
        assert!(!set.is_match(Path::new("a.txt"), false));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let set = set("foo[\n*.secret\n");
        assert_eq!(set.len(), 1);
        assert!(set.is_match(Path::new("x.secret"), false));
    }

    #[test]
    fn test_empty_or_rooted_path_never_matches() {
        let set = set("*\n");
        assert!(!set.is_match(Path::new(""), true));
        assert!(!set.is_match(Path::new("/etc/passwd"), false));
    }
}
