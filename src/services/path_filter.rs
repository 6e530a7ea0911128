//! Path filter service
//!
//! Maps file arguments onto paths relative to the base directory and asks
//! the pattern set whether they are excluded.

use crate::domain::PatternSet;
use std::path::{Component, Path, PathBuf};

/// Decides which file arguments are skipped
pub struct PathFilter {
    patterns: PatternSet,
    base_dir: PathBuf,
    cwd: PathBuf,
}

impl PathFilter {
    /// Create a filter for `patterns` rooted at `base_dir`
    ///
    /// Relative arguments and a relative `base_dir` resolve against `cwd`.
    pub fn new(patterns: PatternSet, base_dir: &Path, cwd: &Path) -> Self {
        let cwd = normalize(cwd);
        let base_dir = normalize(&cwd.join(base_dir));

        Self {
            patterns,
            base_dir,
            cwd,
        }
    }

    /// Path of `path` relative to the base directory, if it lies under it
    pub fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let absolute = normalize(&self.cwd.join(path));
        absolute
            .strip_prefix(&self.base_dir)
            .ok()
            .map(Path::to_path_buf)
    }

    /// Check whether a file argument is excluded by the pattern set
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let Some(relative) = self.relative_path(path) else {
            return false;
        };

        let is_dir = self.cwd.join(path).is_dir();
        self.patterns.is_match(&relative, is_dir)
    }

    /// The resolved base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Resolve `.` and `..` components without touching the file system
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}
