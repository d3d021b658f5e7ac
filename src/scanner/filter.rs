use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ThemeGuardError};

/// Junk and VCS entries that are never part of a theme, matched against any
/// path segment.
const IGNORED_SEGMENTS: &[&str] = &[
    ".git",
    ".svn",
    "node_modules",
    "bower_components",
    ".DS_Store",
    "Thumbs.db",
];

/// Trait for deciding which discovered paths belong to the theme.
pub trait FileFilter {
    fn should_include(&self, rel_path: &str) -> bool;
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, rel_path: &str) -> bool {
        (**self).should_include(rel_path)
    }
}

/// Built-in ignore set plus optional user-supplied glob patterns.
#[derive(Debug)]
pub struct IgnoreFilter {
    extra: Option<GlobSet>,
}

impl IgnoreFilter {
    /// # Errors
    /// Returns `InvalidPattern` if an extra pattern is not a valid glob.
    pub fn new(extra_patterns: &[String]) -> Result<Self> {
        if extra_patterns.is_empty() {
            return Ok(Self { extra: None });
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in extra_patterns {
            let glob = Glob::new(pattern).map_err(|e| ThemeGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| ThemeGuardError::InvalidPattern {
                pattern: extra_patterns.join(", "),
                source: e,
            })?;

        Ok(Self { extra: Some(set) })
    }

    /// True when the path hits the built-in or configured ignore set.
    #[must_use]
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        let junk_segment = rel_path
            .split(['/', '\\'])
            .any(|segment| IGNORED_SEGMENTS.contains(&segment));

        junk_segment
            || self
                .extra
                .as_ref()
                .is_some_and(|set| set.is_match(rel_path.replace('\\', "/")))
    }
}

impl FileFilter for IgnoreFilter {
    fn should_include(&self, rel_path: &str) -> bool {
        !self.is_ignored(rel_path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
