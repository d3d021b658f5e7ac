mod filter;

pub use filter::{FileFilter, IgnoreFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// A file found during the recursive walk, before any content is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Root-relative path, separators as produced by the walk.
    pub path: String,
    pub abs_path: PathBuf,
    pub symlink: bool,
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching files in discovery order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<DiscoveredFile>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<DiscoveredFile> {
        // Sorted walk keeps discovery order stable across platforms and runs.
        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() || e.path_is_symlink())
            .filter_map(|e| {
                let rel = e.path().strip_prefix(root).ok()?;
                let path = rel.to_string_lossy().into_owned();
                self.filter.should_include(&path).then(|| DiscoveredFile {
                    path,
                    abs_path: e.path().to_path_buf(),
                    symlink: e.path_is_symlink(),
                })
            })
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<DiscoveredFile>> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            )
            .into());
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
