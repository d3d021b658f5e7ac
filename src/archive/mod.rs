mod resolver;

pub use resolver::{ResolvedRoot, resolve};

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

use crate::error::{Result, ThemeGuardError};

/// A zip archive decompressed into a temporary directory.
///
/// The directory lives as long as this value; dropping it removes the
/// extracted tree unless [`ExtractedArchive::persist`] was called.
#[derive(Debug)]
pub struct ExtractedArchive {
    dir: Option<TempDir>,
    /// Extraction root on disk.
    pub path: PathBuf,
    /// Entry names in central-directory order.
    pub file_list: Vec<String>,
}

impl ExtractedArchive {
    /// Keep the extraction directory on disk past this value's lifetime.
    pub fn persist(&mut self) {
        if let Some(dir) = self.dir.take() {
            let _ = dir.keep();
        }
    }
}

/// Decompress `zip_path` into a fresh temporary directory.
///
/// # Errors
/// Fails with an IO or `Zip` error when the archive is missing, unreadable
/// or corrupt.
pub fn extract(zip_path: &Path) -> Result<ExtractedArchive> {
    let zip_err = |source| ThemeGuardError::Zip {
        path: zip_path.to_path_buf(),
        source,
    };

    let file = File::open(zip_path).map_err(|source| ThemeGuardError::FileRead {
        path: zip_path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(zip_err)?;

    // Entries are listed by index: central-directory order is what makes
    // the shallowest-match tie-breaking reproducible.
    let mut file_list = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(zip_err)?;
        file_list.push(entry.name().to_string());
    }

    let dir = tempfile::Builder::new()
        .prefix("theme-guard-")
        .tempdir()?;
    archive.extract(dir.path()).map_err(zip_err)?;

    Ok(ExtractedArchive {
        path: dir.path().to_path_buf(),
        dir: Some(dir),
        file_list,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
