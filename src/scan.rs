use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::archive;
use crate::checker::{Checker, ResultReport};
use crate::error::Result;
use crate::rules::TargetVersion;
use crate::scanner::IgnoreFilter;
use crate::theme::{self, ThemeModel};

/// Entry-point template that marks the theme root inside an archive.
const ROOT_MARKER: &str = "index.hbs";

/// Caller input for one scan, passed explicitly instead of living in any
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub target_version: TargetVersion,
    /// Keep the temporary extraction directory alive after an archive scan,
    /// for callers that want to inspect the extracted tree.
    pub keep_extracted_dir: bool,
    /// Extra ignore globs on top of the built-in junk list.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(TargetVersion::Current)
    }
}

impl ScanOptions {
    #[must_use]
    pub const fn new(target_version: TargetVersion) -> Self {
        Self {
            target_version,
            keep_extracted_dir: false,
            exclude: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_keep_extracted_dir(mut self, keep: bool) -> Self {
        self.keep_extracted_dir = keep;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }
}

/// A completed scan: the theme model for file-level detail plus the
/// aggregated report.
#[derive(Debug)]
pub struct ScanOutcome {
    pub model: ThemeModel,
    pub report: ResultReport,
    pub target_version: TargetVersion,
}

/// Scan a theme directory in place. Nothing on disk is modified.
///
/// # Errors
/// Fails fast on invalid options, and with an IO error when the directory
/// is missing; per-file problems degrade to rule failures instead.
pub fn scan_directory(path: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let (checker, filter) = prepare(options)?;
    let root = dunce::canonicalize(path)?;

    let model = theme::read_theme(&root, &filter)?;
    let report = checker.run(&model)?;

    Ok(ScanOutcome {
        model,
        report,
        target_version: options.target_version,
    })
}

/// Extract a zip archive, resolve the real theme root inside it, and scan
/// the extracted copy.
///
/// Ignored junk entries are deleted from the temporary copy before the
/// model is built; the user's archive itself is never touched. The
/// extraction directory is removed when the scan ends unless
/// `keep_extracted_dir` is set.
///
/// # Errors
/// Fails fast on invalid options, and with a `Zip`/IO error when the
/// archive cannot be read.
pub fn scan_archive(path: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let (checker, filter) = prepare(options)?;

    let mut extracted = archive::extract(path)?;
    let resolved = archive::resolve(&extracted.path, &extracted.file_list, ROOT_MARKER);
    remove_ignored(&resolved.path, &filter)?;

    let model = theme::read_theme(&resolved.path, &filter)?;
    let report = checker.run(&model)?;

    if options.keep_extracted_dir {
        extracted.persist();
    }

    Ok(ScanOutcome {
        model,
        report,
        target_version: options.target_version,
    })
}

/// Validate caller input before any I/O happens.
fn prepare(options: &ScanOptions) -> Result<(Checker, IgnoreFilter)> {
    let checker = Checker::new(options.target_version)?;
    let filter = IgnoreFilter::new(&options.exclude)?;
    Ok((checker, filter))
}

/// Delete ignored entries from an extracted temp copy, bottom-up so
/// directories empty out before their own turn.
fn remove_ignored(root: &Path, filter: &IgnoreFilter) -> Result<()> {
    for entry in WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }
        if filter.is_ignored(&rel.to_string_lossy()) && entry.path().exists() {
            if entry.file_type().is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
