use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::scanner::{DirectoryScanner, DiscoveredFile, FileScanner, IgnoreFilter};
use crate::template;

use super::{FileRecord, TemplateCatalog, ThemeModel, custom};

/// Extensions read eagerly: template sources, stylesheets and JSON
/// manifests. Everything else stays on disk.
const TEXT_EXTENSIONS: &[&str] = &[".hbs", ".css", ".json"];

/// Build the [`ThemeModel`] for a resolved theme root.
///
/// Individual unreadable or unparsable files degrade to file-level
/// diagnostics on their records; a model is always returned so partial scans
/// still produce a report.
///
/// # Errors
/// Returns an error only when the root itself cannot be listed.
pub fn read_theme(root: &Path, filter: &IgnoreFilter) -> Result<ThemeModel> {
    let scanner = DirectoryScanner::new(filter);
    let discovered = scanner.scan(root)?;

    // Reads are independent per file; the indexed collect reassembles the
    // records into discovery order no matter which read finished first.
    let files: Vec<FileRecord> = discovered.par_iter().map(build_record).collect();

    let mut partials = Vec::new();
    let mut templates = TemplateCatalog::default();
    for file in &files {
        if !file.is_template() {
            continue;
        }
        if let Some(name) = partial_name(&file.path) {
            partials.push(name);
            continue;
        }
        if let Some(name) = catalog_name(&file.path) {
            if let Some(descriptor) = custom::from_catalog_name(&name) {
                templates.custom.push(descriptor);
            }
            templates.all.push(name);
        }
    }

    Ok(ThemeModel {
        path: root.to_path_buf(),
        files,
        partials,
        templates,
    })
}

fn build_record(discovered: &DiscoveredFile) -> FileRecord {
    let mut record = FileRecord {
        path: discovered.path.clone(),
        ext: file_ext(&discovered.path),
        symlink: discovered.symlink,
        ..FileRecord::default()
    };

    if record.symlink || !TEXT_EXTENSIONS.contains(&record.ext.as_str()) {
        return record;
    }

    match fs::read_to_string(&discovered.abs_path) {
        Ok(content) => {
            if record.is_template() {
                match template::parse(&content) {
                    Ok(ast) => record.ast = Some(ast),
                    Err(failure) => record.parse_error = Some(failure.message),
                }
            }
            record.content = Some(content);
        }
        Err(e) => record.read_error = Some(e.to_string()),
    }

    record
}

/// Extension including its leading dot; a pure dotfile keeps its whole name.
fn file_ext(rel_path: &str) -> String {
    let name = rel_path.rsplit(['/', '\\']).next().unwrap_or(rel_path);
    match name.rsplit_once('.') {
        Some(("", _)) => name.to_string(),
        Some((_, ext)) => format!(".{ext}"),
        None => String::new(),
    }
}

/// Derived partial name for files under `partials/`. The separator style of
/// the discovered path is kept verbatim in the name.
fn partial_name(rel_path: &str) -> Option<String> {
    let rest = rel_path.strip_prefix("partials")?;
    let rest = rest.strip_prefix(['/', '\\'])?;
    Some(rest.strip_suffix(".hbs").unwrap_or(rest).to_string())
}

/// Catalog name for template files outside `partials/` and `assets/`.
fn catalog_name(rel_path: &str) -> Option<String> {
    let first_segment = rel_path.split(['/', '\\']).next().unwrap_or(rel_path);
    if first_segment == "assets" {
        return None;
    }
    Some(
        rel_path
            .strip_suffix(".hbs")
            .unwrap_or(rel_path)
            .to_string(),
    )
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
