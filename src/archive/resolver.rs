use std::path::{Path, PathBuf};

/// Outcome of locating the theme root inside an extracted archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    pub path: PathBuf,
    /// False when the marker file was not found anywhere; callers scan the
    /// extraction root anyway so the absence surfaces as a rule failure.
    pub matched_marker: bool,
}

/// Locate the directory containing the theme's entry-point template,
/// however the archive author nested their files.
///
/// The shallowest occurrence of `marker` wins; equally-shallow occurrences
/// are broken by listing order. Entries ending in a separator are directory
/// records and never match.
#[must_use]
pub fn resolve(extraction_root: &Path, file_list: &[String], marker: &str) -> ResolvedRoot {
    let mut best: Option<(usize, PathBuf)> = None;

    for entry in file_list {
        if entry.ends_with(['/', '\\']) {
            continue;
        }
        let segments: Vec<&str> = entry.split(['/', '\\']).filter(|s| !s.is_empty()).collect();
        let Some((name, parents)) = segments.split_last() else {
            continue;
        };
        if *name != marker {
            continue;
        }

        let depth = parents.len();
        if best.as_ref().is_none_or(|(best_depth, _)| depth < *best_depth) {
            let mut path = extraction_root.to_path_buf();
            path.extend(parents);
            best = Some((depth, path));
        }
    }

    best.map_or_else(
        || ResolvedRoot {
            path: extraction_root.to_path_buf(),
            matched_marker: false,
        },
        |(_, path)| ResolvedRoot {
            path,
            matched_marker: true,
        },
    )
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
