mod builder;
mod custom;

pub use builder::read_theme;
pub use custom::{CustomTemplate, TemplateScope};

use std::path::PathBuf;

use crate::template::ParsedTemplate;

/// One file discovered under the theme root.
///
/// `content` and `ast` are only populated for template and text-like files;
/// binary assets keep path and extension only. Immutable once the builder
/// returns the owning [`ThemeModel`].
#[derive(Debug, Clone, Default)]
pub struct FileRecord {
    /// Root-relative path, separator style preserved as discovered.
    pub path: String,
    /// Extension with its leading dot (`.hbs`). A pure dotfile keeps its
    /// whole name (`.gitkeep`).
    pub ext: String,
    pub content: Option<String>,
    pub ast: Option<ParsedTemplate>,
    /// Compiler message when the template source failed to parse.
    pub parse_error: Option<String>,
    /// IO message when the file could not be read; the scan continues.
    pub read_error: Option<String>,
    pub symlink: bool,
}

impl FileRecord {
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.ext == ".hbs"
    }

    #[must_use]
    pub fn is_stylesheet(&self) -> bool {
        self.ext == ".css"
    }
}

/// Recognized templates: every catalog name plus the custom-template subset.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    /// Extension-stripped names of all templates outside `partials/` and
    /// `assets/`, in discovery order.
    pub all: Vec<String>,
    /// Descriptors for files matching the custom naming conventions, in
    /// discovery order.
    pub custom: Vec<CustomTemplate>,
}

/// In-memory model of one theme, produced once per scan and consumed
/// read-only by the rule engine.
#[derive(Debug, Clone, Default)]
pub struct ThemeModel {
    pub path: PathBuf,
    pub files: Vec<FileRecord>,
    /// Derived partial names; the original separator style is kept verbatim.
    pub partials: Vec<String>,
    pub templates: TemplateCatalog,
}

impl ThemeModel {
    /// Template files whose content was read (partials included).
    pub fn template_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.is_template())
    }

    pub fn stylesheets(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.is_stylesheet())
    }

    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.path == path)
    }

    /// True when the catalog contains a template of the given name.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.all.iter().any(|t| t == name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
