#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Creates an `assert_cmd` Command for the theme-guard binary.
#[macro_export]
macro_rules! theme_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("theme-guard"))
    };
}

pub const CLEAN_MANIFEST: &str = r#"{
    "name": "clean-theme",
    "version": "1.0.0",
    "author": {"email": "dev@example.com"},
    "config": {"posts_per_page": 5}
}"#;

pub const CLEAN_LAYOUT: &str =
    "<html><head>{{ghost_head}}</head><body>{{{body}}}{{ghost_foot}}</body></html>";

pub const CARD_STYLES: &str = ".kg-width-wide { width: 85vw; }\n.kg-width-full { width: 100vw; }\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Lays down a theme that passes every rule at both target versions.
    pub fn create_clean_theme(&self) {
        self.create_file("default.hbs", CLEAN_LAYOUT);
        self.create_file("index.hbs", "{{#foreach posts}}{{title}}{{/foreach}}");
        self.create_file("post.hbs", "{{content}}");
        self.create_file("package.json", CLEAN_MANIFEST);
        self.create_file("assets/css/screen.css", CARD_STYLES);
    }

    /// Builds a zip file from (entry, content) pairs; entries ending in `/`
    /// become directory records.
    pub fn create_zip(&self, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut writer = zip::ZipWriter::new(File::create(&path).expect("Failed to create zip"));
        for (entry, content) in entries {
            if entry.ends_with('/') {
                writer
                    .add_directory(entry.trim_end_matches('/'), SimpleFileOptions::default())
                    .expect("Failed to add directory entry");
            } else {
                writer
                    .start_file(*entry, SimpleFileOptions::default())
                    .expect("Failed to start zip entry");
                writer
                    .write_all(content.as_bytes())
                    .expect("Failed to write zip entry");
            }
        }
        writer.finish().expect("Failed to finish zip");
        path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
