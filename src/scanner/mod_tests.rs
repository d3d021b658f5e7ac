use std::fs;

use tempfile::TempDir;

use super::*;

fn fixture(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }
    dir
}

fn scan(dir: &TempDir) -> Vec<String> {
    let scanner = DirectoryScanner::new(IgnoreFilter::new(&[]).unwrap());
    scanner
        .scan(dir.path())
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect()
}

#[test]
fn finds_files_recursively_in_sorted_order() {
    let dir = fixture(&["index.hbs", "assets/styles.css", "partials/nav.hbs"]);

    assert_eq!(
        scan(&dir),
        vec!["assets/styles.css", "index.hbs", "partials/nav.hbs"]
    );
}

#[test]
fn skips_ignored_entries() {
    let dir = fixture(&[
        "index.hbs",
        "assets/Thumbs.db",
        "node_modules/pkg/index.js",
        ".git/HEAD",
    ]);

    assert_eq!(scan(&dir), vec!["index.hbs"]);
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let scanner = DirectoryScanner::new(IgnoreFilter::new(&[]).unwrap());

    assert!(scanner.scan(&dir.path().join("nope")).is_err());
}

#[test]
fn discovery_order_is_stable_across_runs() {
    let dir = fixture(&["b.hbs", "a.hbs", "c/inner.hbs", "post.hbs"]);

    assert_eq!(scan(&dir), scan(&dir));
}

#[cfg(unix)]
#[test]
fn symlinks_are_reported_but_not_followed() {
    let dir = fixture(&["index.hbs"]);
    std::os::unix::fs::symlink(dir.path().join("index.hbs"), dir.path().join("link.hbs")).unwrap();

    let scanner = DirectoryScanner::new(IgnoreFilter::new(&[]).unwrap());
    let files = scanner.scan(dir.path()).unwrap();
    let link = files.iter().find(|f| f.path == "link.hbs").unwrap();

    assert!(link.symlink);
    assert!(!files.iter().find(|f| f.path == "index.hbs").unwrap().symlink);
}
