use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use super::*;

fn build_zip(dir: &TempDir, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    for (entry, content) in entries {
        if entry.ends_with('/') {
            writer
                .add_directory(entry.trim_end_matches('/'), SimpleFileOptions::default())
                .unwrap();
        } else {
            writer
                .start_file(*entry, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap();
    path
}

#[test]
fn extracts_entries_to_a_temp_dir() {
    let dir = TempDir::new().unwrap();
    let zip_path = build_zip(
        &dir,
        "theme.zip",
        &[("index.hbs", "{{body}}"), ("assets/styles.css", ".page {}")],
    );

    let extracted = extract(&zip_path).unwrap();

    assert!(extracted.path.join("index.hbs").is_file());
    assert!(extracted.path.join("assets/styles.css").is_file());
    assert_eq!(extracted.file_list, vec!["index.hbs", "assets/styles.css"]);
}

#[test]
fn extraction_dir_is_removed_on_drop() {
    let dir = TempDir::new().unwrap();
    let zip_path = build_zip(&dir, "theme.zip", &[("index.hbs", "x")]);

    let extracted = extract(&zip_path).unwrap();
    let extracted_path = extracted.path.clone();
    assert!(extracted_path.exists());

    drop(extracted);
    assert!(!extracted_path.exists());
}

#[test]
fn persisted_extraction_dir_survives_drop() {
    let dir = TempDir::new().unwrap();
    let zip_path = build_zip(&dir, "theme.zip", &[("index.hbs", "x")]);

    let mut extracted = extract(&zip_path).unwrap();
    extracted.persist();
    let extracted_path = extracted.path.clone();

    drop(extracted);
    assert!(extracted_path.exists());

    std::fs::remove_dir_all(extracted_path).unwrap();
}

#[test]
fn missing_archive_is_a_file_read_error() {
    let dir = TempDir::new().unwrap();

    let err = extract(&dir.path().join("nope.zip")).unwrap_err();

    assert!(matches!(err, ThemeGuardError::FileRead { .. }));
}

#[test]
fn corrupt_archive_is_a_zip_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.zip");
    std::fs::write(&path, "this is not a zip archive").unwrap();

    let err = extract(&path).unwrap_err();

    assert!(matches!(err, ThemeGuardError::Zip { .. }));
}

#[test]
fn file_list_keeps_central_directory_order() {
    let dir = TempDir::new().unwrap();
    let zip_path = build_zip(
        &dir,
        "theme.zip",
        &[("z.hbs", "z"), ("a.hbs", "a"), ("m/index.hbs", "m")],
    );

    let extracted = extract(&zip_path).unwrap();

    assert_eq!(extracted.file_list, vec!["z.hbs", "a.hbs", "m/index.hbs"]);
}
