use gln_ingest::{IngestError, find_all_sources, find_latest_source};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str, age_secs: u64) {
    let path = dir.path().join(name);
    std::fs::write(&path, "header\ndata").unwrap();
    let mtime = SystemTime::now() - Duration::from_secs(age_secs);
    let file = std::fs::File::options().write(true).open(&path).unwrap();
    file.set_modified(mtime).unwrap();
}

#[test]
fn newest_matching_document_wins() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "bedrijfscoderingen_20240114.csv", 3600);
    touch(&dir, "bedrijfscoderingen_20240115.csv", 60);
    touch(&dir, "locatiecoderingen_20240115.csv", 10);

    let chosen = find_latest_source(dir.path(), "bedrijfscoderingen").unwrap();
    assert!(
        chosen
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .contains("20240115")
    );
}

#[test]
fn matching_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "glnple_20240115.txt", 60);
    assert!(find_latest_source(dir.path(), "GLNPLE").is_ok());
}

#[test]
fn non_tabular_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bedrijfscoderingen.pdf"), "binary").unwrap();
    let error = find_latest_source(dir.path(), "bedrijfscoderingen").unwrap_err();
    assert!(matches!(error, IngestError::NoSourceDocument { .. }));
    assert!(error.to_string().contains("no source document found"));
}

#[test]
fn merge_feeds_see_every_match() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "Mutatie_hobaho_20240115.csv", 120);
    touch(&dir, "Mutatie_cnb_20240115.csv", 60);
    touch(&dir, "unrelated.csv", 10);

    let sources = find_all_sources(dir.path(), "Mutatie").unwrap();
    assert_eq!(sources.len(), 2);
}

#[test]
fn missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let error = find_latest_source(&missing, "bedrijfscoderingen").unwrap_err();
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}
