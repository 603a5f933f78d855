use std::io::Write;

use floormap_ingest::{IngestError, read_catalog};
use floormap_model::CallNumberKind;
use tempfile::NamedTempFile;

fn temp_tsv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write file");
    file
}

#[test]
fn reads_catalog_from_disk() {
    let file = temp_tsv(
        "Library\tCollection\tRange\tA\tB\tFloor\tText\n\
         ugl\tmain\tA1 - PZ99\t\t\t1\tFirst floor\n\
         ugl\tmain\t000-999\t\t\t2\tSecond floor\n\
         ugl\t(none)\t\t\t\t3\tThird floor\n\
         \n\
         hlg\tspec\t\t\t\tB\tBasement\n",
    );
    let catalog = read_catalog(file.path()).expect("read catalog");

    let stats = catalog.stats();
    assert_eq!(stats.libraries, 2);
    assert_eq!(stats.collections, 3);
    assert_eq!(stats.entries, 4);
    assert_eq!(stats.catch_all_entries, 2);

    let main = catalog.entries("UGL", "MAIN").expect("UGL/MAIN");
    assert_eq!(main[0].range().map(|r| r.kind()), Some(CallNumberKind::Lc));
    assert_eq!(main[1].range().map(|r| r.kind()), Some(CallNumberKind::Dewey));
    assert!(main[0].contains("PS3545 I345"));
    assert!(!main[0].contains("QA76"));
    assert!(main[1].contains("813.54"));

    let unfiled = catalog.entries("UGL", "").expect("UGL without collection");
    assert_eq!(unfiled[0].collection(), None);
    assert!(unfiled[0].contains("anything at all"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.tsv");
    assert!(matches!(
        read_catalog(&path),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn unrecognized_range_aborts() {
    let file = temp_tsv(
        "Library\tCollection\tRange\tA\tB\tFloor\tText\n\
         ugl\tmain\tA1\t\t\t1\tok\n\
         ugl\tmain\t*\t\t\t1\tbroken\n",
    );
    let err = read_catalog(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Entry { line: 3, .. }));
}
