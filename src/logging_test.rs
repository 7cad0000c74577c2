use crate::logging::file_appender;

#[test]
fn file_appender_creates_missing_log_dir() {
    let root = tempfile::tempdir().unwrap();
    let log_dir = root.path().join("nested").join("logs");

    file_appender(&log_dir).unwrap();

    assert!(log_dir.is_dir());
}

#[test]
fn file_appender_reports_unusable_log_dir() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let log_dir = file.path().join("logs");

    let err = file_appender(&log_dir).unwrap_err();

    assert!(err.to_string().contains("creating log directory"), "{err}");
}
