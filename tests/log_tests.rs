//! Tests for the diagnostics recorder.

use std::fs;

use mail_corpus::{Log, Record};
use tempfile::NamedTempFile;

#[test]
fn test_vec_recorder_captures_messages() {
    let mut recorder: Vec<String> = Vec::new();

    recorder.record("first diagnostic");
    recorder.record("second diagnostic");

    assert_eq!(recorder, vec!["first diagnostic", "second diagnostic"]);
}

#[test]
fn test_log_file_writes_one_line_per_message() {
    let temp_file = NamedTempFile::new().expect("create temp file");

    let mut log = Log::file(temp_file.path()).expect("create log file");
    log.record("File a.txt not found in read_all");
    log.record("Could open, but not read file b.txt in read_all");
    drop(log);

    let contents = fs::read_to_string(temp_file.path()).expect("read log file");
    assert_eq!(
        contents,
        "File a.txt not found in read_all\nCould open, but not read file b.txt in read_all\n"
    );
}

#[test]
fn test_log_from_writer() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let writer = fs::File::create(temp_file.path()).expect("create writer file");

    let mut log = Log::from_writer(writer);
    log.record("captured");
    drop(log);

    let contents = fs::read_to_string(temp_file.path()).expect("read log file");
    assert_eq!(contents, "captured\n");
}

#[test]
fn test_log_file_create_failure_has_context() {
    let error = Log::file("/nonexistent/dir/diagnostics.log".as_ref())
        .expect_err("creating a log in a missing directory should fail");

    assert!(error.to_string().contains("failed to create log file"));
}

#[test]
fn test_log_debug_hides_writer() {
    let log = Log::stderr();
    assert_eq!(format!("{log:?}"), "Log { writer: \"<dyn Write>\" }");
}

#[test]
fn test_log_default_is_stdout() {
    // Nothing observable beyond construction, but the default must exist.
    let mut log = Log::default();
    log.record("goes to stdout");
}
