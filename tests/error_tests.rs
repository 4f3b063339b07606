//! Tests for structured error types.

use std::{error::Error as _, io};

use mail_corpus::Error;

#[test]
fn test_open_error_display_and_source() {
    let error = Error::Open {
        path: "inbox/0001.txt".to_string(),
        message: "no such file: inbox/0001.txt".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };

    assert_eq!(error.to_string(), "no such file: inbox/0001.txt: inbox/0001.txt");
    assert!(error.source().is_some());
    assert!(error.is_not_found());
    assert!(!error.is_read_failure());
}

#[test]
fn test_read_error_display() {
    let error = Error::Read {
        path: "inbox/0002.txt".to_string(),
        source: io::Error::new(io::ErrorKind::UnexpectedEof, "eof"),
    };

    assert_eq!(error.to_string(), "failed to read file: inbox/0002.txt");
    assert!(error.is_read_failure());
    assert!(!error.is_not_found());
}

#[test]
fn test_size_exceeded_display() {
    let error = Error::SizeExceeded {
        path: "inbox/huge.txt".to_string(),
        size: u64::MAX,
    };

    let message = error.to_string();
    assert!(message.starts_with(&format!("file size {} bytes", u64::MAX)));
    assert!(message.ends_with("inbox/huge.txt"));
    assert!(error.is_read_failure());
}
