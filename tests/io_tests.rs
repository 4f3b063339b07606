//! Tests for read strategy configuration.

use mail_corpus::Io;

#[test]
fn test_io_default() {
    assert_eq!(Io::default(), Io::Buffered);
}

#[test]
fn test_io_display() {
    assert_eq!(Io::Buffered.to_string(), "buffered");
    assert_eq!(Io::MemoryMapped.to_string(), "memory-mapped");
}

#[test]
fn test_io_serialization() {
    let json = serde_json::to_string(&Io::MemoryMapped).expect("serialize Io");
    assert_eq!(json, "\"memory-mapped\"");

    let io: Io = serde_json::from_str("\"buffered\"").expect("deserialize Io");
    assert_eq!(io, Io::Buffered);
}

#[test]
fn test_io_ordering() {
    assert!(Io::Buffered < Io::MemoryMapped);
}
