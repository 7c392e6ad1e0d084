use std::path::PathBuf;

use super::{Message, Severity, SourceCodeDisplay};
use crate::source_file::{SourceFile, Span};

#[test]
fn message_contains_header_and_text() {
    let message = Message::new(Severity::Error, "something went wrong").to_string();

    assert!(message.contains("[error]:"));
    assert!(message.contains("something went wrong"));

    let warning = Message::new(Severity::Warning, 42).to_string();
    assert!(warning.contains("[warning]:"));
    assert!(warning.contains("42"));
}

#[test]
fn source_code_display_points_at_span() {
    let source_file = SourceFile::from_string(
        PathBuf::from("input.c"),
        "int y;\nint x 5;\ny = 1;".to_string(),
    );
    let span = Span::new(source_file, 13, 14).unwrap();
    assert_eq!(span.str(), "5");

    let display = SourceCodeDisplay::new(&span, Some("expected `;`")).to_string();

    assert!(display.contains("input.c:2:7"));
    assert!(display.contains("int y;"));
    assert!(display.contains("int x "));
    assert!(display.contains("y = 1;"));
    assert!(display.contains("expected `;`"));
    assert!(display.contains('^'));
}

#[test]
fn source_code_display_at_end_of_file() {
    let source_file = SourceFile::from_string(PathBuf::from("input.c"), "int x".to_string());
    let span = Span::to_end(source_file, 5).unwrap();

    let display = SourceCodeDisplay::new(&span, Option::<i32>::None).to_string();

    assert!(display.contains("input.c:1:6"));
    assert!(display.contains("int x"));
    assert!(!display.contains("help"));
}
