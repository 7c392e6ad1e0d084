use std::path::PathBuf;

use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);
}

#[test]
fn test_get_line_byte_positions_trailing_new_line() {
    let byte_positions = super::get_line_byte_positions("a\n");
    assert_eq!(byte_positions, vec![0..2, 2..2]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "test file";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_mapped_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
    assert_eq!(source_file.get_location(0), Some(Location::start()));
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::from_string(PathBuf::from("<test>"), "ab\n\tcé d".to_string());

    assert_eq!(
        source_file.get_location(1),
        Some(Location { line: 1, column: 2 })
    );
    assert_eq!(
        source_file.get_location(2),
        Some(Location { line: 1, column: 3 })
    );
    assert_eq!(
        source_file.get_location(4),
        Some(Location { line: 2, column: 2 })
    );

    // `é` takes two bytes but a single column
    assert_eq!(
        source_file.get_location(8),
        Some(Location { line: 2, column: 5 })
    );
    assert_eq!(source_file.get_location(6), None);

    // end of file
    assert_eq!(
        source_file.get_location(source_file.content().len()),
        Some(Location { line: 2, column: 6 })
    );
}

#[test]
fn test_iterator_location() {
    let source_file = SourceFile::from_string(PathBuf::from("<test>"), "a\nbc".to_string());
    let mut iterator = source_file.iter();

    assert_eq!(iterator.location(), Location { line: 1, column: 1 });
    iterator.next();
    assert_eq!(iterator.location(), Location { line: 1, column: 2 });
    iterator.next();
    assert_eq!(iterator.location(), Location { line: 2, column: 1 });
    iterator.next();
    iterator.next();
    assert_eq!(iterator.location(), Location { line: 2, column: 3 });
    assert_eq!(iterator.byte_index(), 4);
    assert_eq!(iterator.next(), None);
}

#[test]
fn test_span() {
    let source_file = SourceFile::from_string(PathBuf::from("<test>"), "int x;".to_string());

    let keyword = Span::new(source_file.clone(), 0, 3).unwrap();
    let semicolon = Span::new(source_file.clone(), 5, 6).unwrap();

    assert_eq!(keyword.str(), "int");
    assert_eq!(keyword.join(&semicolon).unwrap().str(), "int x;");
    assert_eq!(semicolon.end_location(), Location { line: 1, column: 7 });
    assert!(semicolon.join(&keyword).is_none());
    assert!(Span::new(source_file.clone(), 4, 7).is_none());
    assert_eq!(Span::to_end(source_file, 6).unwrap().str(), "");
}
