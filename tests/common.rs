//! Integration tests for umbra-common crate.

use umbra_common::{BytePos, Position, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    assert!(Span::from_usize(5, 5).is_empty());
    assert!(!Span::from_usize(5, 10).is_empty());
    assert!(Span::DUMMY.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_pos_conversions() {
    let pos = BytePos::from(10usize);
    assert_eq!(pos, BytePos(10));
    assert_eq!(usize::from(pos), 10);
}

#[test]
fn test_position_starts_at_one_one() {
    assert_eq!(Position::START, Position::new(1, 1));
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn test_position_advance_and_newline() {
    let pos = Position::START.advance().advance();
    assert_eq!(pos, Position::new(1, 3));

    let next = pos.newline();
    assert_eq!(next, Position::new(2, 1));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(12, 7).to_string(), "12:7");
    assert_eq!(format!("{:?}", Position::new(3, 4)), "3:4");
}

#[test]
fn test_position_ordering() {
    assert!(Position::new(1, 9) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 2));
}
