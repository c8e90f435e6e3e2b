use super::*;

#[test]
fn new_span_is_not_empty() {
    let span = Span::new(10, 20);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn from_range_keeps_small_offsets() {
    assert_eq!(Span::from_range(50..100), Span::new(50, 100));
}

#[test]
fn from_range_clamps_oversized_offsets() {
    let large = u32::MAX as usize + 5;
    assert_eq!(Span::from_range(3..large), Span::new(3, u32::MAX));
    assert_eq!(Span::from_range(large..large), Span::point(u32::MAX));
}

#[test]
fn display_and_debug_match() {
    let span = Span::new(3, 9);
    assert_eq!(span.to_string(), "3..9");
    assert_eq!(format!("{span:?}"), "3..9");
}
