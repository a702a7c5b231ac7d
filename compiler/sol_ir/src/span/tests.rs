use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_try_new_rejects_inverted() {
    assert_eq!(
        Span::try_new(20, 10),
        Err(SpanError::Inverted { start: 20, end: 10 })
    );
    assert_eq!(Span::try_new(7, 7), Ok(Span::new(7, 7)));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(0, 100);
    assert!(outer.contains_span(Span::new(10, 20)));
    assert!(outer.contains_span(outer));
    assert!(!outer.contains_span(Span::new(90, 101)));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::Inverted { start: 5, end: 1 }.to_string();
    assert!(msg.contains("before span start 5"));
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100:200");
}

#[test]
fn test_span_default() {
    assert_eq!(Span::default(), Span::DUMMY);
    assert_eq!(Span::DUMMY.to_range(), 0..0);
}

