//! Source range markers.
//!
//! A marker is `"<start>:<end>"`: two non-negative decimal integers
//! delimiting the half-open byte range `[start, end)`.

use sol_ir::{SourceLocation, SourceName, Span};

use crate::error::SchemaReason;

/// Decode a range marker into a location in `source`.
pub fn decode_location(marker: &str, source: &SourceName) -> Result<SourceLocation, SchemaReason> {
    parse_range(marker).map(|span| SourceLocation::new(span, source.clone()))
}

/// Parse a range marker into a span.
///
/// Fails unless the marker has exactly two fields, both parse as `u32`, and
/// `end >= start`.
pub fn parse_range(marker: &str) -> Result<Span, SchemaReason> {
    let invalid = || SchemaReason::InvalidSourceRange {
        marker: marker.to_owned(),
    };

    let mut fields = marker.split(':');
    let (Some(start), Some(end), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(invalid());
    };
    let start = parse_offset(start).ok_or_else(invalid)?;
    let end = parse_offset(end).ok_or_else(invalid)?;
    Span::try_new(start, end).map_err(|_| invalid())
}

/// Digits only: `u32::from_str` would also accept a leading `+`.
fn parse_offset(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn decodes_start_and_end() {
        let source = SourceName::new("A.sol");
        let location = decode_location("10:20", &source);
        assert_eq!(location.as_ref().map(SourceLocation::start), Ok(10));
        assert_eq!(location.as_ref().map(SourceLocation::end), Ok(20));
        assert_eq!(location.as_ref().map(SourceLocation::source_name), Ok("A.sol"));
    }

    #[test]
    fn locations_share_the_source_name() {
        let source = SourceName::new("A.sol");
        let a = decode_location("0:1", &source);
        let b = decode_location("1:2", &source);
        match (a, b) {
            (Ok(a), Ok(b)) => assert!(a.source.ptr_eq(&b.source)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_markers() {
        for marker in ["10", "", ":", "10:", ":20", "1:2:3", "a:b", "-1:5", "+1:5", "1 :5", "20:10"] {
            assert_eq!(
                parse_range(marker),
                Err(SchemaReason::InvalidSourceRange {
                    marker: marker.to_owned(),
                }),
                "{marker:?}"
            );
        }
    }

    #[test]
    fn rejects_offsets_past_u32() {
        assert!(parse_range("0:4294967296").is_err());
        assert_eq!(parse_range("0:4294967295"), Ok(Span::new(0, u32::MAX)));
    }

    #[test]
    fn empty_range() {
        assert_eq!(parse_range("7:7"), Ok(Span::new(7, 7)));
    }

    proptest! {
        #[test]
        fn ordered_pairs_decode(a in 0u32..1_000_000, len in 0u32..1_000_000) {
            let marker = format!("{a}:{}", a + len);
            prop_assert_eq!(parse_range(&marker), Ok(Span::new(a, a + len)));
        }

        #[test]
        fn inverted_pairs_fail(a in 1u32..1_000_000, gap in 1u32..1_000) {
            let end = a.saturating_sub(gap);
            prop_assume!(end < a);
            let marker = format!("{a}:{end}");
            prop_assert!(parse_range(&marker).is_err());
        }

        #[test]
        fn arbitrary_text_never_panics(marker in "\\PC{0,16}") {
            let _ = parse_range(&marker);
        }
    }
}
