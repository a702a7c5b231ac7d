//! Size parsing for sized elementary type names.

/// Parse a decimal size without sign or leading zeros.
///
/// Returns `None` for empty input, non-digits, a leading zero (other than
/// `"0"` itself) and values above `u16::MAX`.
#[inline]
pub(crate) fn parse_size(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Parse the `MxN` suffix of a fixed-point type.
///
/// `M` is a bit width in `8..=256` divisible by 8; `N` is in `0..=80`.
pub(crate) fn parse_fixed_sizes(s: &str) -> Option<(u16, u8)> {
    let (m, n) = s.split_once('x')?;
    let bits = parse_size(m)?;
    let digits = parse_size(n)?;
    if !(8..=256).contains(&bits) || bits % 8 != 0 || digits > 80 {
        return None;
    }
    Some((bits, u8::try_from(digits).ok()?))
}
