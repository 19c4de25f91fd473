//! Numeric Parsing Helpers
//!
//! Zero-allocation parsing utilities for numeric literals with underscore separators.

/// Parse a non-negative integer skipping underscores without allocation.
///
/// Returns `None` if a digit is invalid for `radix` or the value does not fit `i64`.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str, radix: u32) -> Option<i64> {
    let mut result: i64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(i64::from(radix))?;
        result = result.checked_add(i64::from(digit))?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_skip_underscores() {
        assert_eq!(parse_int_skip_underscores("123", 10), Some(123));
        assert_eq!(parse_int_skip_underscores("1_000_000", 10), Some(1_000_000));
        assert_eq!(parse_int_skip_underscores("___1___", 10), Some(1));
    }

    #[test]
    fn test_parse_int_radixes() {
        assert_eq!(parse_int_skip_underscores("dead_beef", 16), Some(0xdead_beef));
        assert_eq!(parse_int_skip_underscores("1111_0000", 2), Some(240));
        assert_eq!(parse_int_skip_underscores("777", 8), Some(511));
    }

    #[test]
    fn test_parse_int_overflow() {
        assert_eq!(parse_int_skip_underscores("9223372036854775807", 10), Some(i64::MAX));
        assert_eq!(parse_int_skip_underscores("9223372036854775808", 10), None);
        assert_eq!(parse_int_skip_underscores("1_0000_0000_0000_0000", 16), None);
    }
}
