//! String classification and conversion helpers.
//!
//! Whitespace follows the C locale `isspace` set: space, horizontal tab,
//! line feed, vertical tab, form feed and carriage return. Nothing outside
//! ASCII is ever treated as whitespace.

/// Returns true if `c` is one of the six ASCII whitespace characters.
///
/// Unlike [`char::is_ascii_whitespace`], vertical tab (`\x0B`) is included.
///
/// # Example
///
/// ```
/// use arith_util::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\x0B'));
/// assert!(!is_space('\u{00A0}'));
/// ```
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Parses a leading base-10 integer, yielding 0 when no digits are found.
///
/// Leading whitespace is skipped and a single `+` or `-` sign is accepted.
/// Parsing stops at the first non-digit. Values that do not fit in an `i64`
/// saturate at `i64::MAX` or `i64::MIN`.
///
/// # Example
///
/// ```
/// use arith_util::parse_int_or_zero;
///
/// assert_eq!(parse_int_or_zero("123abc"), 123);
/// assert_eq!(parse_int_or_zero("  -7"), -7);
/// assert_eq!(parse_int_or_zero("abc"), 0);
/// assert_eq!(parse_int_or_zero(""), 0);
/// ```
pub fn parse_int_or_zero(s: &str) -> i64 {
    let mut chars = s.chars().skip_while(|&c| is_space(c)).peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        },
        Some('+') => {
            chars.next();
            false
        },
        _ => false,
    };

    let mut value: i64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        // Accumulate on the negative side so i64::MIN stays representable.
        value = value
            .saturating_mul(10)
            .saturating_sub(i64::from(digit));
    }

    if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i64::MAX)
    }
}

/// Returns true if `s` is empty or made up entirely of whitespace.
///
/// # Example
///
/// ```
/// use arith_util::is_null_or_whitespace;
///
/// assert!(is_null_or_whitespace(""));
/// assert!(is_null_or_whitespace(" \t\r\n"));
/// assert!(!is_null_or_whitespace(" 1 "));
/// ```
pub fn is_null_or_whitespace(s: &str) -> bool {
    s.chars().all(is_space)
}
