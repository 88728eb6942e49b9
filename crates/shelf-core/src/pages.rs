//! Page count coercion
//!
//! Page counts typed into a form are coerced, not validated: leading
//! whitespace is skipped, an optional sign and the leading decimal digits are
//! read, and anything after them is ignored. `"328 pages"` becomes 328 and
//! `"-5"` stays -5. Input with no leading digits does not coerce.

/// Coerce user input into a page count
pub fn coerce_pages(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(&b'-') => (true, &trimmed[1..]),
        Some(&b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
