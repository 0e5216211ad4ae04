//! Phone number grouping applied while the user types

/// Longest phone number the form accepts, in digits
pub const MAX_PHONE_DIGITS: usize = 11;

/// Group raw phone input into a display string.
///
/// Non-digits are dropped and the result is cut to eleven digits, then:
/// fewer than 4 digits stay as typed, up to 6 become `ddd-rest`, up to 10
/// become `ddd-ddd-rest` and exactly 11 become `ddd-dddd-dddd`.
pub fn format(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    // ASCII digits only, so byte slicing is char slicing
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        7..=10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

/// Remove the separators a user may type between digit groups
pub fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | '.' | '(' | ')'))
        .collect()
}
