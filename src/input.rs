//! Reading user input as a non-negative number, and echoing it back.

use crate::errors::InputError;

/// Character repeated under the echoed input.
pub const MARKER: char = '^';

/// Parse a line of input as a non-negative integer.
///
/// Surrounding whitespace and a single leading `+` or `-` are accepted;
/// leading zeros are dropped. `-0` reads as zero, any other negative value
/// is rejected.
pub fn parse_number(raw: &str) -> Result<u64, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let (negative, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(text.to_string()));
    }

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(InputError::Negative(text.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| InputError::TooLarge(text.to_string()))
}

/// A run of markers as wide as the raw input.
pub fn marker(raw: &str) -> String {
    MARKER.to_string().repeat(raw.chars().count())
}
