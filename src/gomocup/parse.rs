//! Numeric argument parsing.

use log::trace;

/// Delimiters accepted between numbers on the wire.
pub const NUMBER_DELIMITERS: &[char] = &[',', ' ', '\t'];

/// Parse the integers in `text` separated by any of `delimiters`.
///
/// Empty tokens are skipped. Parsing stops at the first token that is not
/// a signed 64-bit integer; the numbers before it are returned.
#[must_use]
pub fn parse_numbers(text: &str, delimiters: &[char]) -> Vec<i64> {
    let mut numbers = Vec::new();
    for token in text.split(delimiters).filter(|t| !t.is_empty()) {
        match token.parse::<i64>() {
            Ok(n) => numbers.push(n),
            Err(e) => {
                trace!("stop parsing numbers at {token:?}: {e}");
                break;
            }
        }
    }
    numbers
}

/// First two numbers of `text` as an `(x, y)` pair.
#[must_use]
pub fn parse_pair(text: &str) -> Option<(i64, i64)> {
    match parse_numbers(text, NUMBER_DELIMITERS)[..] {
        [x, y, ..] => Some((x, y)),
        _ => None,
    }
}

/// A `x,y,who` line of a position block.
#[must_use]
pub fn parse_triple(text: &str) -> Option<(i64, i64, i64)> {
    match parse_numbers(text, NUMBER_DELIMITERS)[..] {
        [x, y, who] => Some((x, y, who)),
        _ => None,
    }
}
