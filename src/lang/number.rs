use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Parse an integer literal.
///
/// Accepts decimal, `0x` hex and `0b` binary with an optional leading `-`
/// and `_` separators anywhere after the prefix. Letter digits are case
/// insensitive.
pub fn parse_number(s: &str) -> Result<i64> {
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let lower = s.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(error!(BadNumber));
    }
    match i64::from_str_radix(&digits, radix) {
        Ok(n) if negative => Ok(-n),
        Ok(n) => Ok(n),
        Err(_) => Err(error!(Overflow)),
    }
}

/// True when a token should be read as a literal rather than a name.
pub fn is_number_like(s: &str) -> bool {
    match s.chars().next() {
        Some('-') => true,
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}
