//! Signed decimal integer parsing with no leading zeros, `0` itself being the
//! sole exception (see DESIGN.md for why `0` is accepted).

use crate::error::ParseError;

/// Parses a signed decimal integer with no leading zeros (`0` itself is the
/// sole exception). Used for `.define` values, `.data` literals, immediate
/// literals, and fixed-index literals alike.
pub fn parse_integer(token: &str) -> Result<i16, ParseError> {
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1i16, rest),
        None => (1i16, token.strip_prefix('+').unwrap_or(token)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::IllegalConstantValue(token.to_string()));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseError::IllegalConstantValue(token.to_string()));
    }

    digits
        .parse::<i16>()
        .map(|v| v * sign)
        .map_err(|_| ParseError::IllegalConstantValue(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero() {
        assert_eq!(parse_integer("0"), Ok(0));
    }

    #[test]
    fn accepts_signed_values() {
        assert_eq!(parse_integer("-57"), Ok(-57));
        assert_eq!(parse_integer("+17"), Ok(17));
        assert_eq!(parse_integer("9"), Ok(9));
    }

    #[test]
    fn rejects_leading_zeros() {
        assert!(parse_integer("007").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(parse_integer("12a").is_err());
        assert!(parse_integer("").is_err());
    }
}
