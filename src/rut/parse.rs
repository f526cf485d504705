//! Structural split of a cleaned RUT into body and verification digit.

use std::fmt;

use crate::rut::MIN_RUT_LENGTH;

/// A cleaned RUT split into its numeric body and trailing verification digit.
///
/// Only the shape is guaranteed: the body is non-empty and all digits, the
/// verification digit is `0`-`9` or `K`. The checksum has not been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedRut {
    pub body: String,
    pub verification_digit: char,
}

/// Splits a cleaned RUT into body and verification digit.
///
/// Returns `None` when the input is shorter than two characters, when the body
/// holds anything but digits, or when the last character is not a digit or `K`.
pub fn parse_rut(cleaned: &str) -> Option<ParsedRut> {
    if cleaned.chars().count() < MIN_RUT_LENGTH {
        return None;
    }

    let mut chars = cleaned.chars();
    let verification_digit = chars.next_back()?;
    let body = chars.as_str();

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if !is_verification_symbol(verification_digit) {
        return None;
    }

    Some(ParsedRut {
        body: body.to_owned(),
        verification_digit,
    })
}

/// Whether `c` is one of the eleven symbols a verification digit can take
pub(crate) fn is_verification_symbol(c: char) -> bool {
    c.is_ascii_digit() || c == 'K'
}

/// Renders the compact form, e.g. `123456785`
impl fmt::Display for ParsedRut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body, self.verification_digit)
    }
}
