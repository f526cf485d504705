//! Module 11 check digit computation.

use log::trace;

/// Weights applied to the body digits, starting from the least significant one.
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Calculates the verification digit for a RUT body.
///
/// Digits are read right to left and multiplied by the cycling weights
/// 2, 3, 4, 5, 6, 7, 2, 3, ... The digit is `11 - (sum mod 11)`, where 11 maps to
/// `'0'` and 10 maps to `'K'`.
///
/// The caller must pass a non-empty, all-digit body (as produced by
/// [`parse_rut`](crate::parse_rut)). Debug builds assert it; release builds count
/// any other character as zero.
///
/// # Example
/// ```
/// use chilean_rut::calculate_verification_digit;
///
/// assert_eq!(calculate_verification_digit("12345678"), '5');
/// assert_eq!(calculate_verification_digit("10000013"), 'K');
/// ```
pub fn calculate_verification_digit(body: &str) -> char {
    debug_assert!(
        !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()),
        "RUT body must be a non-empty digit string"
    );

    let sum: u32 = body
        .chars()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .map(|(c, weight)| c.to_digit(10).unwrap_or(0) * weight)
        .sum();

    let digit = match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        n => char::from_digit(n, 10).unwrap_or('0'),
    };

    trace!("Verification digit for {} is {}", body, digit);
    digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bodies() {
        let cases = vec![
            ("12345678", '5'),
            ("11111111", '1'),
            ("22222222", '2'),
            ("44444444", '4'),
            ("1", '9'),
            ("76086428", '5'),
        ];

        for (body, expected) in cases {
            assert_eq!(calculate_verification_digit(body), expected,
                       "Wrong verification digit for body {}", body);
        }
    }

    #[test]
    fn test_k_digit() {
        assert_eq!(calculate_verification_digit("10000013"), 'K');
    }

    #[test]
    fn test_zero_digit() {
        // Sum is an exact multiple of 11
        assert_eq!(calculate_verification_digit("10000004"), '0');
    }

    #[test]
    fn test_weights_restart_after_seven() {
        // Seven ones: 2+3+4+5+6+7+2 = 29, 29 mod 11 = 7, 11 - 7 = 4
        assert_eq!(calculate_verification_digit("1111111"), '4');
        // Leading zeros do not contribute
        assert_eq!(calculate_verification_digit("0001"), calculate_verification_digit("1"));
    }
}
