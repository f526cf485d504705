//! Display formatting of RUTs, for committed values and for input being typed.

use serde::{Deserialize, Serialize};

use crate::rut::{clean_rut, parse::is_verification_symbol, parse_rut, validate::has_valid_checksum};

/// Options for rendering a RUT.
///
/// Every option defaults to `true`, giving `12.345.678-5`. Missing fields fall
/// back to their default when deserializing, so `{"dots": false}` only turns
/// the dots off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Group the body in thousands with `.`
    pub dots: bool,
    /// Put a `-` between the body and the verification digit
    pub dash: bool,
    /// Render the `K` verification digit in uppercase
    pub uppercase: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            dots: true,
            dash: true,
            uppercase: true,
        }
    }
}

impl FormatOptions {
    pub fn with_dots(mut self, dots: bool) -> Self {
        self.dots = dots;
        self
    }

    pub fn with_dash(mut self, dash: bool) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

/// Formats a RUT after checking it.
///
/// Returns an empty string if the input does not clean to a well-shaped RUT
/// or if its verification digit is wrong.
///
/// # Example
/// ```
/// use chilean_rut::{format_rut, FormatOptions};
///
/// assert_eq!(format_rut("123456785", FormatOptions::default()), "12.345.678-5");
/// assert_eq!(format_rut("123456785", FormatOptions::default().with_dots(false)), "12345678-5");
/// assert_eq!(format_rut("12345678-0", FormatOptions::default()), "");
/// ```
pub fn format_rut(rut: &str, options: FormatOptions) -> String {
    match parse_rut(&clean_rut(rut)) {
        Some(parsed) if has_valid_checksum(&parsed) => {
            render(&parsed.body, Some(parsed.verification_digit), options)
        }
        _ => String::new(),
    }
}

/// Formats whatever has been typed so far, without checking it.
///
/// The last character is taken as a tentative verification digit as soon as
/// there are at least two characters.
///
/// # Example
/// ```
/// use chilean_rut::{format_rut_partial, FormatOptions};
///
/// assert_eq!(format_rut_partial("12345", FormatOptions::default()), "1.234-5");
/// assert_eq!(format_rut_partial("1", FormatOptions::default()), "1");
/// ```
pub fn format_rut_partial(rut: &str, options: FormatOptions) -> String {
    let cleaned = clean_rut(rut);

    let mut chars = cleaned.chars();
    match chars.next_back() {
        None => String::new(),
        Some(last) if !chars.as_str().is_empty() && is_verification_symbol(last) => {
            render(chars.as_str(), Some(last), options)
        }
        Some(_) => render(&cleaned, None, options),
    }
}

/// Shared rendering of a body and an optional verification digit
pub(crate) fn render(body: &str, verification_digit: Option<char>, options: FormatOptions) -> String {
    let mut formatted = if options.dots {
        group_thousands(body)
    } else {
        body.to_owned()
    };

    if let Some(digit) = verification_digit {
        if options.dash {
            formatted.push('-');
        }
        formatted.push(if options.uppercase {
            digit
        } else {
            digit.to_ascii_lowercase()
        });
    }

    formatted
}

/// Inserts a `.` before every group of three characters counted from the right
fn group_thousands(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> FormatOptions {
        FormatOptions::default()
    }

    mod format_tests {
        use super::*;

        #[test]
        fn test_default_options() {
            let cases = vec![
                ("123456785", "12.345.678-5"),
                ("10000013K", "10.000.013-K"),
                ("12.345.678-5", "12.345.678-5"),
                ("1-9", "1-9"),
                ("7.654.321-6", "7.654.321-6"),
            ];

            for (input, expected) in cases {
                assert_eq!(format_rut(input, defaults()), expected, "Wrong format of '{}'", input);
            }
        }

        #[test]
        fn test_custom_options() {
            assert_eq!(format_rut("123456785", defaults().with_dots(false)), "12345678-5");
            assert_eq!(format_rut("123456785", defaults().with_dash(false)), "12.345.6785");
            assert_eq!(format_rut("10000013K", defaults().with_uppercase(false)), "10.000.013-k");
            assert_eq!(
                format_rut("123456785", defaults().with_dots(false).with_dash(false)),
                "123456785"
            );
        }

        #[test]
        fn test_invalid_input() {
            let invalid_cases = vec!["12345678-0", "", "invalid", "1", "1K5", "KK"];

            for input in invalid_cases {
                assert_eq!(format_rut(input, defaults()), "", "Invalid '{}' was formatted", input);
            }
        }
    }

    mod partial_tests {
        use super::*;

        #[test]
        fn test_as_user_types() {
            let cases = vec![
                ("1", "1"),
                ("12", "1-2"),
                ("123", "12-3"),
                ("1234", "123-4"),
                ("12345", "1.234-5"),
                ("12345678", "1.234.567-8"),
                ("123456789", "12.345.678-9"),
                ("12.345.678-0", "12.345.678-0"),
            ];

            for (input, expected) in cases {
                assert_eq!(format_rut_partial(input, defaults()), expected,
                           "Wrong partial format of '{}'", input);
            }
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(format_rut_partial("", defaults()), "");
            assert_eq!(format_rut_partial("-.", defaults()), "");
        }

        #[test]
        fn test_single_k_is_body() {
            assert_eq!(format_rut_partial("k", defaults()), "K");
        }

        #[test]
        fn test_options() {
            assert_eq!(format_rut_partial("10000013K", defaults().with_dots(false)), "10000013-K");
            assert_eq!(format_rut_partial("10000013K", defaults().with_uppercase(false)), "10.000.013-k");
            assert_eq!(format_rut_partial("12345", defaults().with_dash(false)), "1.2345");
        }
    }

    mod options_tests {
        use super::*;

        #[test]
        fn test_defaults_merge() {
            let options: FormatOptions = serde_json::from_str(r#"{"dots": false}"#).unwrap();
            assert_eq!(options, defaults().with_dots(false));

            let options: FormatOptions = serde_json::from_str("{}").unwrap();
            assert_eq!(options, defaults());
        }

        #[test]
        fn test_grouping() {
            let cases = vec![
                ("", ""),
                ("1", "1"),
                ("123", "123"),
                ("1234", "1.234"),
                ("123456", "123.456"),
                ("1234567", "1.234.567"),
            ];

            for (body, expected) in cases {
                assert_eq!(group_thousands(body), expected, "Wrong grouping of '{}'", body);
            }
        }
    }
}
