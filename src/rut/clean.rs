//! Reduces a raw user input to the characters that can appear in a RUT.

use serde_json::Value;

use crate::rut::MAX_INPUT_LENGTH;

/// Cleans a RUT by removing every character that is not an ASCII digit or `K`.
///
/// Inputs longer than [`MAX_INPUT_LENGTH`] characters are truncated first, so the
/// work done per call is bounded whatever the caller hands us. A surviving `k`
/// is uppercased. The result is not checked for shape.
///
/// # Example
/// ```
/// use chilean_rut::clean_rut;
///
/// assert_eq!(clean_rut("12.345.678-9"), "123456789");
/// assert_eq!(clean_rut("12345678-k"), "12345678K");
/// ```
pub fn clean_rut(input: &str) -> String {
    input
        .chars()
        .take(MAX_INPUT_LENGTH)
        .filter_map(|c| match c {
            '0'..='9' | 'K' => Some(c),
            'k' => Some('K'),
            _ => None,
        })
        .collect()
}

/// Same as [`clean_rut`] for loosely typed input. Anything that is not a JSON
/// string cleans to the empty string.
pub fn clean_rut_value(input: &Value) -> String {
    match input {
        Value::String(s) => clean_rut(s),
        _ => String::new(),
    }
}
