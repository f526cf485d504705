//! Full RUT validation: cleaning, length gates, shape and checksum.

use std::str::FromStr;

use derive_more::derive::Display;
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::rut::{
    calculate_verification_digit, clean_rut, format::render, parse_rut, FormatOptions, ParsedRut,
    MAX_RUT_LENGTH, MIN_RUT_LENGTH,
};

/// Reasons a RUT can be rejected, in the order the checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumIter)]
pub enum ValidationError {
    #[error("RUT is required")]
    Required,
    #[error("RUT is too short")]
    TooShort,
    #[error("RUT is too long")]
    TooLong,
    #[error("Invalid RUT format")]
    InvalidFormat,
    #[error("Invalid verification digit")]
    InvalidVerificationDigit,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wrapper type for a RUT that has been validated.
///
/// Holds the cleaned form (digits followed by the verification digit, e.g.
/// `123456785`). It can only be built through validation, so the checksum of
/// any instance is correct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut(String);

impl Rut {
    /// Numeric body, without the verification digit
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    pub fn verification_digit(&self) -> char {
        char::from(self.0.as_bytes()[self.0.len() - 1])
    }

    /// Renders the RUT with the given options, e.g. `12.345.678-5` by default
    pub fn format(&self, options: FormatOptions) -> String {
        render(self.body(), Some(self.verification_digit()), options)
    }
}

impl TryFrom<&str> for Rut {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        check(raw).inspect_err(|err| debug!("RUT rejected: {}", err))
    }
}

impl TryFrom<String> for Rut {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Rut::try_from(raw.as_str())
    }
}

impl FromStr for Rut {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Rut::try_from(raw)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.0
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of [`validate_rut`]. Exactly one of `rut` and `error` is set.
///
/// Serializes as `{"isValid":true,"rut":"123456785"}` or
/// `{"isValid":false,"error":"RUT is too short"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<Rut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl From<Result<Rut, ValidationError>> for ValidationResult {
    fn from(result: Result<Rut, ValidationError>) -> Self {
        match result {
            Ok(rut) => Self { is_valid: true, rut: Some(rut), error: None },
            Err(error) => Self { is_valid: false, rut: None, error: Some(error) },
        }
    }
}

/// Validates a RUT, reporting why it was rejected.
///
/// # Example
/// ```
/// use chilean_rut::{validate_rut, ValidationError};
///
/// let result = validate_rut("12.345.678-5");
/// assert!(result.is_valid);
/// assert_eq!(result.rut.unwrap().as_ref(), "123456785");
///
/// let result = validate_rut("12345678-0");
/// assert_eq!(result.error, Some(ValidationError::InvalidVerificationDigit));
/// ```
pub fn validate_rut(raw: &str) -> ValidationResult {
    Rut::try_from(raw).into()
}

/// Returns true if the RUT is valid, false otherwise
pub fn is_valid_rut(raw: &str) -> bool {
    validate_rut(raw).is_valid
}

/// Same as [`validate_rut`] for loosely typed input. Anything that is not a
/// JSON string is rejected as missing.
pub fn validate_rut_value(raw: &Value) -> ValidationResult {
    match raw {
        Value::String(s) => validate_rut(s),
        _ => Err(ValidationError::Required).into(),
    }
}

pub fn is_valid_rut_value(raw: &Value) -> bool {
    validate_rut_value(raw).is_valid
}

/// Whether the verification digit matches the body
pub(crate) fn has_valid_checksum(parsed: &ParsedRut) -> bool {
    calculate_verification_digit(&parsed.body) == parsed.verification_digit
}

fn check(raw: &str) -> Result<Rut, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    let cleaned = clean_rut(raw);

    // Cleaned RUTs are ASCII, so byte length is character count
    if cleaned.len() < MIN_RUT_LENGTH {
        return Err(ValidationError::TooShort);
    }

    if cleaned.len() > MAX_RUT_LENGTH {
        return Err(ValidationError::TooLong);
    }

    let parsed = parse_rut(&cleaned).ok_or(ValidationError::InvalidFormat)?;

    if !has_valid_checksum(&parsed) {
        return Err(ValidationError::InvalidVerificationDigit);
    }

    Ok(Rut(cleaned))
}
