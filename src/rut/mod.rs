//! Root module for RUT handling.
//! Exposes the public API: cleaning, checksum, parsing, validation and formatting.

mod checksum;
mod clean;
mod constants;
mod format;
mod parse;
mod validate;

// Re-export commonly used types and functions
pub use checksum::calculate_verification_digit;
pub use clean::{clean_rut, clean_rut_value};
pub use constants::*;
pub use format::{format_rut, format_rut_partial, FormatOptions};
pub use parse::{parse_rut, ParsedRut};
pub use validate::{
    is_valid_rut, is_valid_rut_value, validate_rut, validate_rut_value, Rut, ValidationError,
    ValidationResult,
};
