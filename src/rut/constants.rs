//! Constants used throughout the RUT pipeline

/// Raw inputs are truncated to this many characters before cleaning
pub const MAX_INPUT_LENGTH: usize = 50;
/// Minimum length of a cleaned RUT (one body digit plus the verification digit)
pub const MIN_RUT_LENGTH: usize = 2;
/// Maximum length of a cleaned RUT (eight body digits plus the verification digit)
pub const MAX_RUT_LENGTH: usize = 9;
