//! Validation, parsing and formatting of Chilean RUT numbers.
//!
//! ```
//! use chilean_rut::{format_rut, is_valid_rut, FormatOptions};
//!
//! assert!(is_valid_rut("12.345.678-5"));
//! assert_eq!(format_rut("123456785", FormatOptions::default()), "12.345.678-5");
//! ```

pub mod rut;

pub use rut::*;
