//! # code-string
//!
//! Derives every common naming convention from one identifier written in
//! *dash-case*.
//!
//! - `dash-case` (lowercased input)
//! - `snake_case`
//! - `CONSTANT_CASE`
//! - `PascalCase`
//! - `camelCase`
//!
//! Uppercase runs inside a token are kept as they are, so acronyms survive the
//! conversion:
//!
//! ```
//! use code_string::CaseConverter;
//!
//! let name = CaseConverter::new("get-CPF");
//! assert_eq!(name.camel(), "getCPF");
//! assert_eq!(name.pascal(), "GetCPF");
//! assert_eq!(name.constant(), "GET_CPF");
//! ```
//!
//! The input is not validated or normalized. Anything that is not dash-case
//! still goes through the same mechanical rules.

pub mod convert;
pub mod converter;
pub mod style;

pub use convert::{to_camel, to_constant, to_dash, to_pascal, to_snake};
pub use converter::{CaseConverter, CaseRepresentations};
pub use style::{CaseStyle, ParseCaseStyleError};
