//! # field-validation
//!
//! Simple field validation around a template method.
//!
//! A field holds one dynamically-shaped [`Value`] and implements
//! [`ValidationField`]: `on_validate` decides, `on_fail` explains, and
//! `validate` returns `None` on success or the failure message.
//!
//! Built-in predicates cover primitive shapes (string, number, boolean, safe
//! integer, date, null, undefined, array, object), digit-only strings,
//! charset membership and a fixed ASCII email grammar.
//!
//! ```
//! use field_validation::{EmailField, ValidationField};
//!
//! assert_eq!(EmailField::new("john.doe@example.com").validate(), None);
//! assert!(EmailField::new("@@-.com").validate().is_some());
//! ```

pub mod charset;
pub mod config;
pub mod email;
pub mod field;
pub mod fields;
pub mod report;
pub mod value;

pub use charset::{is_integer_string, is_under_charset, EMAIL_CHARSET};
pub use config::{MessagesConfig, ValidationConfig};
pub use email::{check_email, is_email, EmailError};
pub use field::ValidationField;
pub use fields::{CharsetField, EmailField, FnField, IntegerStringField};
pub use report::ValidationReport;
pub use value::Value;
