// File: src/field.rs
// Purpose: Validation field trait (template method over the held value)

use crate::charset;
use crate::email;
use crate::value::Value;

/// A single validated value.
///
/// Implementors hold a [`Value`] and decide whether it passes
/// ([`on_validate`](Self::on_validate)) and what to say when it does not
/// ([`on_fail`](Self::on_fail)). [`validate`](Self::validate) ties the two
/// together. The `is_*` predicates are available for composing
/// `on_validate` and never fail; a value of the wrong shape is just `false`.
///
/// ```
/// use field_validation::{ValidationField, Value};
///
/// struct CodeField(Value);
///
/// impl ValidationField for CodeField {
///     fn value(&self) -> &Value {
///         &self.0
///     }
///
///     fn on_validate(&self) -> bool {
///         self.is_string() && self.value().as_str().is_some_and(|s| s.trim().len() == 4)
///     }
///
///     fn on_fail(&self) -> String {
///         "Expected a 4 character code.".to_string()
///     }
/// }
///
/// assert_eq!(CodeField("1234".into()).validate(), None);
/// assert!(CodeField(12.into()).validate().is_some());
/// ```
pub trait ValidationField {
    /// The value under validation.
    fn value(&self) -> &Value;

    /// Pass/fail decision.
    fn on_validate(&self) -> bool;

    /// Failure message. Only called when [`on_validate`](Self::on_validate)
    /// returned false.
    fn on_fail(&self) -> String;

    /// `None` when the value is valid, otherwise the failure message.
    fn validate(&self) -> Option<String> {
        if self.on_validate() {
            return None;
        }

        let message = self.on_fail();
        tracing::debug!(kind = self.value().kind(), %message, "field failed validation");
        Some(message)
    }

    fn is_string(&self) -> bool {
        self.value().is_string()
    }

    fn is_number(&self) -> bool {
        self.value().is_number()
    }

    fn is_boolean(&self) -> bool {
        self.value().is_boolean()
    }

    /// Safe integer: see [`Value::is_safe_integer`].
    fn is_integer(&self) -> bool {
        self.value().is_safe_integer()
    }

    fn is_integer_string(&self) -> bool {
        self.value().as_str().is_some_and(charset::is_integer_string)
    }

    fn is_under_charset(&self, charset: &str, case_sensitive: bool) -> bool {
        self.value()
            .as_str()
            .is_some_and(|s| charset::is_under_charset(s, charset, case_sensitive))
    }

    fn is_date(&self) -> bool {
        self.value().is_date()
    }

    fn is_null(&self) -> bool {
        self.value().is_null()
    }

    fn is_undefined(&self) -> bool {
        self.value().is_undefined()
    }

    fn is_array(&self) -> bool {
        self.value().is_array()
    }

    fn is_object(&self) -> bool {
        self.value().is_object()
    }

    fn is_email(&self) -> bool {
        self.value().as_str().is_some_and(email::is_email)
    }
}
