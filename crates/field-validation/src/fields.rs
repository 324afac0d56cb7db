// File: src/fields.rs
// Purpose: Ready-made fields built on the shared predicates

use crate::config::MessagesConfig;
use crate::field::ValidationField;
use crate::value::Value;
use std::fmt;

/// Passes when the value is a string accepted by the email grammar.
#[derive(Debug, Clone)]
pub struct EmailField {
    value: Value,
    message: String,
}

impl EmailField {
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_config(value, &MessagesConfig::default())
    }

    pub fn with_config(value: impl Into<Value>, messages: &MessagesConfig) -> Self {
        Self::with_message(value, messages.email.clone())
    }

    pub fn with_message(value: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl ValidationField for EmailField {
    fn value(&self) -> &Value {
        &self.value
    }

    fn on_validate(&self) -> bool {
        self.is_email()
    }

    fn on_fail(&self) -> String {
        self.message.clone()
    }
}

/// Passes when the value is a string of ASCII digits.
#[derive(Debug, Clone)]
pub struct IntegerStringField {
    value: Value,
    message: String,
}

impl IntegerStringField {
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_config(value, &MessagesConfig::default())
    }

    pub fn with_config(value: impl Into<Value>, messages: &MessagesConfig) -> Self {
        Self::with_message(value, messages.integer_string.clone())
    }

    pub fn with_message(value: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl ValidationField for IntegerStringField {
    fn value(&self) -> &Value {
        &self.value
    }

    fn on_validate(&self) -> bool {
        self.is_integer_string()
    }

    fn on_fail(&self) -> String {
        self.message.clone()
    }
}

/// Passes when the value is a string drawn from `charset`.
#[derive(Debug, Clone)]
pub struct CharsetField {
    value: Value,
    charset: String,
    case_sensitive: bool,
    message: String,
}

impl CharsetField {
    /// Case-sensitive by default.
    pub fn new(value: impl Into<Value>, charset: impl Into<String>) -> Self {
        Self::with_config(value, charset, &MessagesConfig::default())
    }

    pub fn with_config(
        value: impl Into<Value>,
        charset: impl Into<String>,
        messages: &MessagesConfig,
    ) -> Self {
        let charset = charset.into();
        let message = messages.charset_message(&charset);
        Self {
            value: value.into(),
            charset,
            case_sensitive: true,
            message,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl ValidationField for CharsetField {
    fn value(&self) -> &Value {
        &self.value
    }

    fn on_validate(&self) -> bool {
        self.is_under_charset(&self.charset, self.case_sensitive)
    }

    fn on_fail(&self) -> String {
        self.message.clone()
    }
}

/// A field whose hooks are closures.
///
/// ```
/// use field_validation::{FnField, ValidationField, Value};
///
/// let age = FnField::new(
///     17,
///     |v: &Value| v.as_f64().is_some_and(|n| n >= 18.0),
///     |_: &Value| "Must be an adult.".to_string(),
/// );
/// assert_eq!(age.validate().as_deref(), Some("Must be an adult."));
/// ```
pub struct FnField<V, F>
where
    V: Fn(&Value) -> bool,
    F: Fn(&Value) -> String,
{
    value: Value,
    on_validate: V,
    on_fail: F,
}

impl<V, F> FnField<V, F>
where
    V: Fn(&Value) -> bool,
    F: Fn(&Value) -> String,
{
    pub fn new(value: impl Into<Value>, on_validate: V, on_fail: F) -> Self {
        Self {
            value: value.into(),
            on_validate,
            on_fail,
        }
    }
}

impl<V, F> ValidationField for FnField<V, F>
where
    V: Fn(&Value) -> bool,
    F: Fn(&Value) -> String,
{
    fn value(&self) -> &Value {
        &self.value
    }

    fn on_validate(&self) -> bool {
        (self.on_validate)(&self.value)
    }

    fn on_fail(&self) -> String {
        (self.on_fail)(&self.value)
    }
}

impl<V, F> fmt::Debug for FnField<V, F>
where
    V: Fn(&Value) -> bool,
    F: Fn(&Value) -> String,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnField").field("value", &self.value).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_field_default_message() {
        let field = EmailField::new("not-an-email");
        assert_eq!(field.validate(), Some(MessagesConfig::default().email));
    }

    #[test]
    fn test_email_field_custom_message() {
        let field = EmailField::with_message("x", "bad email");
        assert_eq!(field.validate().as_deref(), Some("bad email"));
    }

    #[test]
    fn test_charset_field_builder() {
        let strict = CharsetField::new("abc", "ABC");
        assert!(strict.validate().is_some());

        let relaxed = CharsetField::new("abc", "ABC").case_insensitive();
        assert_eq!(relaxed.validate(), None);
    }

    #[test]
    fn test_charset_field_message_names_charset() {
        let field = CharsetField::new("xyz", "abc");
        assert_eq!(
            field.validate().as_deref(),
            Some("Expected only the characters: abc")
        );

        let field = CharsetField::new("xyz", "abc").message("letters a to c");
        assert_eq!(field.validate().as_deref(), Some("letters a to c"));
    }

    #[test]
    fn test_fn_field_sees_value() {
        let field = FnField::new(
            "hello",
            |v: &Value| v.as_str().is_some_and(|s| s.len() > 10),
            |v: &Value| format!("too short: {}", v.as_str().unwrap_or_default()),
        );
        assert_eq!(field.validate().as_deref(), Some("too short: hello"));
    }
}
