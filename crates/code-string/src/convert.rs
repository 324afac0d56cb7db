//! Pure conversion functions, one per case style.
//!
//! These recompute on every call. [`CaseConverter`](crate::CaseConverter)
//! wraps them with a per-instance cache.

/// Token separator of the canonical dash-case form.
pub const SEPARATOR: char = '-';

/// `dash-case`: the whole identifier lowercased.
pub fn to_dash(value: &str) -> String {
    value.to_lowercase()
}

/// `snake_case`: separators become `_`, then lowercase.
pub fn to_snake(value: &str) -> String {
    value.replace(SEPARATOR, "_").to_lowercase()
}

/// `CONSTANT_CASE`: separators become `_`, then uppercase.
pub fn to_constant(value: &str) -> String {
    value.replace(SEPARATOR, "_").to_uppercase()
}

/// `PascalCase`: every token starts uppercase, existing uppercase is kept.
pub fn to_pascal(value: &str) -> String {
    join_tokens(value, true)
}

/// `camelCase`: like [`to_pascal`], except the first token's first character
/// is left as written.
pub fn to_camel(value: &str) -> String {
    join_tokens(value, false)
}

/// Concatenates the tokens of `value`, uppercasing the first character of each
/// token and every character that is already uppercase.
///
/// An empty token (from a leading or doubled separator) still counts as the
/// first token, so the camel exemption only ever applies to token zero.
fn join_tokens(value: &str, capitalize_first_token: bool) -> String {
    let mut result = String::with_capacity(value.len());
    let mut capitalize_head = capitalize_first_token;

    for token in value.split(SEPARATOR) {
        for (index, ch) in token.chars().enumerate() {
            if (index == 0 && capitalize_head) || is_uppercase(ch) {
                result.extend(ch.to_uppercase());
            } else {
                result.push(ch);
            }
        }

        capitalize_head = true;
    }

    result
}

/// A character counts as uppercase when uppercasing leaves it unchanged.
/// Digits and punctuation therefore count too, which is harmless since their
/// uppercase form is themselves.
fn is_uppercase(ch: char) -> bool {
    ch.to_uppercase().eq([ch])
}
