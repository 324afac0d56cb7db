//! Character set scanners

/// Characters allowed anywhere in an email address, after case folding.
pub const EMAIL_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz0123456789@.-_";

pub const DIGITS: &str = "0123456789";

/// Returns true when every character of `value` appears in `charset`.
///
/// With `case_sensitive` false both sides are lowercased before comparing.
/// An empty value is trivially under any charset.
pub fn is_under_charset(value: &str, charset: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return value.chars().all(|c| charset.contains(c));
    }

    let charset = charset.to_lowercase();
    value.to_lowercase().chars().all(|c| charset.contains(c))
}

/// Returns true when `value` is made only of ASCII digits.
///
/// No sign, decimal point or exponent: `"10e+1"` and `"-3"` are rejected.
/// The empty string passes.
pub fn is_integer_string(value: &str) -> bool {
    is_under_charset(value, DIGITS, true)
}
