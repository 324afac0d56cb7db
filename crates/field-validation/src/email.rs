//! Email grammar scanner
//!
//! Accepts a fixed ASCII grammar only: one `@`, characters from
//! [`EMAIL_CHARSET`] (case-insensitive), and no doubled or mixed separators
//! inside the scanned window. No quoted local parts, IP literals or Unicode.
//!
//! The domain segment starts *at* the `@` (the `@` is part of it), and the
//! separator scan walks the first `segment.len()` characters of the whole
//! address rather than the segment itself. For addresses whose local part is
//! longer than the domain this inspects local-part characters. That behavior
//! is kept as-is; see `tests/email_tests.rs` for the observable consequences.

use crate::charset::EMAIL_CHARSET;
use thiserror::Error;

/// The grammar rule that rejected an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("expected exactly one '@', found {0}")]
    AtCount(usize),

    #[error("'@' cannot start or end an email address")]
    AtOnEdge,

    #[error("character {0:?} is not allowed in an email address")]
    InvalidCharacter(char),

    #[error("email domain is empty")]
    EmptyDomain,

    #[error("email domain cannot contain '_'")]
    UnderscoreInDomain,

    #[error("email domain cannot start or end with {0:?}")]
    DomainEdge(char),

    #[error("{found:?} cannot follow {previous:?} (position {position})")]
    AdjacentSeparators {
        previous: char,
        found: char,
        position: usize,
    },
}

/// Checks `value` against the email grammar, naming the first rule it breaks.
///
/// Positions are counted in characters.
pub fn check_email(value: &str) -> Result<(), EmailError> {
    let chars: Vec<char> = value.chars().collect();

    let at_count = chars.iter().filter(|&&c| c == '@').count();
    if at_count != 1 {
        return Err(EmailError::AtCount(at_count));
    }
    if chars.first() == Some(&'@') || chars.last() == Some(&'@') {
        return Err(EmailError::AtOnEdge);
    }

    if let Some(&invalid) = chars
        .iter()
        .find(|c| !c.to_lowercase().all(|folded| EMAIL_CHARSET.contains(folded)))
    {
        return Err(EmailError::InvalidCharacter(invalid));
    }

    let Some(at) = chars.iter().position(|&c| c == '@') else {
        return Err(EmailError::AtCount(0));
    };

    let domain = &chars[at..];
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }
    if domain.contains(&'_') {
        return Err(EmailError::UnderscoreInDomain);
    }
    for edge in [domain.first(), domain.last()].into_iter().flatten() {
        if matches!(edge, '.' | '-') {
            return Err(EmailError::DomainEdge(*edge));
        }
    }

    // Same length as the domain segment, read from the start of the address.
    scan_separators(&chars[..domain.len()])
}

/// Returns true when `value` passes [`check_email`].
pub fn is_email(value: &str) -> bool {
    match check_email(value) {
        Ok(()) => true,
        Err(reason) => {
            tracing::trace!(%reason, "email rejected");
            false
        }
    }
}

/// One-step lookback over `.` and `-`.
///
/// `.` may not follow `.` or `-`; `-` may not follow `.`. `--` is allowed.
fn scan_separators(window: &[char]) -> Result<(), EmailError> {
    let mut after_dot = false;
    let mut after_dash = false;

    for (position, &c) in window.iter().enumerate() {
        match c {
            '.' => {
                if after_dot || after_dash {
                    return Err(EmailError::AdjacentSeparators {
                        previous: if after_dot { '.' } else { '-' },
                        found: '.',
                        position,
                    });
                }
                after_dot = true;
                after_dash = false;
            }
            '-' => {
                if after_dot {
                    return Err(EmailError::AdjacentSeparators {
                        previous: '.',
                        found: '-',
                        position,
                    });
                }
                after_dot = false;
                after_dash = true;
            }
            _ => {
                after_dot = false;
                after_dash = false;
            }
        }
    }

    Ok(())
}
