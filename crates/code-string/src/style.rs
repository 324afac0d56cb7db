use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The naming conventions a [`CaseConverter`](crate::CaseConverter) can derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `dash-case`
    Dash,
    /// `snake_case`
    Snake,
    /// `CONSTANT_CASE`
    Constant,
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
}

impl CaseStyle {
    /// Every style, in export order.
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Dash,
        CaseStyle::Snake,
        CaseStyle::Constant,
        CaseStyle::Pascal,
        CaseStyle::Camel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Dash => "dash",
            CaseStyle::Snake => "snake",
            CaseStyle::Constant => "constant",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Camel => "camel",
        }
    }

    /// Runs the uncached conversion for this style.
    pub fn apply(&self, value: &str) -> String {
        match self {
            CaseStyle::Dash => crate::to_dash(value),
            CaseStyle::Snake => crate::to_snake(value),
            CaseStyle::Constant => crate::to_constant(value),
            CaseStyle::Pascal => crate::to_pascal(value),
            CaseStyle::Camel => crate::to_camel(value),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style `{0}` (expected dash, snake, constant, pascal or camel)")]
pub struct ParseCaseStyleError(pub String);

impl FromStr for CaseStyle {
    type Err = ParseCaseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCaseStyleError(s.to_string()))
    }
}
