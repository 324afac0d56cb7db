//! Cached case conversion for a single identifier.

use crate::style::CaseStyle;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Every representation of one identifier, as returned by
/// [`CaseConverter::export_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRepresentations {
    pub dash: String,
    pub snake: String,
    pub constant: String,
    pub pascal: String,
    pub camel: String,
}

impl CaseRepresentations {
    pub fn get(&self, style: CaseStyle) -> &str {
        match style {
            CaseStyle::Dash => &self.dash,
            CaseStyle::Snake => &self.snake,
            CaseStyle::Constant => &self.constant,
            CaseStyle::Pascal => &self.pascal,
            CaseStyle::Camel => &self.camel,
        }
    }
}

/// Write-once slot per style.
#[derive(Debug, Default)]
struct CaseCache {
    dash: OnceCell<String>,
    snake: OnceCell<String>,
    constant: OnceCell<String>,
    pascal: OnceCell<String>,
    camel: OnceCell<String>,
}

impl CaseCache {
    fn slot(&self, style: CaseStyle) -> &OnceCell<String> {
        match style {
            CaseStyle::Dash => &self.dash,
            CaseStyle::Snake => &self.snake,
            CaseStyle::Constant => &self.constant,
            CaseStyle::Pascal => &self.pascal,
            CaseStyle::Camel => &self.camel,
        }
    }
}

/// Derives naming conventions from one dash-case identifier.
///
/// Each style is computed on first access and cached for the lifetime of the
/// converter. The identifier never changes, so a cached value is final.
///
/// ```
/// use code_string::CaseConverter;
///
/// let name = CaseConverter::new("foo-bar");
/// assert_eq!(name.pascal(), "FooBar");
/// assert_eq!(name.snake(), "foo_bar");
/// ```
#[derive(Debug)]
pub struct CaseConverter {
    identifier: String,
    cache: CaseCache,
}

impl CaseConverter {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            cache: CaseCache::default(),
        }
    }

    /// The identifier as given.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifier in `style`, computing it on first use.
    pub fn get(&self, style: CaseStyle) -> &str {
        self.cache.slot(style).get_or_init(|| {
            tracing::trace!(identifier = %self.identifier, %style, "computing case style");
            style.apply(&self.identifier)
        })
    }

    pub fn dash(&self) -> &str {
        self.get(CaseStyle::Dash)
    }

    pub fn snake(&self) -> &str {
        self.get(CaseStyle::Snake)
    }

    pub fn constant(&self) -> &str {
        self.get(CaseStyle::Constant)
    }

    pub fn pascal(&self) -> &str {
        self.get(CaseStyle::Pascal)
    }

    pub fn camel(&self) -> &str {
        self.get(CaseStyle::Camel)
    }

    /// All five representations at once. Goes through the same cache as the
    /// individual accessors.
    pub fn export_all(&self) -> CaseRepresentations {
        CaseRepresentations {
            dash: self.dash().to_string(),
            snake: self.snake().to_string(),
            constant: self.constant().to_string(),
            pascal: self.pascal().to_string(),
            camel: self.camel().to_string(),
        }
    }

    /// Whether `style` has been computed yet.
    pub fn is_cached(&self, style: CaseStyle) -> bool {
        self.cache.slot(style).get().is_some()
    }
}

impl Clone for CaseConverter {
    /// Clones the identifier only; the clone recomputes lazily.
    fn clone(&self) -> Self {
        Self::new(self.identifier.clone())
    }
}

impl From<&str> for CaseConverter {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for CaseConverter {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}
