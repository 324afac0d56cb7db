// File: src/report.rs
// Purpose: Collect the outcome of several named fields

use crate::field::ValidationField;
use std::collections::HashMap;

/// Failures of a set of named fields, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: HashMap<String, String>,
}

impl ValidationReport {
    /// Validates every field and keeps the messages of the ones that fail.
    ///
    /// When a name repeats, the last failure wins.
    pub fn collect<'a, I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, &'a dyn ValidationField)>,
        N: Into<String>,
    {
        let errors: HashMap<String, String> = fields
            .into_iter()
            .filter_map(|(name, field)| field.validate().map(|message| (name.into(), message)))
            .collect();

        tracing::debug!(failed = errors.len(), "validation report collected");
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure message for a specific field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// `Ok(())` when every field passed, otherwise the failures
    pub fn into_result(self) -> Result<(), HashMap<String, String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
