//! This module is responsible for reading datasets and writing results.

use crate::utils::GenericError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

mod dataset;
pub use self::dataset::*;

mod solution;
pub use self::solution::*;

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;

        if let Some(details) = &self.details {
            write!(f, " details: '{details}'")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for GenericError {
    fn from(value: FormatError) -> Self {
        value.to_string().into()
    }
}
