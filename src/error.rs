use thiserror::Error;

use crate::models::DraftField;

/// Rejections from [`crate::core::ProjectStore`] mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a project with identifier `{0}` already exists")]
    DuplicateIdentifier(String),
}

/// Failures while fetching the initial project list.
///
/// None of these are fatal: the store logs them and carries on with an empty collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("project source unreachable: {0}")]
    Unreachable(String),
    #[error("project source answered with HTTP {0}")]
    Status(u16),
    #[error("malformed project payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// Raised when the create form is submitted with a blank required field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(DraftField),
}
