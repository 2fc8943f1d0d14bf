use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

use crate::stores::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    Configuration,
    Collaborator,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutocompleteError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AutocompleteError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, "INVALID_ARGUMENT", message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, "CONFIGURATION", message)
    }

    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Collaborator, "COLLABORATOR_FAILURE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, "INTERNAL", message)
    }
}

impl fmt::Display for AutocompleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AutocompleteError {}

impl From<SourceError> for AutocompleteError {
    fn from(err: SourceError) -> Self {
        AutocompleteError::collaborator(err.to_string())
    }
}

impl From<std::io::Error> for AutocompleteError {
    fn from(err: std::io::Error) -> Self {
        AutocompleteError::internal(err.to_string())
    }
}
