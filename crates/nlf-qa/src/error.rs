use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
    #[error("aborted by user")]
    Aborted,
    #[error("template render error: {0}")]
    Render(String),
    #[error("prompt i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl QaError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field that failed validation, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
