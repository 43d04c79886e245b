use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a language catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read language catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("language catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing string keys: {}", .0.join(", "))]
    MissingStrings(Vec<&'static str>),
    #[error("language '{language}' is missing string keys: {}", .missing.join(", "))]
    IncompleteLanguage {
        language: String,
        missing: Vec<&'static str>,
    },
    #[error("language '{language}' falls back to '{fallback}', which is not a complete language")]
    InvalidFallback { language: String, fallback: String },
    #[error("unknown string key '{0}'")]
    UnknownStringKey(String),
    #[error("language '{0}' has locale id 0")]
    ZeroLocaleId(String),
    #[error("language catalog is empty")]
    Empty,
}
