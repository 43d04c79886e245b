pub mod languages;
pub mod new;

use std::path::Path;

use anyhow::{Context, Result};
use nlf_language_data::LanguageCatalog;

use crate::i18n::{tr, trf};

/// Loads `path` when given, the bundled catalog otherwise.
pub fn load_catalog(path: Option<&Path>) -> Result<LanguageCatalog> {
    match path {
        Some(path) => LanguageCatalog::from_path(path)
            .with_context(|| trf("cli.catalog.load_failed", &[&path.display().to_string()])),
        None => LanguageCatalog::bundled().context(tr("cli.catalog.bundled_invalid")),
    }
}
