//! Language defaults for NSIS language files.
//!
//! Each [`LanguageRecord`] carries the locale identifier, font, code page,
//! text direction and the default value of every [`StringKey`]. A catalog
//! entry either lists every string or names a complete `fallback` language
//! that supplies the rest; anything else is rejected when the catalog loads.

pub mod catalog;
pub mod error;
pub mod key;
pub mod record;

pub use catalog::{LanguageCatalog, LanguageChoice};
pub use error::CatalogError;
pub use key::StringKey;
pub use record::{FontDefaults, LanguageRecord, StringTable};
