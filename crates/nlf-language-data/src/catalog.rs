use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::record::{FontDefaults, LanguageRecord, StringTable, deserialize_rtl};

const BUNDLED_CATALOG: &str = include_str!("../data/languages.json");

/// Entry of the language choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    /// Catalog key, stored as the answer.
    pub key: String,
    /// Label shown to the user.
    pub display: String,
}

/// Read-only mapping from language name to its defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, LanguageRecord>,
}

impl LanguageCatalog {
    /// Catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Loads a catalog of the same shape as the bundled one from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parses catalog JSON. Entries naming a `fallback` language may omit
    /// strings; the gaps are filled from that language, which must itself be
    /// complete.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<String, CatalogEntry> = serde_json::from_str(raw)?;
        Self::from_records(resolve_entries(entries)?)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = (String, LanguageRecord)>,
    ) -> Result<Self, CatalogError> {
        let languages: BTreeMap<String, LanguageRecord> = records.into_iter().collect();
        if languages.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some((name, _)) = languages.iter().find(|(_, record)| record.id == 0) {
            return Err(CatalogError::ZeroLocaleId(name.clone()));
        }
        Ok(Self { languages })
    }

    pub fn lookup(&self, name: &str) -> Option<&LanguageRecord> {
        self.languages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageRecord)> {
        self.languages
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Choice list sorted by display name, case-insensitively.
    pub fn choices(&self) -> Vec<LanguageChoice> {
        let mut choices: Vec<LanguageChoice> = self
            .iter()
            .map(|(key, record)| LanguageChoice {
                key: key.to_string(),
                display: record.long.clone().unwrap_or_else(|| key.to_string()),
            })
            .collect();
        choices.sort_by(|a, b| {
            a.display
                .to_lowercase()
                .cmp(&b.display.to_lowercase())
                .then_with(|| a.display.cmp(&b.display))
        });
        choices
    }
}

/// Language as stored in catalog JSON, before fallback strings are applied.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    long: Option<String>,
    id: u32,
    #[serde(default)]
    font: FontDefaults,
    #[serde(default)]
    code_page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_rtl")]
    rtl: bool,
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

impl CatalogEntry {
    fn into_record(self, strings: StringTable) -> LanguageRecord {
        LanguageRecord {
            long: self.long,
            id: self.id,
            font: self.font,
            code_page: self.code_page,
            rtl: self.rtl,
            fallback: self.fallback,
            strings,
        }
    }
}

fn resolve_entries(
    entries: BTreeMap<String, CatalogEntry>,
) -> Result<BTreeMap<String, LanguageRecord>, CatalogError> {
    let (dependent, standalone): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|(_, entry)| entry.fallback.is_some());

    let mut records = BTreeMap::new();
    for (name, mut entry) in standalone {
        let strings = StringTable::try_from_map(std::mem::take(&mut entry.strings)).map_err(
            |err| match err {
                CatalogError::MissingStrings(missing) => CatalogError::IncompleteLanguage {
                    language: name.clone(),
                    missing,
                },
                other => other,
            },
        )?;
        records.insert(name, entry.into_record(strings));
    }

    let mut resolved = Vec::with_capacity(dependent.len());
    for (name, mut entry) in dependent {
        let fallback = entry.fallback.clone().unwrap_or_default();
        let Some(base) = records.get(&fallback) else {
            return Err(CatalogError::InvalidFallback {
                language: name,
                fallback,
            });
        };
        let strings = StringTable::from_fn(|key| {
            entry
                .strings
                .remove(key.as_str())
                .unwrap_or_else(|| base.strings.get(key).to_string())
        });
        resolved.push((name, entry.into_record(strings)));
    }
    records.extend(resolved);
    Ok(records)
}
