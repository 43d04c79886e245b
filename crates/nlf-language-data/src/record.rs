use std::collections::BTreeMap;
use std::ops::Index;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;
use crate::key::StringKey;

/// Default font for a language. `None` means the platform default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDefaults {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// Default values for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Display name used in choice lists; the catalog key is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    pub id: u32,
    #[serde(default)]
    pub font: FontDefaults,
    #[serde(default)]
    pub code_page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_rtl")]
    pub rtl: bool,
    /// Language whose strings filled the keys this record left out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    pub strings: StringTable,
}

/// Exactly one value per [`StringKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    values: Vec<String>,
}

impl StringTable {
    pub fn from_fn(mut value_for: impl FnMut(StringKey) -> String) -> Self {
        Self {
            values: StringKey::ALL.iter().map(|key| value_for(*key)).collect(),
        }
    }

    /// Builds a table from raw `key -> value` pairs. Every key must be present;
    /// unrecognised keys are ignored.
    pub fn try_from_map(mut raw: BTreeMap<String, String>) -> Result<Self, CatalogError> {
        let missing: Vec<&'static str> = StringKey::ALL
            .iter()
            .filter(|key| !raw.contains_key(key.as_str()))
            .map(|key| key.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::MissingStrings(missing));
        }
        Ok(Self::from_fn(|key| raw.remove(key.as_str()).unwrap_or_default()))
    }

    pub fn get(&self, key: StringKey) -> &str {
        &self.values[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &str)> {
        StringKey::ALL
            .iter()
            .zip(&self.values)
            .map(|(key, value)| (*key, value.as_str()))
    }
}

impl Index<StringKey> for StringTable {
    type Output = str;

    fn index(&self, key: StringKey) -> &str {
        self.get(key)
    }
}

impl Serialize for StringTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(key, value)| (key.as_str(), value)))
    }
}

impl<'de> Deserialize<'de> for StringTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::try_from_map(raw).map_err(D::Error::custom)
    }
}

// Older catalog data encodes direction as the NLF sentinel string.
pub(crate) fn deserialize_rtl<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RtlFlag {
        Flag(bool),
        Sentinel(String),
    }

    Ok(match RtlFlag::deserialize(deserializer)? {
        RtlFlag::Flag(flag) => flag,
        RtlFlag::Sentinel(text) => text == "RTL",
    })
}
