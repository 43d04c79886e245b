use std::fmt;
use std::str::FromStr;

use nlf_language_data::{LanguageChoice, StringKey};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::QaError;

/// Identifier of a question and of its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionKey {
    Name,
    Language,
    Id,
    FontName,
    FontSize,
    CodePage,
    Rtl,
    TranslateStrings,
    String(StringKey),
}

impl QuestionKey {
    pub const FIXED: &'static [QuestionKey] = &[
        QuestionKey::Name,
        QuestionKey::Language,
        QuestionKey::Id,
        QuestionKey::FontName,
        QuestionKey::FontSize,
        QuestionKey::CodePage,
        QuestionKey::Rtl,
        QuestionKey::TranslateStrings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionKey::Name => "name",
            QuestionKey::Language => "language",
            QuestionKey::Id => "id",
            QuestionKey::FontName => "fontName",
            QuestionKey::FontSize => "fontSize",
            QuestionKey::CodePage => "codePage",
            QuestionKey::Rtl => "rtl",
            QuestionKey::TranslateStrings => "translateStrings",
            QuestionKey::String(key) => key.as_str(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::FIXED
            .iter()
            .copied()
            .find(|key| key.as_str() == raw)
            .or_else(|| StringKey::parse(raw).map(QuestionKey::String))
    }

    pub fn string_key(self) -> Option<StringKey> {
        match self {
            QuestionKey::String(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = QaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| QaError::validation(s, "unknown question"))
    }
}

impl Serialize for QuestionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown question '{raw}'")))
    }
}

/// How a question is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Choice(Vec<LanguageChoice>),
    Confirm,
}

/// Predicate applied to the raw answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Any,
    NonEmpty,
    /// Letters and spaces, non-empty after trimming.
    LanguageName,
    PositiveInteger,
    /// Positive integer or `-` for the platform default.
    IntegerOrDefault,
}

/// Where the suggested value of a question comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    None,
    Text(&'static str),
    Flag(bool),
    LocaleId,
    FontName,
    FontSize,
    CodePage,
    Rtl,
    Catalog(StringKey),
}

impl DefaultSource {
    /// Whether the default needs the record of the chosen language.
    pub fn needs_language(self) -> bool {
        !matches!(
            self,
            DefaultSource::None | DefaultSource::Text(_) | DefaultSource::Flag(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    WhenTranslating,
}

/// Whether an answer is remembered for the next run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    Never,
    Always,
    /// Only when string answers are being stored.
    WithStrings,
}

impl Persist {
    pub fn applies(self, store_strings: bool) -> bool {
        match self {
            Persist::Never => false,
            Persist::Always => true,
            Persist::WithStrings => store_strings,
        }
    }
}

/// Definition of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpec {
    pub key: QuestionKey,
    pub prompt: String,
    pub kind: QuestionKind,
    pub validator: Validator,
    pub default: DefaultSource,
    pub visibility: Visibility,
    pub persist: Persist,
}

impl QuestionSpec {
    pub fn text(key: QuestionKey, prompt: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            kind: QuestionKind::Text,
            validator: Validator::Any,
            default: DefaultSource::None,
            visibility: Visibility::Always,
            persist: Persist::Never,
        }
    }

    pub fn confirm(key: QuestionKey, prompt: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::Confirm,
            ..Self::text(key, prompt)
        }
    }

    pub fn choice(
        key: QuestionKey,
        prompt: impl Into<String>,
        choices: Vec<LanguageChoice>,
    ) -> Self {
        Self {
            kind: QuestionKind::Choice(choices),
            ..Self::text(key, prompt)
        }
    }

    pub fn validated(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn defaults_to(mut self, default: DefaultSource) -> Self {
        self.default = default;
        self
    }

    pub fn visible(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn persisted(mut self, persist: Persist) -> Self {
        self.persist = persist;
        self
    }

    pub fn choices(&self) -> Option<&[LanguageChoice]> {
        match &self.kind {
            QuestionKind::Choice(choices) => Some(choices),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_their_names() {
        for key in QuestionKey::FIXED {
            assert_eq!(QuestionKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(
            QuestionKey::parse("Branding"),
            Some(QuestionKey::String(StringKey::Branding))
        );
        assert_eq!(
            QuestionKey::parse("Name"),
            Some(QuestionKey::String(StringKey::Name))
        );
        assert_eq!(QuestionKey::parse("name"), Some(QuestionKey::Name));
        assert!(QuestionKey::parse("fontname").is_none());
    }

    #[test]
    fn persist_rules_follow_store_strings() {
        assert!(Persist::Always.applies(false));
        assert!(!Persist::Never.applies(true));
        assert!(Persist::WithStrings.applies(true));
        assert!(!Persist::WithStrings.applies(false));
    }
}
