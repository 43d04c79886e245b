use std::collections::BTreeMap;
use std::fmt;

use nlf_language_data::StringKey;
use serde::{Deserialize, Serialize};

use crate::error::QaError;
use crate::normalize::{CanonicalName, direction_sentinel, normalize};
use crate::spec::QuestionKey;
use crate::validate::{parse_positive_integer, parse_setting};

/// A single validated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(flag) => Some(*flag),
            AnswerValue::Text(_) => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(flag) => write!(f, "{flag}"),
            AnswerValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

/// Answers collected during one run, keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    answers: BTreeMap<QuestionKey, AnswerValue>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: QuestionKey, value: impl Into<AnswerValue>) {
        self.answers.insert(key, value.into());
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.answers.get(&key)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.answers.contains_key(&key)
    }

    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    pub fn flag(&self, key: QuestionKey) -> Option<bool> {
        self.get(key).and_then(AnswerValue::as_flag)
    }

    pub fn language(&self) -> Option<&str> {
        self.text(QuestionKey::Language)
    }

    pub fn translate_strings(&self) -> bool {
        self.flag(QuestionKey::TranslateStrings).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &AnswerValue)> {
        self.answers.iter().map(|(key, value)| (*key, value))
    }

    /// Normalizes the name, parses numeric fields and coerces the direction
    /// into its NLF sentinel.
    pub fn finalize(&self) -> Result<FinalAnswers, QaError> {
        let raw_name = self.required_text(QuestionKey::Name)?;
        let name = normalize(raw_name);
        if name.as_str().is_empty() {
            return Err(invalid(QuestionKey::Name, "name does not contain any letters"));
        }

        let id = parse_positive_integer(self.required_text(QuestionKey::Id)?)
            .ok_or_else(|| invalid(QuestionKey::Id, "not a valid locale identifier (LCID)"))?;
        let font_size = parse_setting(self.required_text(QuestionKey::FontSize)?)
            .ok_or_else(|| invalid(QuestionKey::FontSize, "not a valid font size"))?;
        let code_page = parse_setting(self.required_text(QuestionKey::CodePage)?)
            .ok_or_else(|| invalid(QuestionKey::CodePage, "not a valid code page"))?;
        let rtl = self
            .flag(QuestionKey::Rtl)
            .ok_or_else(|| missing(QuestionKey::Rtl))?;

        let strings = self
            .iter()
            .filter_map(|(key, value)| Some((key.string_key()?, value.as_text()?.to_string())))
            .collect();

        Ok(FinalAnswers {
            name,
            language: self.required_text(QuestionKey::Language)?.to_string(),
            id,
            font_name: self.required_text(QuestionKey::FontName)?.to_string(),
            font_size,
            code_page,
            direction: direction_sentinel(rtl),
            strings,
        })
    }

    fn required_text(&self, key: QuestionKey) -> Result<&str, QaError> {
        self.text(key).ok_or_else(|| missing(key))
    }
}

fn invalid(key: QuestionKey, message: &str) -> QaError {
    QaError::validation(key.as_str(), message)
}

fn missing(key: QuestionKey) -> QaError {
    QaError::Render(format!("answer '{key}' is missing"))
}

/// Numeric NLF setting where `-` selects the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    PlatformDefault,
    Value(u32),
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::PlatformDefault => f.write_str("-"),
            Setting::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Answers ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalAnswers {
    pub name: CanonicalName,
    pub language: String,
    pub id: u32,
    pub font_name: String,
    pub font_size: Setting,
    pub code_page: Setting,
    /// `RTL` or `false`.
    pub direction: &'static str,
    /// Translated strings; keys absent here render as empty lines.
    pub strings: BTreeMap<StringKey, String>,
}

impl FinalAnswers {
    pub fn string(&self, key: StringKey) -> &str {
        self.strings.get(&key).map(String::as_str).unwrap_or_default()
    }
}
