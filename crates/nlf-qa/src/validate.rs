use once_cell::sync::Lazy;
use regex::Regex;

use crate::answers::{AnswerValue, Setting};
use crate::error::QaError;
use crate::spec::{QuestionKey, QuestionKind, QuestionSpec, Validator};

static LANGUAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]+$").expect("language name pattern"));

/// Checks an answer against the kind and validator of its question.
pub fn validate(question: &QuestionSpec, value: &AnswerValue) -> Result<(), QaError> {
    let field = question.key.as_str();
    let text = match (&question.kind, value) {
        (QuestionKind::Confirm, AnswerValue::Flag(_)) => return Ok(()),
        (QuestionKind::Confirm, AnswerValue::Text(_)) => {
            return Err(QaError::validation(field, "expected yes or no"));
        }
        (_, AnswerValue::Flag(_)) => return Err(QaError::validation(field, "expected text")),
        (_, AnswerValue::Text(text)) => text,
    };

    // Every NLF slot is exactly one line.
    if !is_single_line(text) {
        return Err(QaError::validation(field, "must not contain line breaks"));
    }

    if let QuestionKind::Choice(choices) = &question.kind
        && !choices.iter().any(|choice| choice.key == *text)
    {
        return Err(QaError::UnknownLanguage(text.clone()));
    }

    if check(question.validator, text) {
        Ok(())
    } else {
        Err(QaError::validation(field, failure_message(question.key)))
    }
}

pub fn check(validator: Validator, text: &str) -> bool {
    match validator {
        Validator::Any => true,
        Validator::NonEmpty => !text.trim().is_empty(),
        Validator::LanguageName => is_language_name(text),
        Validator::PositiveInteger => parse_positive_integer(text).is_some(),
        Validator::IntegerOrDefault => parse_setting(text).is_some(),
    }
}

pub fn is_single_line(text: &str) -> bool {
    !text.contains(['\n', '\r'])
}

pub fn is_language_name(text: &str) -> bool {
    !text.trim().is_empty() && LANGUAGE_NAME.is_match(text)
}

pub fn parse_positive_integer(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

pub fn parse_setting(text: &str) -> Option<Setting> {
    if text.trim() == "-" {
        return Some(Setting::PlatformDefault);
    }
    parse_positive_integer(text).map(Setting::Value)
}

fn failure_message(key: QuestionKey) -> &'static str {
    match key {
        QuestionKey::Name => "Specify a valid language name",
        QuestionKey::Id => "Not a valid locale identifier (LCID)",
        QuestionKey::FontName => "Specify a font name or - for the default",
        QuestionKey::FontSize => "Not a valid font size",
        QuestionKey::CodePage => "Not a valid code page",
        _ => "Not a valid value",
    }
}
