use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::answers::AnswerValue;
use crate::error::QaError;
use crate::runner::Prompt;
use crate::spec::{QuestionKey, QuestionKind, QuestionSpec};

/// Non-interactive prompt fed from a JSON object keyed by question.
///
/// Questions without an entry take their default; a question that has
/// neither fails the run.
#[derive(Debug, Clone, Default)]
pub struct AnswersPrompt {
    answers: BTreeMap<QuestionKey, Value>,
}

impl AnswersPrompt {
    pub fn from_value(value: Value) -> Result<Self, QaError> {
        let Value::Object(map) = value else {
            return Err(QaError::validation("answers", "expected a JSON object"));
        };
        let mut answers = BTreeMap::new();
        for (name, value) in map {
            let key = QuestionKey::parse(&name)
                .ok_or_else(|| QaError::validation(name.as_str(), "unknown question"))?;
            answers.insert(key, value);
        }
        Ok(Self { answers })
    }

    /// Entries that were never asked for, e.g. strings while translation is off.
    pub fn unused(&self) -> impl Iterator<Item = QuestionKey> + '_ {
        self.answers.keys().copied()
    }
}

impl Prompt for AnswersPrompt {
    fn ask(
        &mut self,
        question: &QuestionSpec,
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError> {
        match self.answers.remove(&question.key) {
            Some(value) => coerce(question, value),
            None => {
                debug!(key = %question.key, "no answer supplied, using default");
                default
                    .cloned()
                    .ok_or_else(|| QaError::validation(question.key.as_str(), "missing answer"))
            }
        }
    }
}

/// Accepts `y`/`yes`/`true` and `n`/`no`/`false`, ignoring case.
pub fn parse_confirmation(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

fn coerce(question: &QuestionSpec, value: Value) -> Result<AnswerValue, QaError> {
    let field = question.key.as_str();
    match (&question.kind, value) {
        (QuestionKind::Confirm, Value::Bool(flag)) => Ok(AnswerValue::Flag(flag)),
        (QuestionKind::Confirm, Value::String(text)) => parse_confirmation(&text)
            .map(AnswerValue::Flag)
            .ok_or_else(|| QaError::validation(field, "expected yes or no")),
        (QuestionKind::Choice(choices), Value::String(text)) => Ok(AnswerValue::Text(
            choices
                .iter()
                .find(|choice| choice.display == text)
                .map(|choice| choice.key.clone())
                .unwrap_or(text),
        )),
        (_, Value::String(text)) => Ok(AnswerValue::Text(text)),
        (_, Value::Number(number)) => Ok(AnswerValue::Text(number.to_string())),
        _ => Err(QaError::validation(field, "unsupported answer type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn confirmations_accept_words_and_booleans() {
        assert_eq!(parse_confirmation("Yes"), Some(true));
        assert_eq!(parse_confirmation(" n "), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);

        let question = QuestionSpec::confirm(QuestionKey::Rtl, "rtl?");
        let mut prompt = AnswersPrompt::from_value(json!({ "rtl": "no" })).expect("prompt");
        assert_eq!(prompt.ask(&question, None).expect("answer"), AnswerValue::Flag(false));
    }

    #[test]
    fn numbers_become_text() {
        let question = QuestionSpec::text(QuestionKey::Id, "id");
        let mut prompt = AnswersPrompt::from_value(json!({ "id": 1033 })).expect("prompt");
        assert_eq!(prompt.ask(&question, None).expect("answer"), AnswerValue::from("1033"));
    }

    #[test]
    fn missing_entries_use_default_or_fail() {
        let question = QuestionSpec::text(QuestionKey::FontName, "font");
        let mut prompt = AnswersPrompt::default();
        let default = AnswerValue::from("-");
        assert_eq!(prompt.ask(&question, Some(&default)).expect("answer"), default);

        let err = prompt.ask(&question, None).expect_err("missing");
        assert_eq!(err.field(), Some("fontName"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AnswersPrompt::from_value(json!({ "colour": "red" })).expect_err("unknown");
        assert_eq!(err.field(), Some("colour"));
        assert!(AnswersPrompt::from_value(json!(["name"])).is_err());
    }
}
