use serde_json::{Map, Value};
use tracing::warn;

use crate::answers::{AnswerRecord, AnswerValue};
use crate::spec::{AnswerSchema, QuestionKey};

/// Answers remembered from earlier runs, used only to pre-fill defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorAnswers {
    answers: AnswerRecord,
}

impl PriorAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a stored JSON object. Entries that do not name a question or
    /// hold something other than a string, number or bool are skipped.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_str(raw)?;
        let mut answers = AnswerRecord::new();
        for (name, value) in map {
            let Some(key) = QuestionKey::parse(&name) else {
                warn!(key = %name, "ignoring remembered answer for unknown question");
                continue;
            };
            match value {
                Value::Bool(flag) => answers.insert(key, flag),
                Value::String(text) => answers.insert(key, text),
                Value::Number(number) => answers.insert(key, number.to_string()),
                other => warn!(key = %name, value = %other, "ignoring remembered answer"),
            }
        }
        Ok(Self { answers })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.answers)
    }

    pub fn insert(&mut self, key: QuestionKey, value: impl Into<AnswerValue>) {
        self.answers.insert(key, value);
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Copy of the store with this run's persisted answers merged in.
    pub fn updated_with(
        &self,
        schema: &AnswerSchema,
        record: &AnswerRecord,
        store_strings: bool,
    ) -> Self {
        let mut next = self.clone();
        for question in schema.questions() {
            if !question.persist.applies(store_strings) {
                continue;
            }
            if let Some(value) = record.get(question.key) {
                next.answers.insert(question.key, value.clone());
            }
        }
        next
    }
}
