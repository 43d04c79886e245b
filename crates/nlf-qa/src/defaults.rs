use nlf_language_data::LanguageRecord;

use crate::answers::AnswerValue;
use crate::spec::{DefaultSource, QuestionSpec};
use crate::store::PriorAnswers;
use crate::validate::validate;

const PLATFORM_DEFAULT: &str = "-";

/// Suggested answer for `question`.
///
/// A remembered answer wins when the question is persisted under the current
/// options. Otherwise the default comes from the question's source, looked up
/// in the record of the language chosen earlier in the run. Sources that need
/// a language yield nothing while no language is known.
pub fn resolve_default(
    question: &QuestionSpec,
    prior: Option<&PriorAnswers>,
    language: Option<&LanguageRecord>,
    store_strings: bool,
) -> Option<AnswerValue> {
    if question.persist.applies(store_strings)
        && let Some(value) = prior.and_then(|prior| prior.get(question.key))
        && accepts(question, value)
    {
        return Some(value.clone());
    }

    match question.default {
        DefaultSource::None => None,
        DefaultSource::Flag(flag) => Some(AnswerValue::Flag(flag)),
        DefaultSource::Text(text) => match question.choices() {
            Some(choices) if !choices.iter().any(|choice| choice.key == text) => choices
                .first()
                .map(|choice| AnswerValue::Text(choice.key.clone())),
            _ => Some(AnswerValue::from(text)),
        },
        source => language.and_then(|record| from_record(source, record)),
    }
}

fn from_record(source: DefaultSource, record: &LanguageRecord) -> Option<AnswerValue> {
    let value = match source {
        DefaultSource::LocaleId => AnswerValue::Text(record.id.to_string()),
        DefaultSource::FontName => AnswerValue::from(
            record
                .font
                .name
                .clone()
                .unwrap_or_else(|| PLATFORM_DEFAULT.to_string()),
        ),
        DefaultSource::FontSize => setting_text(record.font.size),
        DefaultSource::CodePage => setting_text(record.code_page),
        DefaultSource::Rtl => AnswerValue::Flag(record.rtl),
        DefaultSource::Catalog(key) => AnswerValue::from(record.strings.get(key)),
        DefaultSource::None | DefaultSource::Text(_) | DefaultSource::Flag(_) => return None,
    };
    Some(value)
}

fn setting_text(value: Option<u32>) -> AnswerValue {
    match value {
        Some(value) => AnswerValue::Text(value.to_string()),
        None => AnswerValue::from(PLATFORM_DEFAULT),
    }
}

/// Remembered values are dropped when they no longer pass the question's checks.
fn accepts(question: &QuestionSpec, value: &AnswerValue) -> bool {
    match validate(question, value) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key = %question.key, error = %err, "ignoring remembered answer");
            false
        }
    }
}
