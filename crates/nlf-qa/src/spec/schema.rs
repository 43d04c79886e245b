use nlf_language_data::{LanguageCatalog, StringKey};

use super::question::{
    DefaultSource, Persist, QuestionKey, QuestionSpec, Validator, Visibility,
};

pub const DEFAULT_LANGUAGE: &str = "English";

/// Ordered question table. Later entries may depend on earlier answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSchema {
    questions: Vec<QuestionSpec>,
}

impl AnswerSchema {
    /// Builds the NLF question sequence; language choices come from `catalog`.
    pub fn new(catalog: &LanguageCatalog) -> Self {
        let mut questions = vec![
            QuestionSpec::text(QuestionKey::Name, "What's the name of the language?")
                .validated(Validator::LanguageName)
                .persisted(Persist::Always),
            QuestionSpec::choice(
                QuestionKey::Language,
                "Select the translation you'd like to work with",
                catalog.choices(),
            )
            .defaults_to(DefaultSource::Text(DEFAULT_LANGUAGE))
            .persisted(Persist::Always),
            QuestionSpec::text(QuestionKey::Id, "Specify the locale identifier (LCID)")
                .validated(Validator::PositiveInteger)
                .defaults_to(DefaultSource::LocaleId),
            QuestionSpec::text(
                QuestionKey::FontName,
                "Specify the Font Name (non-Latin languages only)",
            )
            .validated(Validator::NonEmpty)
            .defaults_to(DefaultSource::FontName),
            QuestionSpec::text(
                QuestionKey::FontSize,
                "Specify the Font Size (non-Latin languages only)",
            )
            .validated(Validator::IntegerOrDefault)
            .defaults_to(DefaultSource::FontSize),
            QuestionSpec::text(QuestionKey::CodePage, "Code page")
                .validated(Validator::IntegerOrDefault)
                .defaults_to(DefaultSource::CodePage),
            QuestionSpec::confirm(QuestionKey::Rtl, "Is it a right-to-left (RTL) language?")
                .defaults_to(DefaultSource::Rtl),
            QuestionSpec::confirm(
                QuestionKey::TranslateStrings,
                "Do you want to continue and translate all strings?",
            )
            .defaults_to(DefaultSource::Flag(true)),
        ];

        questions.extend(StringKey::ALL.iter().map(|key| {
            QuestionSpec::text(QuestionKey::String(*key), key.as_str())
                .defaults_to(DefaultSource::Catalog(*key))
                .visible(Visibility::WhenTranslating)
                .persisted(Persist::WithStrings)
        }));

        Self { questions }
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.questions
    }

    pub fn question(&self, key: QuestionKey) -> Option<&QuestionSpec> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_questions_come_first_in_order() {
        let catalog = LanguageCatalog::bundled().expect("catalog");
        let schema = AnswerSchema::new(&catalog);
        let leading: Vec<_> = schema
            .questions()
            .iter()
            .take(QuestionKey::FIXED.len())
            .map(|question| question.key)
            .collect();
        assert_eq!(leading, QuestionKey::FIXED);
        assert_eq!(schema.len(), QuestionKey::FIXED.len() + StringKey::COUNT);
    }

    #[test]
    fn string_questions_depend_on_translation_toggle() {
        let catalog = LanguageCatalog::bundled().expect("catalog");
        let schema = AnswerSchema::new(&catalog);
        let strings: Vec<_> = schema
            .questions()
            .iter()
            .filter(|question| question.key.string_key().is_some())
            .collect();
        assert_eq!(strings.len(), StringKey::COUNT);
        assert!(strings.iter().all(|question| {
            question.visibility == Visibility::WhenTranslating
                && question.persist == Persist::WithStrings
        }));
        let language = schema.question(QuestionKey::Language).expect("language");
        assert_eq!(language.choices().map(<[_]>::len), Some(catalog.len()));
    }
}
