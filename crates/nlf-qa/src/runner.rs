use nlf_language_data::LanguageCatalog;
use tracing::debug;

use crate::answers::{AnswerRecord, AnswerValue};
use crate::defaults::resolve_default;
use crate::error::QaError;
use crate::spec::{AnswerSchema, QuestionSpec};
use crate::store::PriorAnswers;
use crate::validate::validate;
use crate::visibility::is_visible;

/// Source of answers for the runner.
pub trait Prompt {
    /// Returns the answer to `question`. `default` is the suggested value;
    /// returning [`QaError::Aborted`] cancels the run.
    fn ask(
        &mut self,
        question: &QuestionSpec,
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Remembered string answers take precedence over catalog defaults.
    pub store_strings: bool,
}

/// Walks the schema once, in order, collecting one answer per visible question.
pub struct PromptRunner<'a> {
    schema: &'a AnswerSchema,
    catalog: &'a LanguageCatalog,
    prior: Option<&'a PriorAnswers>,
    options: RunOptions,
}

impl<'a> PromptRunner<'a> {
    pub fn new(schema: &'a AnswerSchema, catalog: &'a LanguageCatalog) -> Self {
        Self {
            schema,
            catalog,
            prior: None,
            options: RunOptions::default(),
        }
    }

    pub fn with_prior(mut self, prior: &'a PriorAnswers) -> Self {
        self.prior = Some(prior);
        self
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Hidden questions are skipped and left out of the record. Every answer
    /// is validated before it is recorded, whatever the prompt did.
    pub fn run(&self, prompt: &mut dyn Prompt) -> Result<AnswerRecord, QaError> {
        let mut record = AnswerRecord::new();
        for question in self.schema.questions() {
            if !is_visible(question, &record) {
                debug!(key = %question.key, "question hidden");
                continue;
            }

            let language = record.language().and_then(|name| self.catalog.lookup(name));
            let default = resolve_default(
                question,
                self.prior,
                language,
                self.options.store_strings,
            );
            debug!(key = %question.key, default = ?default, "asking");

            let answer = prompt.ask(question, default.as_ref())?;
            validate(question, &answer)?;
            record.insert(question.key, answer);
        }
        Ok(record)
    }
}
