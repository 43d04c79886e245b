//! Question schema, prompt runner and renderer for NSIS language files.
//!
//! A run walks the [`AnswerSchema`] once through a [`PromptRunner`], turns
//! the collected [`AnswerRecord`] into [`FinalAnswers`] and renders them with
//! the [`TemplateRenderer`].

pub mod answers;
pub mod defaults;
pub mod error;
pub mod frontend;
pub mod normalize;
pub mod render;
pub mod runner;
pub mod spec;
pub mod store;
pub mod validate;
pub mod visibility;

pub use answers::{AnswerRecord, AnswerValue, FinalAnswers, Setting};
pub use defaults::resolve_default;
pub use error::QaError;
pub use frontend::{AnswersPrompt, parse_confirmation};
pub use normalize::{CanonicalName, NLF_EXTENSION, direction_sentinel, normalize};
pub use render::{NLF_HEADER, OutputDocument, TemplateRenderer};
pub use runner::{Prompt, PromptRunner, RunOptions};
pub use spec::{
    AnswerSchema, DEFAULT_LANGUAGE, DefaultSource, Persist, QuestionKey, QuestionKind,
    QuestionSpec, Validator, Visibility,
};
pub use store::PriorAnswers;
pub use validate::validate;
pub use visibility::{is_visible, visible_questions};
