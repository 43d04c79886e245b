pub mod question;
pub mod schema;

pub use question::{
    DefaultSource, Persist, QuestionKey, QuestionKind, QuestionSpec, Validator, Visibility,
};
pub use schema::{AnswerSchema, DEFAULT_LANGUAGE};
