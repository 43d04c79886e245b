use crate::answers::AnswerRecord;
use crate::spec::{AnswerSchema, QuestionSpec, Visibility};

/// Whether `question` is asked given the answers collected so far.
pub fn is_visible(question: &QuestionSpec, record: &AnswerRecord) -> bool {
    match question.visibility {
        Visibility::Always => true,
        Visibility::WhenTranslating => record.translate_strings(),
    }
}

pub fn visible_questions<'a>(
    schema: &'a AnswerSchema,
    record: &'a AnswerRecord,
) -> impl Iterator<Item = &'a QuestionSpec> {
    schema
        .questions()
        .iter()
        .filter(move |question| is_visible(question, record))
}
