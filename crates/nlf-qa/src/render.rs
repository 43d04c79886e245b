use handlebars::{Handlebars, no_escape};
use nlf_language_data::StringKey;
use serde_json::{Value, json};

use crate::answers::FinalAnswers;
use crate::error::QaError;
use crate::validate::is_single_line;

pub const NLF_HEADER: &str = "NLF v6";

const TEMPLATE_NAME: &str = "nlf";
const NLF_TEMPLATE: &str = include_str!("../templates/nlf.hbs");

/// Rendered language file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub file_name: String,
    pub contents: String,
}

/// Handlebars renderer for NSIS language files.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, QaError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(no_escape);
        handlebars
            .register_template_string(TEMPLATE_NAME, NLF_TEMPLATE)
            .map_err(|err| QaError::Render(err.to_string()))?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, answers: &FinalAnswers) -> Result<OutputDocument, QaError> {
        if let Some(slot) = multi_line_slot(answers) {
            return Err(QaError::Render(format!("'{slot}' spans more than one line")));
        }
        let contents = self
            .handlebars
            .render(TEMPLATE_NAME, &context(answers))
            .map_err(|err| QaError::Render(err.to_string()))?;
        Ok(OutputDocument {
            file_name: answers.name.file_name(),
            contents,
        })
    }
}

fn multi_line_slot(answers: &FinalAnswers) -> Option<&'static str> {
    if !is_single_line(&answers.font_name) {
        return Some("fontName");
    }
    answers
        .strings
        .iter()
        .find(|(_, value)| !is_single_line(value))
        .map(|(key, _)| key.as_str())
}

fn context(answers: &FinalAnswers) -> Value {
    let strings: Vec<Value> = StringKey::ALL
        .iter()
        .map(|key| json!({ "key": key.as_str(), "value": answers.string(*key) }))
        .collect();
    json!({
        "header": NLF_HEADER,
        "id": answers.id,
        "font_name": answers.font_name,
        "font_size": answers.font_size.to_string(),
        "code_page": answers.code_page.to_string(),
        "direction": answers.direction,
        "strings": strings,
    })
}
