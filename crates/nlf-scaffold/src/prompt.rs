use std::io::{self, BufRead, StdinLock, Stdout, Write};

use nlf_language_data::LanguageChoice;
use nlf_qa::{
    AnswerValue, Prompt, QaError, QuestionKind, QuestionSpec, parse_confirmation, validate,
};

use crate::i18n::{tr, trf};

/// Line-oriented prompt over a reader and a writer.
///
/// Invalid answers are reported and asked again; end of input aborts the run.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its terminator. Other whitespace is kept since
    /// it can matter in translated strings.
    fn read_line(&mut self) -> Result<String, QaError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QaError::Aborted);
        }
        let end = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(end);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<(), QaError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn ask_text(
        &mut self,
        question: &QuestionSpec,
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError> {
        let default_text = default.and_then(AnswerValue::as_text);
        loop {
            match default_text {
                Some(value) => write!(self.output, "{} [{value}]: ", question.prompt)?,
                None => write!(self.output, "{}: ", question.prompt)?,
            }
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(AnswerValue::Text(line));
            }
            if let Some(value) = default_text {
                return Ok(AnswerValue::from(value));
            }
            self.say(&tr("cli.prompt.value_required"))?;
        }
    }

    fn ask_confirm(
        &mut self,
        question: &QuestionSpec,
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError> {
        let default_flag = default.and_then(AnswerValue::as_flag);
        let suffix = match default_flag {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        };
        loop {
            write!(self.output, "{} {suffix}: ", question.prompt)?;
            let line = self.read_line()?.trim().to_string();
            if line.is_empty()
                && let Some(flag) = default_flag
            {
                return Ok(AnswerValue::Flag(flag));
            }
            match parse_confirmation(&line) {
                Some(flag) => return Ok(AnswerValue::Flag(flag)),
                None => self.say(&tr("cli.prompt.answer_yes_no"))?,
            }
        }
    }

    fn ask_choice(
        &mut self,
        question: &QuestionSpec,
        choices: &[LanguageChoice],
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError> {
        let default_key = default.and_then(AnswerValue::as_text);
        loop {
            writeln!(self.output, "{}:", question.prompt)?;
            for (idx, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}. {}", idx + 1, choice.display)?;
            }
            let label = tr("cli.prompt.select_number_or_value");
            match default_key {
                Some(value) => write!(self.output, "{label} [{value}]: ")?,
                None => write!(self.output, "{label}: ")?,
            }
            let line = self.read_line()?.trim().to_string();
            if line.is_empty() {
                if let Some(value) = default_key {
                    return Ok(AnswerValue::from(value));
                }
                self.say(&tr("cli.prompt.value_required"))?;
                continue;
            }
            if let Some(choice) = pick(choices, &line) {
                return Ok(AnswerValue::Text(choice.key.clone()));
            }
            self.say(&tr("cli.prompt.invalid_choice"))?;
        }
    }
}

/// Matches a 1-based number, a catalog key or a display name.
fn pick<'a>(choices: &'a [LanguageChoice], input: &str) -> Option<&'a LanguageChoice> {
    if let Ok(n) = input.parse::<usize>()
        && n > 0
    {
        return choices.get(n - 1);
    }
    choices
        .iter()
        .find(|choice| choice.key == input || choice.display == input)
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(
        &mut self,
        question: &QuestionSpec,
        default: Option<&AnswerValue>,
    ) -> Result<AnswerValue, QaError> {
        loop {
            let answer = match &question.kind {
                QuestionKind::Text => self.ask_text(question, default)?,
                QuestionKind::Confirm => self.ask_confirm(question, default)?,
                QuestionKind::Choice(choices) => self.ask_choice(question, choices, default)?,
            };
            match validate(question, &answer) {
                Ok(()) => return Ok(answer),
                Err(err @ (QaError::Validation { .. } | QaError::UnknownLanguage(_))) => {
                    self.say(&trf("cli.prompt.invalid_answer", &[&err.to_string()]))?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlf_qa::QuestionKey;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompt: TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).expect("utf8")
    }

    fn name_question() -> QuestionSpec {
        QuestionSpec::text(QuestionKey::Name, "What's the name of the language?")
            .validated(nlf_qa::Validator::LanguageName)
    }

    #[test]
    fn reasks_until_the_answer_validates() {
        let mut terminal = prompt("Klingon 2\n\nKlingon\n");
        let answer = terminal.ask(&name_question(), None).expect("answer");
        assert_eq!(answer, AnswerValue::from("Klingon"));
        let out = transcript(terminal);
        assert!(out.contains("Specify a valid language name"));
        assert!(out.contains("A value is required."));
    }

    #[test]
    fn empty_line_takes_the_default() {
        let question = QuestionSpec::text(QuestionKey::Id, "Specify the locale identifier (LCID)");
        let mut terminal = prompt("\n");
        let default = AnswerValue::from("1033");
        let answer = terminal.ask(&question, Some(&default)).expect("answer");
        assert_eq!(answer, default);
        assert!(transcript(terminal).contains("(LCID) [1033]: "));
    }

    #[test]
    fn confirm_shows_default_and_parses_words() {
        let question = QuestionSpec::confirm(QuestionKey::Rtl, "Is it a right-to-left (RTL) language?");
        let mut terminal = prompt("perhaps\nyes\n");
        let answer = terminal
            .ask(&question, Some(&AnswerValue::Flag(false)))
            .expect("answer");
        assert_eq!(answer, AnswerValue::Flag(true));
        let out = transcript(terminal);
        assert!(out.contains("[y/N]"));
        assert!(out.contains("Please answer yes or no."));
    }

    #[test]
    fn choices_accept_numbers_and_names() {
        let choices = vec![
            LanguageChoice {
                key: "English".into(),
                display: "English".into(),
            },
            LanguageChoice {
                key: "German".into(),
                display: "German".into(),
            },
        ];
        let question = QuestionSpec::choice(QuestionKey::Language, "Select", choices);

        let mut terminal = prompt("2\n");
        assert_eq!(
            terminal.ask(&question, None).expect("answer"),
            AnswerValue::from("German")
        );

        let mut terminal = prompt("7\nKlingon\nEnglish\n");
        assert_eq!(
            terminal.ask(&question, None).expect("answer"),
            AnswerValue::from("English")
        );
        assert!(transcript(terminal).contains("  2. German"));
    }

    #[test]
    fn text_answers_keep_surrounding_spaces() {
        let question = QuestionSpec::text(
            QuestionKey::String(nlf_language_data::StringKey::SpaceAvailable),
            "SpaceAvailable",
        );
        let mut terminal = prompt("\"Espace disponible : \" \r\n");
        assert_eq!(
            terminal.ask(&question, None).expect("answer"),
            AnswerValue::from("\"Espace disponible : \" ")
        );
    }

    #[test]
    fn end_of_input_aborts() {
        let mut terminal = prompt("");
        assert!(matches!(
            terminal.ask(&name_question(), None),
            Err(QaError::Aborted)
        ));
    }
}
