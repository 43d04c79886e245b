use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use nlf_qa::{
    AnswerRecord, AnswerSchema, AnswersPrompt, OutputDocument, PriorAnswers, PromptRunner,
    RunOptions, TemplateRenderer,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::atomic::write_atomic;
use crate::cmd::load_catalog;
use crate::config::Settings;
use crate::i18n::{tr, trf};
use crate::prompt::TerminalPrompt;
use crate::store::AnswerStore;

#[derive(Args, Debug, Clone, Default)]
pub struct NewArgs {
    /// Directory the language file is written to
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
    /// JSON answers keyed by question; runs without prompting
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,
    /// Language catalog to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
    /// Remember translated strings for the next run
    #[arg(long)]
    pub store_strings: bool,
    /// Do not remember this run's answers
    #[arg(long)]
    pub no_remember: bool,
    /// Print the language file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Asks every question, renders the language file and writes it.
pub fn run(args: NewArgs, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref().or(settings.config.catalog.as_deref()))?;
    let schema = AnswerSchema::new(&catalog);
    let store_strings = args.store_strings || settings.config.store_strings;
    let store = AnswerStore::new(settings.answers_file());
    let prior = load_prior(&store);

    let runner = PromptRunner::new(&schema, &catalog)
        .with_prior(&prior)
        .with_options(RunOptions { store_strings });
    let record = collect_answers(&runner, args.answers.as_deref())?;

    let final_answers = record.finalize().context(tr("cli.new.run_failed"))?;
    let document = TemplateRenderer::new()?.render(&final_answers)?;

    if args.dry_run {
        print!("{}", document.contents);
        return Ok(());
    }

    let out_dir = args
        .out
        .or_else(|| settings.config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = write_document(&out_dir, &document)?;
    println!("{}", trf("cli.new.written", &[&path.display().to_string()]));

    if !args.no_remember {
        remember(&store, prior.updated_with(&schema, &record, store_strings));
    }
    Ok(())
}

fn collect_answers(runner: &PromptRunner<'_>, answers: Option<&Path>) -> Result<AnswerRecord> {
    let record = match answers {
        Some(path) => {
            let mut prompt = load_answers(path)?;
            let record = runner.run(&mut prompt);
            for key in prompt.unused() {
                warn!(%key, "answer was not used");
            }
            record
        }
        None if io::stdin().is_terminal() && io::stdout().is_terminal() => {
            println!("{}", tr("cli.new.intro"));
            runner.run(&mut TerminalPrompt::stdio())
        }
        None => bail!(tr("cli.new.answers_required")),
    };
    record.context(tr("cli.new.run_failed"))
}

fn load_answers(path: &Path) -> Result<AnswersPrompt> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path)
        .with_context(|| trf("cli.new.answers_read_failed", &[&display]))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| trf("cli.new.answers_invalid", &[&display]))?;
    AnswersPrompt::from_value(value).with_context(|| trf("cli.new.answers_invalid", &[&display]))
}

fn load_prior(store: &AnswerStore) -> PriorAnswers {
    store.load().unwrap_or_else(|err| {
        warn!(%err, "ignoring remembered answers");
        PriorAnswers::new()
    })
}

/// Overwrites any previous file of the same name.
fn write_document(out_dir: &Path, document: &OutputDocument) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| trf("cli.new.create_dir_failed", &[&out_dir.display().to_string()]))?;
    let path = out_dir.join(&document.file_name);
    write_atomic(&path, document.contents.as_bytes())
        .with_context(|| trf("cli.new.write_failed", &[&path.display().to_string()]))?;
    info!(path = %path.display(), bytes = document.contents.len(), "language file written");
    Ok(path)
}

fn remember(store: &AnswerStore, answers: PriorAnswers) {
    if let Err(err) = store.save(&answers) {
        eprintln!("{}", trf("cli.new.remember_failed", &[&err.to_string()]));
    }
}
