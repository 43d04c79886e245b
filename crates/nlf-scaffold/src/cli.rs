use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use crate::cmd::{self, languages::LanguagesArgs, new::NewArgs};
use crate::config::Settings;
use crate::i18n;

#[derive(Parser, Debug)]
#[command(
    name = "nlf-scaffold",
    about = "Generate NSIS language files by answering a few questions",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding config.toml and remembered answers
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Message language (e.g. `de`, `fr_FR.UTF-8`); defaults to the environment
    #[arg(long, value_name = "LOCALE", global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new language file
    New(NewArgs),
    /// List the languages available as templates
    Languages(LanguagesArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    i18n::init(cli.locale.as_deref());
    let settings = Settings::load(cli.config_dir.as_deref())?;
    match cli.command {
        Commands::New(args) => cmd::new::run(args, &settings),
        Commands::Languages(args) => cmd::languages::run(args, &settings),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
