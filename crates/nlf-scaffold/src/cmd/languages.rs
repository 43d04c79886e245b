use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nlf_language_data::LanguageCatalog;
use serde::Serialize;

use crate::cmd::load_catalog;
use crate::config::Settings;
use crate::i18n::tr;

#[derive(Args, Debug, Clone, Default)]
pub struct LanguagesArgs {
    /// Language catalog to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LanguageSummary {
    pub name: String,
    pub display: String,
    pub id: u32,
    pub code_page: Option<u32>,
    pub rtl: bool,
}

pub fn run(args: LanguagesArgs, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref().or(settings.config.catalog.as_deref()))?;
    let summaries = summarize(&catalog);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    println!("{}", tr("cli.languages.header"));
    for summary in &summaries {
        let code_page = summary
            .code_page
            .map_or_else(|| "-".to_string(), |cp| cp.to_string());
        let direction = if summary.rtl { "RTL" } else { "LTR" };
        println!(
            "{:<20} {:<6} {:<9} {:<10} {}",
            summary.name, summary.id, code_page, direction, summary.display
        );
    }
    Ok(())
}

/// One entry per catalog language, in choice-list order.
pub fn summarize(catalog: &LanguageCatalog) -> Vec<LanguageSummary> {
    catalog
        .choices()
        .into_iter()
        .filter_map(|choice| {
            let record = catalog.lookup(&choice.key)?;
            Some(LanguageSummary {
                id: record.id,
                code_page: record.code_page,
                rtl: record.rtl,
                name: choice.key,
                display: choice.display,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_follow_choice_order() {
        let catalog = LanguageCatalog::bundled().expect("catalog");
        let summaries = summarize(&catalog);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(&names[..4], ["Afrikaans", "Albanian", "Arabic", "Armenian"]);
        assert!(summaries[2].rtl);

        let chinese = summaries
            .iter()
            .position(|s| s.name == "SimpChinese")
            .expect("simplified chinese");
        assert_eq!(names[chinese - 1], "Catalan");
        assert_eq!(summaries[chinese].display, "Chinese (Simplified)");
        assert_eq!(summaries[chinese].code_page, Some(936));
    }
}
