use std::collections::BTreeMap;
use std::env;

use once_cell::sync::{Lazy, OnceCell};
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en";

/// Message bundles compiled into the binary. English holds every key; the
/// other bundles override it key by key.
const BUNDLES: &[(&str, &str)] = &[
    ("de", include_str!("../i18n/de.json")),
    ("en", include_str!("../i18n/en.json")),
    ("es", include_str!("../i18n/es.json")),
    ("fr", include_str!("../i18n/fr.json")),
];

static EN_MESSAGES: Lazy<BTreeMap<String, String>> = Lazy::new(|| parse_bundle(DEFAULT_LOCALE));
static SELECTED_LOCALE: OnceCell<String> = OnceCell::new();
static LOCALE_MESSAGES: OnceCell<BTreeMap<String, String>> = OnceCell::new();

pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    BUNDLES.iter().map(|(locale, _)| *locale)
}

fn parse_bundle(locale: &str) -> BTreeMap<String, String> {
    let Some((_, raw)) = BUNDLES.iter().find(|(name, _)| *name == locale) else {
        return BTreeMap::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|err| {
        tracing::warn!(locale, error = %err, "ignoring malformed message bundle");
        BTreeMap::new()
    })
}

fn normalize_locale(raw: &str) -> Option<String> {
    let mut cleaned = raw.trim();
    if let Some((head, _)) = cleaned.split_once('.') {
        cleaned = head;
    }
    if let Some((head, _)) = cleaned.split_once('@') {
        cleaned = head;
    }
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .ok()
        .map(|lid| lid.to_string())
}

/// Bundle serving `candidate`: an exact match, else its base language.
fn resolve_supported_locale(candidate: &str) -> Option<&'static str> {
    let norm = normalize_locale(candidate)?;
    let base = norm.split('-').next().unwrap_or_default().to_ascii_lowercase();
    supported_locales()
        .find(|supported| *supported == norm)
        .or_else(|| supported_locales().find(|supported| *supported == base))
}

fn env_locales() -> impl Iterator<Item = String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .filter(|value| !value.trim().is_empty())
}

/// First candidate with a bundle wins; English otherwise.
pub fn select_locale(candidates: impl IntoIterator<Item = String>) -> &'static str {
    candidates
        .into_iter()
        .find_map(|candidate| resolve_supported_locale(&candidate))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Picks the message locale from `--locale`, the environment, then the OS.
pub fn init(cli_locale: Option<&str>) {
    let candidates = cli_locale
        .map(str::to_string)
        .into_iter()
        .chain(env_locales())
        .chain(sys_locale::get_locale());
    let locale = select_locale(candidates);
    tracing::debug!(locale, "selected message locale");
    let _ = SELECTED_LOCALE.set(locale.to_string());
    let _ = LOCALE_MESSAGES.set(messages_for(locale));
}

pub fn selected_locale() -> &'static str {
    SELECTED_LOCALE
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOCALE)
}

/// English messages overlaid with the bundle for `locale`.
pub fn messages_for(locale: &str) -> BTreeMap<String, String> {
    let mut merged = EN_MESSAGES.clone();
    if locale != DEFAULT_LOCALE {
        merged.extend(parse_bundle(locale));
    }
    merged
}

/// Message for `key`, or the key itself when no bundle has it.
pub fn tr(key: &str) -> String {
    LOCALE_MESSAGES
        .get()
        .and_then(|messages| messages.get(key))
        .or_else(|| EN_MESSAGES.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Like [`tr`], substituting each `{}` in order.
pub fn trf(key: &str, args: &[&str]) -> String {
    let mut msg = tr(key);
    for arg in args {
        msg = msg.replacen("{}", arg, 1);
    }
    msg
}
