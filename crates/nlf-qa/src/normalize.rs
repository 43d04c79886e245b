use std::fmt;

pub const NLF_EXTENSION: &str = "nlf";

/// Pascal-case identifier derived from the language label; the output file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.{NLF_EXTENSION}", self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const MAX_PASSES: usize = 8;

/// Converts free text into a Pascal-case identifier.
///
/// Words are separated by anything that is not a letter or ASCII digit, and
/// by case changes (`myLang`, `HTTPServer`). Each word keeps its first letter
/// uppercased and the rest lowercased. A word that starts with a digit is
/// joined with `_` so the boundary survives another pass.
pub fn normalize(raw: &str) -> CanonicalName {
    let mut name = pascal_case(raw);
    // Joined single-letter words ("a b" -> "AB") split differently on the
    // next pass; settle on the fixed point.
    for _ in 0..MAX_PASSES {
        let next = pascal_case(&name);
        if next == name {
            break;
        }
        name = next;
    }
    CanonicalName(name)
}

fn pascal_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (idx, word) in split_words(raw).iter().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if idx > 0 && first.is_ascii_digit() {
            out.push('_');
            out.push(first);
        } else {
            out.extend(first.to_uppercase());
        }
        out.extend(chars.flat_map(char::to_lowercase));
    }
    out
}

/// NLF direction line: `RTL` for right-to-left, the literal `false` otherwise.
pub fn direction_sentinel(rtl: bool) -> &'static str {
    if rtl { "RTL" } else { "false" }
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (idx, &c) in chars.iter().enumerate() {
        if !is_word_char(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && idx > 0 {
            let prev = chars[idx - 1];
            let next = chars.get(idx + 1).copied();
            let lower_to_upper =
                (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            if lower_to_upper || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
