use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").expect("Failed to compile sentence pattern"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Failed to compile word pattern"));

/// Lazily yields sentences: a run of non-terminators closed by one of `.`, `!` or `?`.
///
/// Text after the last terminator is not a sentence.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE.find_iter(text).map(|m| m.as_str())
}

/// Lazily yields lowercased runs of word characters.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

pub fn tokenize(text: &str) -> (Vec<&str>, Vec<String>) {
    (sentences(text).collect(), words(text).collect())
}
