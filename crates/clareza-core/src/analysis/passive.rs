//! Passive voice estimation.
//!
//! A single regex looks for an auxiliary verb followed by a token with a past
//! participle ending ("foi escrito", "são analisadas"). This is a coarse
//! proxy: it misses passives with intervening words and flags some predicate
//! adjectives ("está muito", "era alto"). No grammatical parsing is attempted.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;
use crate::word_lists::{PARTICIPLE_SUFFIXES, PASSIVE_AUXILIARIES};

use super::share;

/// Auxiliary + whitespace + participle-like token.
///
/// Word boundaries are ASCII-only (`[A-Za-z0-9_]` are word characters), so an
/// accented letter next to the match still counts as a boundary.
static PASSIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let auxiliaries = PASSIVE_AUXILIARIES.join("|");
    let suffixes = PARTICIPLE_SUFFIXES.join("|");
    Regex::new(&format!(
        r"(?i)(?:^|[^A-Za-z0-9_])(?:{auxiliaries})\s+[A-Za-z\x{{C0}}-\x{{FF}}]+(?:{suffixes})(?:$|[^A-Za-z0-9_])"
    ))
    .expect("valid regex")
});

/// Whether a sentence looks like a passive construction.
pub fn is_passive(sentence: &str) -> bool {
    PASSIVE_PATTERN.is_match(sentence)
}

/// Fraction of sentences in `text` that look passive.
///
/// The text is split into sentences here rather than reusing a caller's
/// split. Returns `0.0` when there are no sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn passive_share(text: &str) -> f64 {
    let sentences = text::split_sentences(text);
    let hits = sentences.iter().filter(|s| is_passive(s)).count();
    share(hits, sentences.len())
}
