//! Structural heuristics: repeated sentence starts, heading density,
//! paragraph and sentence lengths.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;

use super::share;

/// Opening `<h2` or `<h3`; the word boundary after it is checked by hand.
static SUBHEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[23]").expect("valid regex"));

/// Run length at which a streak of equal sentence starts becomes an issue.
const REPEATED_START_RUN: usize = 3;

/// Count streaks of three or more consecutive sentences starting with the
/// same word.
///
/// A streak is counted once, when it reaches three sentences; longer streaks
/// do not add further issues. Sentences that do not start with a word are
/// skipped without breaking or resetting the current streak.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn consecutive_start_issues(sentences: &[String]) -> usize {
    let mut issues = 0;
    let mut run = 1;

    for pair in sentences.windows(2) {
        let prev = text::first_word(&pair[0]);
        let curr = text::first_word(&pair[1]);
        if prev.is_empty() || curr.is_empty() {
            continue;
        }
        if prev == curr {
            run += 1;
            if run == REPEATED_START_RUN {
                issues += 1;
            }
        } else {
            run = 1;
        }
    }

    issues
}

/// Count `<h2>`/`<h3>` opening tags in raw HTML (case-insensitive).
pub fn count_subheadings(html: &str) -> usize {
    SUBHEADING_OPEN
        .find_iter(html)
        .filter(|m| {
            !html[m.end()..].starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
        })
        .count()
}

/// Words per subheading, or [`f64::INFINITY`] when the HTML has no
/// `<h2>`/`<h3>` at all.
#[tracing::instrument(skip(html), fields(html_len = html.len()))]
pub fn subheading_every(words_total: usize, html: &str) -> f64 {
    match count_subheadings(html) {
        0 => f64::INFINITY,
        headings => words_total as f64 / headings as f64,
    }
}

/// Number of paragraphs with more than `max_words` words.
pub fn long_paragraphs(paragraphs: &[String], max_words: usize) -> usize {
    paragraphs
        .iter()
        .filter(|p| text::count_words(p) > max_words)
        .count()
}

/// Fraction of sentences with at most `max_words` words.
///
/// Returns `0.0` when there are no sentences.
pub fn short_sentence_share(sentences: &[String], max_words: usize) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let long = sentences
        .iter()
        .filter(|s| text::count_words(s) > max_words)
        .count();
    1.0 - share(long, sentences.len())
}
