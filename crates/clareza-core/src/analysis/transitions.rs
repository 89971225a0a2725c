//! Transition word usage.

use std::sync::LazyLock;

use regex::Regex;

use crate::word_lists::TRANSITIONS;

use super::share;

/// Any lexicon phrase, bounded on the left by the start of the sentence or a
/// separator and on the right by whitespace or punctuation.
static TRANSITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = TRANSITIONS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?:^|[,\-–;:()\s])(?:{alternatives})(?:\s|[,.;:!?])"))
        .expect("valid regex")
});

/// Whether a sentence contains at least one transition phrase.
pub fn has_transition(sentence: &str) -> bool {
    TRANSITION_PATTERN.is_match(sentence)
}

/// Fraction of sentences containing at least one transition phrase.
///
/// Returns `0.0` when there are no sentences.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn transition_share(sentences: &[String]) -> f64 {
    let hits = sentences.iter().filter(|s| has_transition(s)).count();
    share(hits, sentences.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn half_of_sentences_with_transitions() {
        let share = transition_share(&sentences(&[
            "Além disso, isso funciona.",
            "Gatos são legais.",
        ]));
        assert!((share - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input() {
        assert!(transition_share(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn case_insensitive() {
        assert!(has_transition("PORTANTO, seguimos."));
        assert!(has_transition("E ALÉM DISSO, seguimos."));
    }

    #[test]
    fn requires_left_boundary() {
        // "assim" inside "Cassim" is not a transition.
        assert!(!has_transition("Cassim chegou."));
        assert!(has_transition("(assim, chegou)"));
        assert!(has_transition("Ele veio–assim, chegou."));
    }

    #[test]
    fn requires_right_boundary() {
        // "logo" followed by a letter is part of another word.
        assert!(!has_transition("O logotipo mudou."));
        assert!(has_transition("Choveu, logo saí."));
        assert!(has_transition("Fiquei em casa, logo."));
    }

    #[test]
    fn phrase_at_end_of_sentence_without_punctuation_is_missed() {
        // The right boundary needs a trailing character.
        assert!(!has_transition("Então"));
        assert!(has_transition("Então."));
    }

    #[test]
    fn short_connectives_match_as_words() {
        assert!(has_transition("Se chover, fico."));
        assert!(has_transition("Vou para casa."));
    }
}
