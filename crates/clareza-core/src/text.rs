//! Text processing utilities.
//!
//! Provides sentence splitting, word counting and first-word extraction for
//! use by analysis modules.
//!
//! Sentence splitting is a plain punctuation heuristic. Abbreviations
//! ("Sr. Silva"), decimal numbers written with a trailing space and quoted
//! punctuation all produce extra boundaries. Scores are calibrated against
//! this behavior, so it is kept as is.

use std::sync::LazyLock;

use regex::Regex;

/// Sentence terminator followed by the whitespace run that ends the sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// A word: letters (ASCII and Latin-1 accented), digits, optionally joined by hyphens.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z\x{C0}-\x{FF}0-9]+(?:-[A-Za-z\x{C0}-\x{FF}0-9]+)*").expect("valid regex")
});

static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\x{C0}-\x{FF}0-9]+").expect("valid regex"));

/// Split text into sentences.
///
/// A boundary is any whitespace run directly after `.`, `!` or `?`. The
/// punctuation stays with the sentence it ends. Pieces are trimmed and empty
/// ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Terminators are single-byte, so the whitespace starts one byte in.
        push_trimmed(&mut sentences, &text[start..=m.start()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Count words and hyphenated compounds. Punctuation and symbols do not count.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// The lowercased leading word of a sentence, or an empty string when the
/// sentence does not start with a letter or digit.
pub fn first_word(sentence: &str) -> String {
    LEADING_WORD
        .find(sentence)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("Isto é uma frase. Isto é outra frase.");
        assert_eq!(sentences, vec!["Isto é uma frase.", "Isto é outra frase."]);
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Sério? Não acredito!  Incrível.\nFim");
        assert_eq!(sentences, vec!["Sério?", "Não acredito!", "Incrível.", "Fim"]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let sentences = split_sentences("Versão 2.5 chegou.Sem espaço");
        assert_eq!(sentences, vec!["Versão 2.5 chegou.Sem espaço"]);
    }

    #[test]
    fn abbreviations_are_split() {
        let sentences = split_sentences("O Sr. Silva chegou. Ele saiu.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "O Sr.");
    }

    #[test]
    fn repeated_terminators_stay_together() {
        let sentences = split_sentences("Espera... Sim?! Ok.");
        assert_eq!(sentences, vec!["Espera...", "Sim?!", "Ok."]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert_eq!(split_sentences(". "), vec!["."]);
    }

    #[test]
    fn counts_accented_and_hyphenated_words() {
        assert_eq!(count_words("Olá, mundo! Teste-piloto."), 3);
        assert_eq!(count_words("São Paulo, 2024: guarda-chuva e pé-de-moleque."), 6);
    }

    #[test]
    fn punctuation_and_symbols_do_not_count() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("— ... !!! - @ #"), 0);
        assert_eq!(count_words("a - b"), 2);
    }

    #[test]
    fn characters_outside_latin1_break_words() {
        // 'ř' is outside the accented range, splitting the token in two.
        assert_eq!(count_words("Dvořák"), 2);
    }

    #[test]
    fn first_word_is_lowercased() {
        assert_eq!(first_word("Além disso, funciona."), "além");
        assert_eq!(first_word("2024 foi bom."), "2024");
        assert_eq!(first_word("\"Citação\" aqui."), "");
        assert_eq!(first_word(""), "");
    }
}
