//! Readability scoring for rich-text blog posts.
//!
//! [`compute_readability`] runs the whole pipeline: the HTML body is reduced
//! to text, paragraphs and sentences, each heuristic in [`crate::analysis`]
//! is graded against a pair of [`Thresholds`], and the six scored criteria
//! are aggregated into a 0–100 score. Title and excerpt produce two extra
//! informational criteria that never affect the score.
//!
//! Labels and details are written in Portuguese, matching the prose the
//! heuristics are tuned for.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{self, structure};
use crate::html;
use crate::text;

/// Grading targets for the scored criteria.
///
/// Every criterion has a "good" bar and a looser "warn" bar; values between
/// the two grade as [`Status::Ok`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum share of sentences with a transition phrase (0.0–1.0).
    pub min_transitions: f64,
    /// Maximum share of passive sentences (0.0–1.0).
    pub max_passive: f64,
    /// Words per subheading still graded good.
    pub subheading_every: usize,
    /// Words per subheading still graded ok.
    pub subheading_warn: usize,
    /// Longest acceptable paragraph, in words.
    pub max_paragraph_words: usize,
    /// Longest sentence that still counts as short, in words.
    pub max_sentence_words: usize,
    /// Minimum share of short sentences graded good (0.0–1.0).
    pub min_short_sentences_share: f64,
    /// Minimum share of short sentences graded ok (0.0–1.0).
    pub min_short_sentences_warn: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_transitions: 0.30,
            max_passive: 0.10,
            subheading_every: 300,
            subheading_warn: 400,
            max_paragraph_words: 150,
            max_sentence_words: 30,
            min_short_sentences_share: 0.70,
            min_short_sentences_warn: 0.30,
        }
    }
}

/// Three-way grade of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Meets the good bar.
    Good,
    /// Misses the good bar but meets the warn bar.
    Ok,
    /// Misses both bars.
    Bad,
}

impl Status {
    /// Score weight of this status.
    pub const fn points(self) -> u32 {
        match self {
            Self::Good => 2,
            Self::Ok => 1,
            Self::Bad => 0,
        }
    }

    /// Returns the status as a lowercase string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade a metric from its good and warn predicates.
pub const fn grade_to_status(good: bool, warn: bool) -> Status {
    if good {
        Status::Good
    } else if warn {
        Status::Ok
    } else {
        Status::Bad
    }
}

/// Identifier of an evaluated criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Share of sentences with transition phrases.
    Transitions,
    /// Share of passive sentences.
    Passive,
    /// Words per `<h2>`/`<h3>`.
    Subheadings,
    /// Paragraphs over the length limit.
    Paragraphs,
    /// Share of short sentences.
    Sentences,
    /// Streaks of sentences starting with the same word.
    Consecutive,
    /// Title length (informational).
    Meta,
    /// Excerpt length (informational).
    Excerpt,
}

impl Criterion {
    /// Criteria that contribute to the score, in report order.
    pub const SCORED: [Self; 6] = [
        Self::Transitions,
        Self::Passive,
        Self::Subheadings,
        Self::Paragraphs,
        Self::Sentences,
        Self::Consecutive,
    ];

    /// Stable string id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transitions => "transitions",
            Self::Passive => "passive",
            Self::Subheadings => "subheadings",
            Self::Paragraphs => "paragraphs",
            Self::Sentences => "sentences",
            Self::Consecutive => "consecutive",
            Self::Meta => "meta",
            Self::Excerpt => "excerpt",
        }
    }

    /// Whether this criterion counts toward the score.
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Meta | Self::Excerpt)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CriterionResult {
    /// Which criterion this is.
    pub id: Criterion,
    /// Summary with the computed value.
    pub label: String,
    /// Grade.
    pub status: Status,
    /// Explanation of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CriterionResult {
    fn new(id: Criterion, label: impl Into<String>, status: Status) -> Self {
        Self {
            id,
            label: label.into(),
            status,
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Counts derived from the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Totals {
    /// Words in the body text.
    pub words_total: usize,
    /// Sentences in the body text.
    pub sentences: usize,
    /// Paragraphs in the body HTML.
    pub paragraphs: usize,
}

/// Result of readability scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Aggregate score, 0–100.
    pub score: u8,
    /// One entry per criterion, scored criteria first.
    pub items: Vec<CriterionResult>,
    /// Body counts.
    pub totals: Totals,
}

impl ReadabilityReport {
    /// Look up a criterion result by id.
    pub fn item(&self, id: Criterion) -> Option<&CriterionResult> {
        self.items.iter().find(|it| it.id == id)
    }

    /// Results that contribute to the score.
    pub fn scored_items(&self) -> impl Iterator<Item = &CriterionResult> {
        self.items.iter().filter(|it| it.id.is_scored())
    }
}

/// Excerpt length considered ideal, inclusive.
const EXCERPT_IDEAL_WORDS: std::ops::RangeInclusive<usize> = 8..=60;

/// Score a post body (HTML) together with its title and excerpt.
///
/// Never fails: any string input, including empty or malformed HTML,
/// produces a report. When body, title and excerpt are all empty the result
/// is a fixed report with score 0.
#[tracing::instrument(skip_all, fields(html_len = html.len(), title_len = title.len(), excerpt_len = excerpt.len()))]
pub fn compute_readability(
    html: &str,
    title: &str,
    excerpt: &str,
    targets: &Thresholds,
) -> ReadabilityReport {
    let body = html::html_to_text(html);
    let paragraphs = html::split_paragraphs(html);
    let sentences = text::split_sentences(&body);

    let words_total = text::count_words(&body);
    let title_words = text::count_words(title);
    let excerpt_words = text::count_words(excerpt);

    let no_body = words_total == 0;
    if no_body && title_words == 0 && excerpt_words == 0 {
        debug!("nothing to analyze");
        return empty_report(targets);
    }

    let transitions = analysis::transition_share(&sentences);
    let passive = analysis::passive_share(&body);
    let short_share = structure::short_sentence_share(&sentences, targets.max_sentence_words);
    let long_paragraphs = structure::long_paragraphs(&paragraphs, targets.max_paragraph_words);
    let words_per_subheading = structure::subheading_every(words_total, html);
    let consecutive = structure::consecutive_start_issues(&sentences);

    let items = vec![
        transitions_item(transitions, no_body, targets),
        passive_item(passive, no_body, targets),
        subheadings_item(words_per_subheading, no_body, targets),
        paragraphs_item(paragraphs.len(), long_paragraphs, targets),
        sentences_item(sentences.len(), short_share, targets),
        consecutive_item(sentences.len(), consecutive),
        meta_item(title_words),
        excerpt_item(excerpt_words),
    ];

    let totals = Totals {
        words_total,
        sentences: sentences.len(),
        paragraphs: paragraphs.len(),
    };
    let score = aggregate_score(&items);
    debug!(
        score,
        words = totals.words_total,
        sentences = totals.sentences,
        paragraphs = totals.paragraphs,
        "readability computed"
    );

    ReadabilityReport {
        score,
        items,
        totals,
    }
}

/// Fixed report for input with no words anywhere.
fn empty_report(targets: &Thresholds) -> ReadabilityReport {
    use Criterion::*;
    let items = vec![
        CriterionResult::new(Transitions, "Palavras de transição: 0.0%", Status::Bad),
        CriterionResult::new(Passive, "Voz passiva: 0.0%", Status::Bad),
        CriterionResult::new(
            Subheadings,
            "Distribuição de subtítulos: nenhum H2/H3 encontrado",
            Status::Bad,
        ),
        CriterionResult::new(
            Paragraphs,
            "Tamanho dos parágrafos: conteúdo insuficiente",
            Status::Bad,
        ),
        CriterionResult::new(
            Sentences,
            format!(
                "Tamanho das frases: 0% ≤ {} palavras",
                targets.max_sentence_words
            ),
            Status::Bad,
        ),
        CriterionResult::new(
            Consecutive,
            "Frases consecutivas: conteúdo insuficiente",
            Status::Bad,
        ),
        CriterionResult::new(Meta, "Título: 0 palavras", Status::Ok),
        CriterionResult::new(Excerpt, "Resumo: 0 palavras", Status::Bad),
    ];
    ReadabilityReport {
        score: 0,
        items,
        totals: Totals::default(),
    }
}

fn transitions_item(share: f64, no_body: bool, targets: &Thresholds) -> CriterionResult {
    let warn_floor = (targets.min_transitions - 0.1).min(0.25);
    let status = if no_body {
        Status::Bad
    } else {
        grade_to_status(share >= targets.min_transitions, share >= warn_floor)
    };
    CriterionResult::new(
        Criterion::Transitions,
        format!("Palavras de transição: {}%", percent(share, 1)),
        status,
    )
    .with_details(format!(
        "Meta ≥ {}%. Exemplos: \"além disso\", \"portanto\", \"no entanto\", \"assim\", \"ou seja\"...",
        whole_percent(targets.min_transitions)
    ))
}

fn passive_item(share: f64, no_body: bool, targets: &Thresholds) -> CriterionResult {
    let status = if no_body {
        Status::Bad
    } else {
        grade_to_status(
            share <= targets.max_passive,
            share <= targets.max_passive + 0.05,
        )
    };
    CriterionResult::new(
        Criterion::Passive,
        format!("Voz passiva: {}%", percent(share, 1)),
        status,
    )
    .with_details(format!(
        "Meta ≤ {}%. Prefira voz ativa quando possível.",
        whole_percent(targets.max_passive)
    ))
}

fn subheadings_item(ratio: f64, no_body: bool, targets: &Thresholds) -> CriterionResult {
    let (label, status) = if ratio.is_infinite() {
        (
            "Distribuição de subtítulos: nenhum H2/H3 encontrado".to_string(),
            if no_body { Status::Bad } else { Status::Ok },
        )
    } else {
        (
            format!(
                "Distribuição de subtítulos: ~{:.0} palavras por H2/H3",
                ratio.round()
            ),
            grade_to_status(
                ratio <= targets.subheading_every as f64,
                ratio <= targets.subheading_warn as f64,
            ),
        )
    };
    CriterionResult::new(Criterion::Subheadings, label, status).with_details(format!(
        "Use ao menos um subtítulo a cada ~{} palavras.",
        targets.subheading_every
    ))
}

fn paragraphs_item(paragraphs: usize, long: usize, targets: &Thresholds) -> CriterionResult {
    let (label, status) = match (paragraphs, long) {
        (0, _) => (
            "Tamanho dos parágrafos: conteúdo insuficiente".to_string(),
            Status::Bad,
        ),
        (_, 0) => ("Tamanho dos parágrafos: ok".to_string(), Status::Good),
        (_, n) => (
            format!("Parágrafos muito longos: {n}"),
            grade_to_status(false, n <= 1),
        ),
    };
    CriterionResult::new(Criterion::Paragraphs, label, status).with_details(format!(
        "Meta: até {} palavras por parágrafo.",
        targets.max_paragraph_words
    ))
}

fn sentences_item(sentences: usize, short_share: f64, targets: &Thresholds) -> CriterionResult {
    let status = if sentences == 0 {
        Status::Bad
    } else {
        grade_to_status(
            short_share >= targets.min_short_sentences_share,
            short_share >= targets.min_short_sentences_warn,
        )
    };
    CriterionResult::new(
        Criterion::Sentences,
        format!(
            "Tamanho das frases: {}% ≤ {} palavras",
            percent(short_share, 0),
            targets.max_sentence_words
        ),
        status,
    )
    .with_details(format!(
        "Meta: pelo menos {}% das frases com ≤ {} palavras.",
        whole_percent(targets.min_short_sentences_share),
        targets.max_sentence_words
    ))
}

fn consecutive_item(sentences: usize, issues: usize) -> CriterionResult {
    let (label, status) = if sentences < 3 {
        (
            "Frases consecutivas: conteúdo insuficiente".to_string(),
            Status::Bad,
        )
    } else if issues == 0 {
        ("Frases consecutivas: ok".to_string(), Status::Good)
    } else {
        (
            format!("Inícios repetidos: {issues}"),
            grade_to_status(false, issues <= 1),
        )
    };
    CriterionResult::new(Criterion::Consecutive, label, status)
        .with_details("Evite 3+ frases seguidas começando com a mesma palavra.")
}

fn meta_item(title_words: usize) -> CriterionResult {
    let status = if title_words == 0 {
        Status::Ok
    } else {
        Status::Good
    };
    CriterionResult::new(
        Criterion::Meta,
        format!("Título: {title_words} palavras"),
        status,
    )
}

fn excerpt_item(excerpt_words: usize) -> CriterionResult {
    let status = if excerpt_words == 0 {
        Status::Bad
    } else {
        grade_to_status(EXCERPT_IDEAL_WORDS.contains(&excerpt_words), true)
    };
    CriterionResult::new(
        Criterion::Excerpt,
        format!("Resumo: {excerpt_words} palavras"),
        status,
    )
    .with_details("Ideal entre ~8 e 60 palavras (seu campo tem limite de caracteres).")
}

/// Points of the scored criteria over the maximum, as a rounded percentage.
fn aggregate_score(items: &[CriterionResult]) -> u8 {
    let points: u32 = items
        .iter()
        .filter(|it| it.id.is_scored())
        .map(|it| it.status.points())
        .sum();
    let max = Status::Good.points() * Criterion::SCORED.len() as u32;
    let fraction = f64::from(points) / f64::from(max);
    (fraction * 100.0).round() as u8
}

/// Format a 0.0–1.0 share as a percentage with `decimals` places,
/// rounding halves away from zero.
fn percent(share: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let value = (share * 100.0 * factor).round() / factor;
    format!("{value:.decimals$}")
}

/// Format a 0.0–1.0 fraction as a whole percentage, rounding halves away
/// from zero. Target explanations in item details use this form.
pub fn whole_percent(fraction: f64) -> String {
    format!("{:.0}", (fraction * 100.0).round())
}
