//! Readability heuristics.
//!
//! Each heuristic is a pure function in its own module, fed by the shared
//! text pipeline in [`crate::html`] and [`crate::text`]. The aggregation into
//! graded criteria lives in [`crate::readability`]; callers can also invoke
//! the heuristics individually.

pub mod passive;
pub mod structure;
pub mod transitions;

pub use passive::passive_share;
pub use structure::{
    consecutive_start_issues, long_paragraphs, short_sentence_share, subheading_every,
};
pub use transitions::transition_share;

/// Fraction of `hits` over `total`, or `0.0` when there is nothing to count.
pub(crate) fn share(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
