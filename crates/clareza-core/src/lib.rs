//! Core library for clareza.
//!
//! This crate provides the readability engine used by the `clareza` CLI and
//! any downstream consumers (editors, publishing pipelines) that need to score
//! a draft blog post before or after an edit.
//!
//! # Modules
//!
//! - [`readability`] - Score aggregation, criteria and report types
//! - [`analysis`] - Individual heuristics (transitions, passive voice, structure)
//! - [`html`] - HTML to text and HTML to paragraph extraction
//! - [`text`] - Sentence splitting and word counting
//! - [`word_lists`] - Transition lexicon and passive voice word tables
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use clareza_core::{Thresholds, compute_readability};
//!
//! let report = compute_readability(
//!     "<h2>Introdução</h2><p>Além disso, o texto é curto.</p>",
//!     "Guia rápido",
//!     "",
//!     &Thresholds::default(),
//! );
//! assert!(report.score <= 100);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod html;
pub mod readability;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use readability::{
    Criterion, CriterionResult, ReadabilityReport, Status, Thresholds, Totals, compute_readability,
    whole_percent,
};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
