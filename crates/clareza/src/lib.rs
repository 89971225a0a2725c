//! Library interface for the `clareza` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`observability`] - Logging setup

pub mod commands;
pub mod observability;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                       Log filter (e.g., debug, clareza_core=trace)
    CLAREZA_LOG_PATH               Explicit log file path
    CLAREZA_LOG_DIR                Log directory (daily JSONL files)
    CLAREZA_MIN_SCORE              Minimum score for `score`
    CLAREZA_TARGETS__<FIELD>       Override a grading target (e.g., CLAREZA_TARGETS__MAX_PASSIVE=0.2)
";

/// Command-line interface definition for clareza.
#[derive(Parser)]
#[command(name = "clareza")]
#[command(about = "Readability scoring for Portuguese blog posts", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Score the readability of an HTML post body
    Score(commands::score::ScoreArgs),

    /// Show package information and effective configuration
    Info(commands::info::InfoArgs),

    /// Print the JSON Schema of the score report
    Schema(commands::schema::SchemaArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn score_flags_parse_into_targets() {
        let cli = Cli::try_parse_from([
            "clareza",
            "-vv",
            "score",
            "post.html",
            "--max-passive",
            "0.2",
            "--min-score",
            "70",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Score(args)) = cli.command else {
            panic!("expected score subcommand");
        };
        assert_eq!(args.file, "post.html");
        assert_eq!(args.min_score, Some(70));
        assert_eq!(args.targets.max_passive, Some(0.2));
        assert!(args.targets.max_sentence_words.is_none());
    }
}
