//! Score command: readability grading of an HTML post body.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use clareza_core::{ReadabilityReport, Status, Thresholds, compute_readability};
use owo_colors::{OwoColorize, Stream, Style};
use tracing::{debug, instrument};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// HTML file with the post body (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Post title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Post excerpt (meta description).
    #[arg(long, default_value = "")]
    pub excerpt: String,

    /// Fail when the score is below this value.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Show the target explanation under each criterion.
    #[arg(long)]
    pub details: bool,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Per-criterion target overrides. Unset flags keep the configured value.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Minimum share of sentences with a transition phrase (0.0-1.0).
    #[arg(long)]
    pub min_transitions: Option<f64>,

    /// Maximum share of passive sentences (0.0-1.0).
    #[arg(long)]
    pub max_passive: Option<f64>,

    /// Words per subheading still graded good.
    #[arg(long)]
    pub subheading_every: Option<usize>,

    /// Words per subheading still graded ok.
    #[arg(long)]
    pub subheading_warn: Option<usize>,

    /// Longest acceptable paragraph, in words.
    #[arg(long)]
    pub max_paragraph_words: Option<usize>,

    /// Longest sentence that still counts as short, in words.
    #[arg(long)]
    pub max_sentence_words: Option<usize>,

    /// Minimum share of short sentences graded good (0.0-1.0).
    #[arg(long)]
    pub min_short_sentences_share: Option<f64>,

    /// Minimum share of short sentences graded ok (0.0-1.0).
    #[arg(long)]
    pub min_short_sentences_warn: Option<f64>,
}

impl TargetArgs {
    /// Layer the flags that were given over `base`.
    pub fn apply(&self, base: &Thresholds) -> Thresholds {
        Thresholds {
            min_transitions: self.min_transitions.unwrap_or(base.min_transitions),
            max_passive: self.max_passive.unwrap_or(base.max_passive),
            subheading_every: self.subheading_every.unwrap_or(base.subheading_every),
            subheading_warn: self.subheading_warn.unwrap_or(base.subheading_warn),
            max_paragraph_words: self
                .max_paragraph_words
                .unwrap_or(base.max_paragraph_words),
            max_sentence_words: self.max_sentence_words.unwrap_or(base.max_sentence_words),
            min_short_sentences_share: self
                .min_short_sentences_share
                .unwrap_or(base.min_short_sentences_share),
            min_short_sentences_warn: self
                .min_short_sentences_warn
                .unwrap_or(base.min_short_sentences_warn),
        }
    }
}

/// Score an HTML file and print the report.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_targets: &Thresholds,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let targets = args.targets.apply(config_targets);
    let min_score = args.min_score.or(config_min_score);

    let report = compute_readability(&content, &args.title, &args.excerpt, &targets);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&args.file, &report, args.details));
    }

    if let Some(min) = min_score
        && report.score < min
    {
        bail!(
            "{} scores {} (min: {}). Review the criteria marked as bad.",
            args.file,
            report.score,
            min,
        );
    }

    Ok(())
}

/// Style `text` for stdout, honoring `--color` and terminal detection.
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

fn marker(status: Status) -> String {
    match status {
        Status::Good => paint("✓", Style::new().green()),
        Status::Ok => paint("!", Style::new().yellow()),
        Status::Bad => paint("✗", Style::new().red()),
    }
}

fn render_text(file: &Utf8Path, report: &ReadabilityReport, details: bool) -> String {
    let score_style = match report.score {
        80.. => Style::new().green().bold(),
        50..=79 => Style::new().yellow().bold(),
        _ => Style::new().red().bold(),
    };
    let totals = format!(
        "{} palavras · {} frases · {} parágrafos",
        report.totals.words_total, report.totals.sentences, report.totals.paragraphs
    );

    let mut out = format!(
        "{}: {}\n{}\n\n",
        paint(file.as_str(), Style::new().bold()),
        paint(&format!("{}/100", report.score), score_style),
        paint(&totals, Style::new().dimmed()),
    );
    for item in &report.items {
        out.push_str(&format!("  {} {}\n", marker(item.status), item.label));
        if details && let Some(ref text) = item.details {
            out.push_str(&format!("    {}\n", paint(text, Style::new().dimmed())));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "<h2>Intro</h2><p>Além disso, o texto é curto. Ele funciona bem.</p>";

    fn args_for(file: Utf8PathBuf) -> ScoreArgs {
        ScoreArgs {
            file,
            title: "Título".to_string(),
            excerpt: String::new(),
            min_score: None,
            details: false,
            targets: TargetArgs::default(),
        }
    }

    fn write_post(dir: &tempfile::TempDir) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("post.html")).unwrap();
        std::fs::write(&path, POST).unwrap();
        path
    }

    #[test]
    fn flags_override_only_what_they_set() {
        let base = Thresholds {
            max_passive: 0.2,
            ..Thresholds::default()
        };
        let flags = TargetArgs {
            max_sentence_words: Some(20),
            ..TargetArgs::default()
        };
        let merged = flags.apply(&base);
        assert_eq!(merged.max_sentence_words, 20);
        assert!((merged.max_passive - 0.2).abs() < f64::EPSILON);
        assert_eq!(merged.subheading_every, 300);
    }

    #[test]
    fn scores_file_as_text_and_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_post(&tmp);
        assert!(cmd_score(args_for(path.clone()), false, &Thresholds::default(), None, None).is_ok());
        assert!(cmd_score(args_for(path), true, &Thresholds::default(), None, None).is_ok());
    }

    #[test]
    fn min_score_gates() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_post(&tmp);
        let err = cmd_score(args_for(path.clone()), false, &Thresholds::default(), Some(100), None)
            .unwrap_err()
            .to_string();
        assert!(err.contains("post.html"), "{err}");
        assert!(err.contains("(min: 100)"), "{err}");

        assert!(cmd_score(args_for(path), false, &Thresholds::default(), Some(0), None).is_ok());
    }

    #[test]
    fn flag_min_score_beats_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_post(&tmp);
        let mut args = args_for(path);
        args.min_score = Some(0);
        assert!(cmd_score(args, false, &Thresholds::default(), Some(100), None).is_ok());
    }

    #[test]
    fn text_lists_totals_and_every_item() {
        owo_colors::set_override(false);
        let report = compute_readability(POST, "Título", "", &Thresholds::default());
        let text = render_text(Utf8Path::new("post.html"), &report, true);
        assert!(text.starts_with(&format!("post.html: {}/100", report.score)));
        assert!(text.contains("10 palavras · 2 frases · 2 parágrafos"));
        for item in &report.items {
            assert!(text.contains(&item.label));
        }
        // Details are printed for items that carry them.
        assert!(text.contains("Prefira voz ativa"), "{text}");
    }
}
