//! Logging setup.
//!
//! Human-readable logs always go to stderr so stdout stays clean for scores
//! and JSON. When a log directory or file is configured, a second JSON layer
//! writes structured records through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable naming an explicit log file.
pub const LOG_PATH_ENV: &str = "CLAREZA_LOG_PATH";

/// Environment variable naming a log directory.
pub const LOG_DIR_ENV: &str = "CLAREZA_LOG_DIR";

const LOG_FILE_PREFIX: &str = "clareza.jsonl";

/// Where structured file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from `CLAREZA_LOG_PATH` / `CLAREZA_LOG_DIR`, falling back to the
    /// directory from the config file.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn from_values(
        log_path: Option<PathBuf>,
        env_log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: log_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir: env_log_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_log_dir),
        }
    }

    /// Whether a file layer will be installed.
    pub const fn writes_file(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }

    fn appender(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            create_dir(dir)?;
            return Ok(Some(rolling::never(dir, file)));
        }
        if let Some(ref dir) = self.log_dir {
            create_dir(dir)?;
            return Ok(Some(rolling::daily(dir, LOG_FILE_PREFIX)));
        }
        Ok(None)
    }
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces `error`, each `-v`
/// raises the level one step, and the configured level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, default_level))
}

fn filter_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => match default_level {
            "error" => "warn",
            "warn" => "info",
            "info" => "debug",
            _ => "trace",
        },
        _ => "trace",
    }
}

/// Keeps the file writer alive; drop it last so buffered records flush.
#[derive(Debug, Default)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.appender()? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}
