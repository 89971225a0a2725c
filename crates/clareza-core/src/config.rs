//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with defaults and `CLAREZA_` environment variables
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `clareza.<ext>` in current directory or any parent
//! - `.clareza.<ext>` in current directory or any parent
//! - `~/.config/clareza/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use clareza_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("max passive: {}", config.targets.max_passive);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::readability::Thresholds;

/// The configuration for clareza.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON). Omitted fields keep their defaults, including individual fields
/// of `targets`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Minimum acceptable readability score (0--100) for the `score` command.
    pub min_score: Option<u8>,
    /// Grading targets for the readability criteria.
    pub targets: Thresholds,
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }

    /// Every loaded file, lowest precedence first.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }
}

/// Supported configuration file extensions, merged in this order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "clareza";

/// A directory holding this entry is a repository root; discovery stops there.
const REPO_MARKER: &str = ".git";

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `CLAREZA_TARGETS__MAX_PASSIVE=0.2`.
const ENV_PREFIX: &str = "CLAREZA_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config and nothing else until told where
    /// to search.
    pub const fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for `.clareza.<ext>` / `clareza.<ext>`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/clareza/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Add an explicit config file. Later files win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`CLAREZA_*`)
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/clareza/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        let config = extract(&sources)?;
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails with [`ConfigError::NotFound`]
    /// when no config file exists in any location.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        if sources.primary_file().is_none() {
            return Err(ConfigError::NotFound);
        }
        let config = extract(&sources)?;
        Ok((config, sources))
    }

    fn discover(self) -> ConfigSources {
        ConfigSources {
            user_file: self
                .include_user_config
                .then(find_user_config)
                .flatten(),
            project_files: self
                .project_search_root
                .as_deref()
                .map(find_project_configs)
                .unwrap_or_default(),
            explicit_files: self.explicit_files,
        }
    }
}

/// Merge defaults, every source file and the environment into a [`Config`].
fn extract(sources: &ConfigSources) -> ConfigResult<Config> {
    let figment = sources
        .files()
        .fold(
            Figment::from(Serialized::defaults(Config::default())),
            merge_file,
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

    let config: Config = figment
        .extract()
        .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
    tracing::info!(
        log_level = config.log_level.as_str(),
        min_score = ?config.min_score,
        files = sources.files().count(),
        "configuration loaded"
    );
    Ok(config)
}

/// Config files of the closest directory at or above `start` that has any.
///
/// Within that directory dotfiles come before regular names, then extensions
/// in [`CONFIG_EXTENSIONS`] order, so later entries override earlier ones.
/// The walk ends after a directory above `start` holding [`REPO_MARKER`].
fn find_project_configs(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    let dot_stem = format!(".{APP_NAME}");
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [dot_stem.as_str(), APP_NAME]
            .into_iter()
            .flat_map(|stem| {
                CONFIG_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{stem}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if dir != start && dir.join(REPO_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| config_dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge one file, picking the format from its extension (TOML otherwise).
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Per-user config directory: `~/.config/clareza/` on Linux,
/// `~/Library/Application Support/clareza/` on macOS.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
