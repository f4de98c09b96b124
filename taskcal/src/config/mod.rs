//! Configuration system for the `TaskCal` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskcal/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use taskcal_core::task::MAX_CONTENT_LENGTH;

use crate::calendar::{CalendarMode, WeekStart};
use crate::fanfare::DEFAULT_FANFARE_DURATION;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A setting parsed but is out of range.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Dotted key of the offending setting.
        key: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    calendar: CalendarFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    tick_ms: Option<u64>,
    fanfare_duration_ms: Option<u64>,
    max_content_len: Option<usize>,
}

/// `[calendar]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CalendarFileConfig {
    default_view: Option<CalendarMode>,
    week_start: Option<WeekStart>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // -- UI --
    /// Redraw interval of the event loop (drives the fanfare).
    pub tick_interval: Duration,
    /// How long the fanfare stays visible after a completion.
    pub fanfare_duration: Duration,
    /// Maximum task/event content length in characters.
    pub max_content_len: usize,

    // -- Calendar --
    /// View shown at startup.
    pub default_view: CalendarMode,
    /// First day of the week in month and week views.
    pub week_start: WeekStart,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(33),
            fanfare_duration: DEFAULT_FANFARE_DURATION,
            max_content_len: MAX_CONTENT_LENGTH,
            default_view: CalendarMode::Month,
            week_start: WeekStart::Sunday,
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an
    /// error. Otherwise the default path (`~/.config/taskcal/config.toml`)
    /// is tried and silently ignored if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if a setting is out of range.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file).validate()
    }

    /// Resolve from CLI args alone, with defaults for everything else.
    ///
    /// Used when the config file cannot be loaded, so command-line
    /// overrides still apply.
    #[must_use]
    pub fn from_cli(cli: &CliArgs) -> Self {
        Self::resolve(cli, &ConfigFile::default())
    }

    /// Resolve an `AppConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. Separated from `load()` so it can
    /// be unit tested without CLI parsing.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            tick_interval: file
                .ui
                .tick_ms
                .map_or(defaults.tick_interval, Duration::from_millis),
            fanfare_duration: file
                .ui
                .fanfare_duration_ms
                .map_or(defaults.fanfare_duration, Duration::from_millis),
            max_content_len: file
                .ui
                .max_content_len
                .unwrap_or(defaults.max_content_len),
            default_view: cli
                .view
                .or(file.calendar.default_view)
                .unwrap_or(defaults.default_view),
            week_start: cli
                .week_start
                .or(file.calendar.week_start)
                .unwrap_or(defaults.week_start),
        }
    }

    /// Rejects settings that would stall the UI or refuse all input.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "ui.tick_ms",
                reason: "must be greater than zero",
            });
        }
        if self.max_content_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ui.max_content_len",
                reason: "must be greater than zero",
            });
        }
        Ok(self)
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal task list and calendar planner")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/taskcal/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Calendar view shown at startup.
    #[arg(long, value_enum)]
    pub view: Option<CalendarMode>,

    /// First day of the week.
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKCAL_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/taskcal.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available, use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("taskcal").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
