//! Configuration management for Construct.AI using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default analysis delay in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;

/// Default upload progress increment per tick.
pub const DEFAULT_UPLOAD_STEP: u8 = 10;

/// Default upload tick interval in milliseconds.
pub const DEFAULT_UPLOAD_INTERVAL_MS: u64 = 300;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Artificial delay before the simulated analysis resolves.
    pub analysis_delay_ms: u64,
    /// Fail analyses that take longer than this (None = never time out).
    pub analysis_timeout_ms: Option<u64>,
    /// Reject empty or non-video inputs before analysis.
    pub strict_input: bool,
    /// Upload progress increment per tick, in percent.
    pub upload_step: u8,
    /// Interval between upload progress ticks.
    pub upload_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            analysis_timeout_ms: None,
            strict_input: false,
            upload_step: DEFAULT_UPLOAD_STEP,
            upload_interval_ms: DEFAULT_UPLOAD_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Apply environment variable overrides.
    ///
    /// `lookup` resolves a variable name; pass `|k| std::env::var(k).ok()` for
    /// the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // CONSTRUCTAI_ANALYSIS_DELAY_MS - simulated processing time
        if let Some(delay) = lookup("CONSTRUCTAI_ANALYSIS_DELAY_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            tracing::debug!("Using CONSTRUCTAI_ANALYSIS_DELAY_MS from environment: {}", delay);
            self.analysis_delay_ms = delay;
        }

        // CONSTRUCTAI_STRICT_INPUT=1 - validate uploads before analysis
        if let Some(value) = lookup("CONSTRUCTAI_STRICT_INPUT") {
            self.strict_input = value == "1" || value.eq_ignore_ascii_case("true");
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated analysis delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_delay_ms: Option<u64>,
    /// Analysis timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_timeout_ms: Option<u64>,
    /// Reject empty or non-video inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_input: Option<bool>,
    /// Upload progress step in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_step: Option<u8>,
    /// Upload progress tick interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_interval_ms: Option<u64>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers constructai config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("constructai").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(delay) = self.analysis_delay_ms {
            settings.analysis_delay_ms = delay;
        }
        if let Some(timeout) = self.analysis_timeout_ms {
            settings.analysis_timeout_ms = Some(timeout);
        }
        if let Some(strict) = self.strict_input {
            settings.strict_input = strict;
        }
        if let Some(step) = self.upload_step {
            settings.upload_step = step;
        }
        if let Some(interval) = self.upload_interval_ms {
            settings.upload_interval_ms = interval;
        }
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Load settings from an explicit config file or auto-discovery, then the environment.
/// Returns (Settings, Config) tuple.
pub async fn load_settings(config_path: Option<&Path>) -> anyhow::Result<(Settings, Config)> {
    let config = match config_path {
        Some(path) => {
            let path = expand_path(path);
            Config::load_from_path(&path)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?
        }
        None => Config::load().await,
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings.apply_env_overrides(|key| std::env::var(key).ok().filter(|v| !v.is_empty()));

    if let Some(ref path) = config.source_path {
        tracing::debug!("Loaded config from {}", path.display());
    }

    Ok((settings, config))
}
