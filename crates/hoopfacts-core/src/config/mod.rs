mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SkillError;
use crate::locale::Locale;
use defaults::*;

/// Top-level skill configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub skill: SkillConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Skill behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Display name, used in logs and the CLI banner.
    #[serde(default = "default_name")]
    pub name: String,
    /// Locale used when the request tag matches no supported language.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Intent name that triggers the random fact handler.
    #[serde(default = "default_fact_intent")]
    pub fact_intent: String,
    /// Check the localization and fact tables before serving.
    #[serde(default = "default_true")]
    pub validate_on_start: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_locale: default_locale(),
            fact_intent: default_fact_intent(),
            validate_on_start: true,
        }
    }
}

impl SkillConfig {
    /// Parse `default_locale` into a supported [`Locale`].
    pub fn fallback_locale(&self) -> Result<Locale, SkillError> {
        Locale::from_tag(&self.default_locale).ok_or_else(|| {
            SkillError::Config(format!(
                "unsupported default_locale '{}'",
                self.default_locale
            ))
        })
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for a daily rolling log file. Empty = stderr only.
    #[serde(default)]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: String::new(),
        }
    }
}

impl Config {
    /// Reject settings the skill cannot run with.
    pub fn validate(&self) -> Result<(), SkillError> {
        self.skill.fallback_locale()?;
        if self.skill.fact_intent.trim().is_empty() {
            return Err(SkillError::Config("fact_intent must not be empty".into()));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, SkillError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SkillError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SkillError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
