// ABOUTME: Clock app configuration parsing.
// ABOUTME: Reads an optional TOML file and produces a validated ClockConfig.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::format::{self, Formatter};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/mobileos/clock.toml";
pub const CONFIG_PATH_ENV: &str = "MOS_CLOCK_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ClockConfig {
    pub tick_interval_ms: u64,
    /// Logical size of the square the hand geometry is computed in.
    pub face_size: f32,
    pub time_format: String,
    pub date_format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            face_size: 300.0,
            time_format: format::DEFAULT_TIME_FORMAT.to_string(),
            date_format: format::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    clock: ClockConfig,
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn formatter(&self) -> Result<Formatter> {
        Formatter::new(&self.time_format, &self.date_format)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            bail!("tick-interval-ms must be greater than zero");
        }
        if !(self.face_size.is_finite() && self.face_size > 0.0) {
            bail!("face-size must be a positive number, got {}", self.face_size);
        }
        format::validate_pattern(&self.time_format).context("bad time-format")?;
        format::validate_pattern(&self.date_format).context("bad date-format")?;
        Ok(())
    }
}

pub fn parse_config(toml_str: &str) -> Result<ClockConfig> {
    let file: ConfigFile = toml::from_str(toml_str).context("failed to parse clock config")?;
    file.clock.validate()?;
    Ok(file.clock)
}

/// Loads the config at `path`, falling back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<ClockConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no clock config, using defaults");
        return Ok(ClockConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    info!(path = %path.display(), "loaded clock config");
    Ok(config)
}

/// Resolves the config path from `MOS_CLOCK_CONFIG`, or the system default.
pub fn config_path() -> std::path::PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(Into::into)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}
