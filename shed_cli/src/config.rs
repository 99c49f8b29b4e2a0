//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup from the file given by `--config`
//! (or `SHED_CONFIG`). The CLI owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied in [`crate::resolve`])
//! 2. Config file
//! 3. Built-in defaults
//!
//! ```toml
//! [defaults]
//! style = "Quaker"
//! width_ft = 10
//! depth_ft = 16
//! pitch = 6
//!
//! [clock]
//! month = 1
//!
//! [output]
//! format = "json"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shed_core::catalog::ShedStyle;
use shed_core::environment::Weather;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Design used when no spec file or flag says otherwise
    pub defaults: Defaults,
    pub clock: ClockConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: ShedStyle,
    pub width_ft: f64,
    pub depth_ft: f64,
    pub pitch: f64,
    pub time: f64,
    pub weather: Weather,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            style: ShedStyle::ModernStudio,
            width_ft: 10.0,
            depth_ft: 12.0,
            pitch: 6.0,
            time: 50.0,
            weather: Weather::Clear,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed month (1-12) used instead of the system clock
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl AppConfig {
    /// Load configuration, falling back to the built-in defaults when no
    /// file is given.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = config_file else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        if let Some(month) = config.clock.month {
            shed_core::environment::month_from_number(month)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.defaults.style, ShedStyle::ModernStudio);
        assert_eq!(cfg.output.format, OutputFormat::Human);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [defaults]
            style = "Lofted Barn"
            width_ft = 12

            [clock]
            month = 12
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.style, ShedStyle::LoftedBarn);
        assert_eq!(cfg.defaults.width_ft, 12.0);
        assert_eq!(cfg.defaults.depth_ft, 12.0);
        assert_eq!(cfg.clock.month, Some(12));
        assert_eq!(cfg.output.format, OutputFormat::Human);
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(AppConfig::from_toml("[defaults]\nstyle = \"Nomad Mobile\"").is_err());
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(AppConfig::from_toml("[clock]\nmonth = 13").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/shed.toml"))).is_err());
    }
}
