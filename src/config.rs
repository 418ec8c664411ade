use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub highlight: HighlightConfig,
    pub headings: HeadingConfig,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a syntect bundled theme.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadingConfig {
    /// CSS font sizes for heading levels 1 through 6.
    pub sizes: [String; 6],
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            sizes: ["2em", "1.5em", "1.25em", "1.1em", "1em", "0.9em"].map(String::from),
        }
    }
}

impl HeadingConfig {
    /// Font size for a heading level, clamped to 1..=6.
    pub fn size_for(&self, level: u8) -> &str {
        let index = usize::from(level.clamp(1, 6)) - 1;
        &self.sizes[index]
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodeConfig {
    pub show_language: bool,
    pub copy_label: String,
    pub copied_label: String,
    /// How long the copy button shows its "copied" label.
    pub feedback_ms: u64,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            show_language: true,
            copy_label: "Copy code".to_string(),
            copied_label: "Copied!".to_string(),
            feedback_ms: 2000,
        }
    }
}

impl CodeConfig {
    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return defaults if not found or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::compiled_default()
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::compiled_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_default_impl() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::from_toml_str("[code]\ncopy_label = \"Copy\"\n").unwrap();
        assert_eq!(config.code.copy_label, "Copy");
        assert_eq!(config.code.copied_label, "Copied!");
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(Config::from_toml_str("[code]\nfeedback_ms = \"soon\"").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = Config::load(Path::new("/definitely/not/here/chatmark.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn heading_sizes_decrease_and_clamp() {
        let headings = HeadingConfig::default();
        assert_eq!(headings.size_for(1), "2em");
        assert_eq!(headings.size_for(6), "0.9em");
        assert_eq!(headings.size_for(0), "2em");
        assert_eq!(headings.size_for(9), "0.9em");
    }

    #[test]
    fn feedback_duration() {
        assert_eq!(CodeConfig::default().feedback(), Duration::from_secs(2));
    }
}
