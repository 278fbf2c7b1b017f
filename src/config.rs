//! TOML configuration for icon output
//!
//! ```toml
//! [output]
//! format = "svg"
//! pretty_print = true
//! standalone = false
//! indent = 2
//! attribution = true
//! ```
//!
//! Every key is optional.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::markup::MarkupConfig;

/// What the CLI prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// SVG markup
    #[default]
    Svg,
    /// base64 `data:` URI
    DataUri,
    /// The raw path `d` string
    Path,
    /// One parsed drawing command per line
    Commands,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub markup: MarkupConfig,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    output: TomlOutput,
}

#[derive(Deserialize, Default)]
struct TomlOutput {
    format: Option<OutputFormat>,
    pretty_print: Option<bool>,
    standalone: Option<bool>,
    indent: Option<usize>,
    attribution: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let output = parsed.output;
        let defaults = MarkupConfig::default();

        Ok(Config {
            format: output.format.unwrap_or_default(),
            markup: MarkupConfig {
                standalone: output.standalone.unwrap_or(defaults.standalone),
                pretty_print: output.pretty_print.unwrap_or(defaults.pretty_print),
                indent: output.indent.unwrap_or(defaults.indent),
                attribution: output.attribution.unwrap_or(defaults.attribution),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").expect("Should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            [output]
            format = "data-uri"
            pretty_print = false
            standalone = true
            indent = 4
            attribution = false
            "#,
        )
        .expect("Should parse");

        assert_eq!(config.format, OutputFormat::DataUri);
        assert_eq!(
            config.markup,
            MarkupConfig::new()
                .with_pretty_print(false)
                .with_standalone(true)
                .with_indent(4)
                .with_attribution(false)
        );
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str("[output]\nstandalone = true\n").expect("Should parse");
        assert_eq!(config.format, OutputFormat::Svg);
        assert!(config.markup.standalone);
        assert!(config.markup.pretty_print);
    }

    #[test]
    fn test_unknown_format_is_error() {
        let result = Config::from_str("[output]\nformat = \"png\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::from_file(Path::new("/nonexistent/tv-icon.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
