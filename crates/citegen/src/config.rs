//! `citegen.toml` loading.
//!
//! ```toml
//! [defaults]
//! style = "apa"
//! output = "text"
//! ```
//!
//! The file is looked up from `--config`, then `$CITEGEN_CONFIG`, then
//! `./citegen.toml`. With none of those present the built-in defaults apply.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use citegen_core::CitationStyle;
use serde::Deserialize;

use crate::error::CliError;

pub const CONFIG_ENV: &str = "CITEGEN_CONFIG";
pub const CONFIG_FILE: &str = "citegen.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Style tag used when `--style` is not given.
    pub style: Option<String>,
    pub output: OutputFormat,
}

impl Config {
    /// Load the configuration, honoring the lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match locate(explicit) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// The configured default style, or APA.
    pub fn default_style(&self) -> citegen_core::Result<CitationStyle> {
        match &self.defaults.style {
            Some(tag) => tag.parse(),
            None => Ok(CitationStyle::default()),
        }
    }

    pub fn wants_json(&self) -> bool {
        self.defaults.output == OutputFormat::Json
    }
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(CONFIG_FILE);
    local.is_file().then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, CliError> {
        Config::parse(text, Path::new("citegen.toml"))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_style().unwrap(), CitationStyle::Apa);
        assert_eq!(config.defaults.output, OutputFormat::Text);
    }

    #[test]
    fn test_defaults_section() {
        let config = parse("[defaults]\nstyle = \"chicago\"\noutput = \"json\"\n").unwrap();
        assert_eq!(config.default_style().unwrap(), CitationStyle::Chicago);
        assert_eq!(config.defaults.output, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_style_is_reported_on_use() {
        let config = parse("[defaults]\nstyle = \"vancouver\"\n").unwrap();
        assert_eq!(
            config.default_style(),
            Err(citegen_core::Error::UnknownStyle {
                tag: "vancouver".to_string()
            })
        );
    }

    #[test]
    fn test_bad_output_is_a_parse_error() {
        let err = parse("[defaults]\noutput = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert_eq!(err.to_diagnostic().code.as_deref(), Some("C-3-2"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/nonexistent/custom.toml");
        assert_eq!(locate(Some(path)), Some(path.to_path_buf()));
    }
}
