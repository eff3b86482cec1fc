//! Translator configuration — loads optional ~/.pseudopy/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::translate::{EmitOptions, LexErrorPolicy, TranslateOptions};

/// How the token listing is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// One `(KIND, value, line)` triple per line.
    #[default]
    Text,
    /// A JSON array of `{kind, value, line, col}` objects.
    Json,
}

/// Configuration loaded from YAML. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per nesting level in generated code.
    pub indent_width: usize,
    /// Whether illegal characters abort the translation.
    pub lex_errors: LexErrorPolicy,
    /// Print the token listing before the generated code.
    pub show_tokens: bool,
    pub token_format: TokenFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: 4,
            lex_errors: LexErrorPolicy::Fail,
            show_tokens: false,
            token_format: TokenFormat::Text,
        }
    }
}

impl Config {
    /// Load config from the standard path (~/.pseudopy/config.yaml).
    /// Returns None if the file doesn't exist, can't be parsed, or fails
    /// [`Config::validate`].
    pub fn load() -> Option<Self> {
        let path = default_config_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.validate().ok()?;
        Some(config)
    }

    /// Reject values the generator cannot honour.
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_width == 0 {
            return Err("indent_width must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            emit: EmitOptions {
                indent_width: self.indent_width,
            },
            lex_errors: self.lex_errors,
        }
    }
}

/// Default path for the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pseudopy").join("config.yaml"))
}

/// Load config from an explicit path. A missing file yields the defaults;
/// an unreadable or malformed one is an error.
pub fn load_config(path: &Path) -> Result<Config, io::Error> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(config)
}
