use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Configuration compiled into the crate from `src/default_config.toml`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub styles: StyleConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentConfig {
    /// Used when no title is given or the given title is empty.
    pub title: String,
    pub footer: String,
    /// Width of the centered content table, in pixels.
    pub width: u32,
    /// Height of a blank-line spacer, in pixels.
    pub spacer_height: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: crate::DEFAULT_TITLE.to_string(),
            footer: "Sent from AI Meeting Summarizer".to_string(),
            width: 640,
            spacer_height: 10,
        }
    }
}

/// Inline `style` attribute values for each generated element.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub h2: String,
    pub h3: String,
    pub p: String,
    pub ul: String,
    pub li: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            h2: "margin:18px 0 10px;font-size:16px;color:#0f172a".to_string(),
            h3: "margin:16px 0 8px;font-size:14px;color:#0f172a".to_string(),
            p: "margin:8px 0;line-height:1.6;color:#111827".to_string(),
            ul: "margin:6px 0 6px 20px;padding:0;color:#111827".to_string(),
            li: "margin:4px 0;line-height:1.5".to_string(),
        }
    }
}

impl Config {
    /// The defaults compiled into the crate. `build.rs` guarantees they parse
    /// as TOML; a schema mismatch falls back to the hardcoded defaults.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::compiled_default())
            }
            Err(source) => Err(Error::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// The title to render: `title` unless it is absent or empty.
    pub fn title_or_default<'a>(&'a self, title: Option<&'a str>) -> &'a str {
        match title {
            Some(title) if !title.is_empty() => title,
            _ => &self.document.title,
        }
    }
}
