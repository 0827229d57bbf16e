//! Style table for logo color variants
//!
//! Logos that support theming reference a symbolic secondary color. The
//! table maps each [`Variant`] to the concrete color substituted at render
//! time. Tables can be loaded from TOML; keys left out of the file keep
//! their default values, so lookups stay total.

use std::borrow::Cow;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::logo::Variant;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Variant to color mapping used to resolve themed shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    /// Optional name for the table
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color used by the dark variant
    pub dark: Cow<'static, str>,
    /// Color used by the light variant
    pub light: Cow<'static, str>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: TomlColors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlColors {
    dark: Option<String>,
    light: Option<String>,
}

impl StyleTable {
    /// Secondary logo colors shipped with the library
    pub const DEFAULT: StyleTable = StyleTable {
        name: None,
        description: None,
        dark: Cow::Borrowed("white"),
        light: Cow::Borrowed("#222326"),
    };

    /// Build a table from explicit colors
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            name: None,
            description: None,
            dark: Cow::Owned(dark.into()),
            light: Cow::Owned(light.into()),
        }
    }

    /// Load a table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a table from a TOML string
    ///
    /// Missing `[colors]` entries fall back to [`StyleTable::DEFAULT`].
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let defaults = Self::DEFAULT;

        Ok(StyleTable {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            dark: parsed.colors.dark.map(Cow::Owned).unwrap_or(defaults.dark),
            light: parsed.colors.light.map(Cow::Owned).unwrap_or(defaults.light),
        })
    }

    /// Resolve the color for a variant
    pub fn resolve(&self, variant: Variant) -> &str {
        match variant {
            Variant::Dark => &*self.dark,
            Variant::Light => &*self.light,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
