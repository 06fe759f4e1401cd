//! Runtime configuration for a combobox.
//!
//! [`ComboboxConfig`] is the single description of how a component instance
//! looks and behaves, independent of where it came from (defaults, a TOML or
//! JSON file, CLI flags).
//!
//! ```toml
//! id = "fruit"
//! prompt = "> "
//! placeholder = "Pick a fruit"
//! list-height = 5
//! navigation = "visible-only"
//!
//! [keys]
//! move-next = ["down", "tab"]
//!
//! [styles]
//! selected-background = "#0077cc"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::keymap::KeyConfig;
use crate::navigation::NavigationPolicy;
use crate::style::StyleConfig;

/// Configuration of one combobox instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComboboxConfig {
    /// Element id; prefixes the list and row ids.
    pub id: String,
    /// Text drawn before the value.
    pub prompt: String,
    /// Text drawn while the value is empty.
    pub placeholder: String,
    /// Number of rows visible in the dropdown at once.
    pub list_height: usize,
    /// Width of the widget in columns.
    pub width: usize,
    /// Which rows navigation may land on.
    pub navigation: NavigationPolicy,
    /// Whether to draw the key help line under the list.
    pub show_help: bool,
    /// Key overrides.
    pub keys: KeyConfig,
    /// Color overrides.
    pub styles: StyleConfig,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            id: "combobox".to_string(),
            prompt: "> ".to_string(),
            placeholder: String::new(),
            list_height: 5,
            width: 30,
            navigation: NavigationPolicy::default(),
            show_help: false,
            keys: KeyConfig::default(),
            styles: StyleConfig::default(),
        }
    }
}

impl ComboboxConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with the given element id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Loads a config file. `.json` files are parsed as JSON, everything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigIo`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not a valid config.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str::<Self>(&text).map_err(|e| e.to_string())
        } else {
            toml::from_str::<Self>(&text).map_err(|e| e.to_string())
        };

        let config = parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), id = %config.id, "loaded combobox config");
        Ok(config)
    }
}
