//! Keybinding definitions and matching utilities.
//!
//! # Example
//!
//! ```rust
//! use combobox::keymap::{Binding, matches};
//!
//! let next = Binding::new().keys(&["down", "ctrl+n"]).help("↓", "next option");
//! let prev = Binding::new().keys(&["up", "ctrl+p"]).help("↑", "previous option");
//!
//! assert!(matches("ctrl+n", &[&next, &prev]));
//! assert!(matches("up", &[&next, &prev]));
//! assert!(!matches("x", &[&next, &prev]));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "↑/k").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A keybinding with associated help text.
///
/// Bindings can be enabled/disabled and contain zero or more key names
/// (as produced by [`KeyMsg`](crate::KeyMsg)'s `Display`) that trigger it.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Creates a disabled binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the keys of this binding.
    pub fn set_keys<S: AsRef<str>>(&mut self, keys: &[S]) {
        self.keys = keys.iter().map(|s| s.as_ref().to_string()).collect();
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it's not explicitly disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if the given key matches any of the given bindings.
///
/// Only enabled bindings are considered.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key_str = key.to_string();
    bindings
        .iter()
        .filter(|binding| binding.enabled())
        .any(|binding| binding.keys.iter().any(|k| *k == key_str))
}

/// Key bindings of the combobox.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the next option.
    pub move_next: Binding,
    /// Highlight the previous option.
    pub move_prev: Binding,
    /// Commit the highlighted option.
    pub commit: Binding,
    /// Leave the field.
    pub cancel: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            move_next: Binding::new()
                .keys(&["down", "ctrl+n"])
                .help("↓", "next option"),
            move_prev: Binding::new()
                .keys(&["up", "ctrl+p"])
                .help("↑", "previous option"),
            commit: Binding::new().keys(&["enter"]).help("enter", "select"),
            cancel: Binding::new().keys(&["esc"]).help("esc", "close"),
        }
    }
}

impl KeyMap {
    /// Builds a key map from configured key names.
    ///
    /// Empty lists keep the default keys for that action.
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut map = Self::default();
        let pairs = [
            (&mut map.move_next, &config.move_next),
            (&mut map.move_prev, &config.move_prev),
            (&mut map.commit, &config.commit),
            (&mut map.cancel, &config.cancel),
        ];
        for (binding, keys) in pairs {
            if !keys.is_empty() {
                binding.set_keys(keys);
            }
        }
        map
    }

    /// Help entries for every enabled binding, in display order.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Help> {
        [&self.move_next, &self.move_prev, &self.commit, &self.cancel]
            .into_iter()
            .filter(|b| b.enabled())
            .map(Binding::get_help)
            .collect()
    }
}

/// Configurable key names per action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct KeyConfig {
    /// Keys that highlight the next option.
    pub move_next: Vec<String>,
    /// Keys that highlight the previous option.
    pub move_prev: Vec<String>,
    /// Keys that commit the highlighted option.
    pub commit: Vec<String>,
    /// Keys that leave the field.
    pub cancel: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_keys_and_help() {
        let binding = Binding::new().keys(&["down", "ctrl+n"]).help("↓", "next");
        assert_eq!(binding.get_keys(), &["down", "ctrl+n"]);
        assert_eq!(binding.get_help().desc, "next");
        assert!(binding.enabled());
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new().keys(&["x"]).disabled();
        assert!(!matches("x", &[&binding]));
        binding.enable(true);
        assert!(matches("x", &[&binding]));
    }

    #[test]
    fn test_empty_binding_is_disabled() {
        assert!(!Binding::new().enabled());
    }

    #[test]
    fn test_default_keymap() {
        let map = KeyMap::default();
        assert!(matches("down", &[&map.move_next]));
        assert!(matches("up", &[&map.move_prev]));
        assert!(matches("enter", &[&map.commit]));
        assert!(matches("esc", &[&map.cancel]));
        assert_eq!(map.short_help().len(), 4);
    }

    #[test]
    fn test_keymap_from_config_overrides_only_given_actions() {
        let config = KeyConfig {
            move_next: vec!["tab".into()],
            ..KeyConfig::default()
        };
        let map = KeyMap::from_config(&config);
        assert!(matches("tab", &[&map.move_next]));
        assert!(!matches("down", &[&map.move_next]));
        assert!(matches("up", &[&map.move_prev]));
    }
}
