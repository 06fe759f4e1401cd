//! Explicit element registration.
//!
//! Embedding applications own a [`Registry`] and define element names on it
//! themselves; nothing is registered process-wide.
//!
//! ```rust
//! use combobox::registry::{DEFAULT_TAG, Registry};
//!
//! let mut registry = Registry::new();
//! registry.define_default().unwrap();
//!
//! let combo = registry.create(DEFAULT_TAG, "fruit").unwrap();
//! assert_eq!(combo.id(), "fruit");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::combobox::Combobox;
use crate::config::ComboboxConfig;
use crate::error::{Error, Result};
use crate::style::Styles;

/// Element name the combobox is conventionally registered under.
pub const DEFAULT_TAG: &str = "ml-combobox";

/// Builds a combobox for the given element id.
pub type Factory = Box<dyn Fn(&str) -> Combobox + Send + Sync>;

const RESERVED: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// A table of element names and the factories that build them.
#[derive(Default)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name` with a factory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElementName`] if the name is not a valid
    /// element name and [`Error::ElementAlreadyDefined`] if it is taken.
    pub fn define<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn(&str) -> Combobox + Send + Sync + 'static,
    {
        validate_name(name)?;
        if self.factories.contains_key(name) {
            return Err(Error::ElementAlreadyDefined(name.to_string()));
        }
        self.factories.insert(name.to_string(), Box::new(factory));
        tracing::debug!(name, "defined element");
        Ok(())
    }

    /// Defines `name` to build comboboxes from a configuration. The id of
    /// each instance replaces the configured one.
    ///
    /// # Errors
    ///
    /// Fails like [`Registry::define`], and with
    /// [`Error::InvalidColor`] if the configured styles do not parse.
    pub fn define_with_config(&mut self, name: &str, config: ComboboxConfig) -> Result<()> {
        let styles = Styles::from_config(&config.styles)?;
        self.define(name, move |id| {
            let config = ComboboxConfig {
                id: id.to_string(),
                ..config.clone()
            };
            Combobox::build(&config, styles.clone())
        })
    }

    /// Defines [`DEFAULT_TAG`] with default comboboxes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementAlreadyDefined`] if the tag is taken.
    pub fn define_default(&mut self) -> Result<()> {
        self.define(DEFAULT_TAG, |id| Combobox::new(id))
    }

    /// Builds a new instance of `name` with the given element id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `name` was never defined.
    pub fn create(&self, name: &str, id: &str) -> Result<Combobox> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::UnknownElement(name.to_string()))?;
        Ok(factory(id))
    }

    /// Whether `name` has been defined.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Defined names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| Error::InvalidElementName {
        name: name.to_string(),
        reason,
    };

    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(invalid("must start with a lower-case ASCII letter"));
    }
    if !name.contains('-') {
        return Err(invalid("must contain a hyphen"));
    }
    if name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()) {
        return Err(invalid("must not contain upper-case letters or whitespace"));
    }
    if RESERVED.contains(&name) {
        return Err(invalid("is reserved"));
    }
    Ok(())
}
