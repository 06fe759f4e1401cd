//! Error types for the combobox component.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while driving a combobox.
///
/// Most handlers on [`Combobox`](crate::Combobox) are total and never fail.
/// Errors surface at the edges: reading a malformed option attribute back,
/// registering or creating elements, and loading configuration.
///
/// # Recovery Strategies
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`OptionsParse`](Error::OptionsParse) | Set a well-formed JSON array again |
/// | [`OptionsShape`](Error::OptionsShape) | Pass an array of strings |
/// | [`InvalidElementName`](Error::InvalidElementName) | Use a lower-case name containing a hyphen |
/// | [`ElementAlreadyDefined`](Error::ElementAlreadyDefined) | Reuse the existing definition |
/// | [`UnknownElement`](Error::UnknownElement) | Define the tag before creating it |
/// | [`ConfigIo`](Error::ConfigIo) / [`ConfigParse`](Error::ConfigParse) | Fix the file or fall back to defaults |
///
/// # Example
///
/// ```rust
/// use combobox::{Combobox, Error};
///
/// let mut combo = Combobox::new("fruit");
/// assert!(combo.set_options_attribute("[\"Apple\",").is_err());
/// assert!(matches!(combo.options(), Err(Error::OptionsParse(_))));
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The option attribute is not valid JSON.
    #[error("failed to parse options attribute: {0}")]
    OptionsParse(#[from] serde_json::Error),

    /// The option attribute parsed, but is not an array of scalar values.
    #[error("options attribute must be a JSON array of strings, found {found}")]
    OptionsShape {
        /// Short description of what was found instead.
        found: String,
    },

    /// The element name is not a valid custom element name.
    #[error("invalid element name {name:?}: {reason}")]
    InvalidElementName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A factory is already registered under this name.
    #[error("element {0:?} is already defined")]
    ElementAlreadyDefined(String),

    /// No factory is registered under this name.
    #[error("element {0:?} is not defined")]
    UnknownElement(String),

    /// Failed to read a configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse config {path}: {message}")]
    ConfigParse {
        /// The file that could not be parsed.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// A color string in the configuration could not be understood.
    #[error("invalid color {0:?}")]
    InvalidColor(String),
}

/// A specialized [`Result`] type for combobox operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownElement("ml-combobox".into());
        assert_eq!(err.to_string(), "element \"ml-combobox\" is not defined");

        let err = Error::OptionsShape {
            found: "object".into(),
        };
        assert!(err.to_string().contains("found object"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::OptionsParse(_)));
        assert!(err.to_string().starts_with("failed to parse options attribute"));
    }
}
