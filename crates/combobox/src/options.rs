//! The option set and its attribute form.
//!
//! Hosts hand the component an ordered list of display strings. The list is
//! stored in its serialized attribute form (a JSON array) and parsed again
//! whenever it is read, so a malformed attribute set by a host surfaces as a
//! parse error on read.

use serde_json::Value;

use crate::error::{Error, Result};

/// An ordered sequence of option labels.
///
/// Duplicates are allowed and order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    labels: Vec<String>,
}

impl OptionSet {
    /// Creates an option set from labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses an option attribute value.
    ///
    /// The attribute must be a JSON array. Strings are taken as-is; numbers
    /// and booleans are converted to their JSON text and `null` becomes an
    /// empty label, the way a browser assigns them as row text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsParse`] if the value is not JSON and
    /// [`Error::OptionsShape`] if it is not an array of scalars.
    ///
    /// ```rust
    /// use combobox::OptionSet;
    ///
    /// let set = OptionSet::from_attribute(r#"["Apple", 3, true]"#).unwrap();
    /// assert_eq!(set.labels(), ["Apple", "3", "true"]);
    /// ```
    pub fn from_attribute(attribute: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(attribute)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::OptionsShape {
                    found: describe(&other).to_string(),
                });
            }
        };

        let labels = items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                Value::Null => Ok(String::new()),
                other => Err(Error::OptionsShape {
                    found: format!("array containing {}", describe(&other)),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels })
    }

    /// Serializes the option set to its attribute form.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        Value::Array(self.labels.iter().cloned().map(Value::String).collect()).to_string()
    }

    /// Returns the labels in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Consumes the set and returns the labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_preserves_order_and_duplicates() {
        let set = OptionSet::new(["b", "a", "b"]);
        let parsed = OptionSet::from_attribute(&set.to_attribute()).unwrap();
        assert_eq!(parsed.labels(), ["b", "a", "b"]);
    }

    #[test]
    fn test_attribute_escapes_quotes() {
        let set = OptionSet::new(["say \"hi\""]);
        assert_eq!(set.to_attribute(), r#"["say \"hi\""]"#);
    }

    #[test]
    fn test_empty_set() {
        let set = OptionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.to_attribute(), "[]");
        assert!(OptionSet::from_attribute("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = OptionSet::from_attribute("[\"Apple\"").unwrap_err();
        assert!(matches!(err, Error::OptionsParse(_)));
    }

    #[test]
    fn test_not_an_array() {
        let err = OptionSet::from_attribute(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, Error::OptionsShape { ref found } if found == "an object"));
    }

    #[test]
    fn test_nested_values_rejected() {
        let err = OptionSet::from_attribute(r#"["a", ["b"]]"#).unwrap_err();
        assert!(
            matches!(err, Error::OptionsShape { ref found } if found == "array containing an array")
        );
    }

    #[test]
    fn test_scalars_stringified() {
        let set = OptionSet::from_attribute("[1.5, false, null]").unwrap();
        assert_eq!(set.labels(), ["1.5", "false", ""]);
    }
}
