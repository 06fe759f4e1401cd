//! Case-insensitive substring filtering over option labels.

/// A filter built from the current text value.
///
/// A label matches when its lower-cased form contains the lower-cased filter
/// text. The empty filter matches every label.
///
/// # Example
///
/// ```rust
/// use combobox::filter::Filter;
///
/// let filter = Filter::new("AN");
/// assert!(filter.matches("Banana"));
/// assert!(!filter.matches("Apple"));
/// assert!(Filter::new("").matches("anything"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    needle: String,
}

impl Filter {
    /// Creates a filter from raw text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// The lower-cased filter text.
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether the filter matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether a label passes the filter.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.is_empty() || label.to_lowercase().contains(&self.needle)
    }

    /// Visibility of each label, in order.
    pub fn visibility<'a, I>(&self, labels: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels.into_iter().map(|label| self.matches(label)).collect()
    }
}
