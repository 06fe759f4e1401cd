//! Render tree derived from component state.
//!
//! The tree describes what a binding should show: the input element with its
//! ARIA attributes, the list element and one node per row. It is rebuilt from
//! state on demand and never read back, so the cursor stays the only source
//! of truth for which row is selected.

use std::collections::BTreeMap;

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

/// One rendered option row.
///
/// Rows are built once per option-set replacement and afterwards only have
/// their visibility toggled by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Element id, `{component}-option-{index}`.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Whether the row passes the current filter.
    pub visible: bool,
}

impl Row {
    /// Builds the row for the option at `index`.
    #[must_use]
    pub fn new(component_id: &str, index: usize, label: impl Into<String>) -> Self {
        Self {
            id: format!("{component_id}-option-{index}"),
            label: label.into(),
            visible: true,
        }
    }
}

/// Attribute map of a rendered node, ordered by name.
pub type Attributes = BTreeMap<&'static str, String>;

/// The text input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputNode {
    /// Current text value.
    pub value: String,
    /// Whether the input has focus.
    pub focused: bool,
    /// ARIA and behavior attributes.
    pub attributes: Attributes,
}

/// The list element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListNode {
    /// Element id, `{component}-list`.
    pub id: String,
    /// Whether the dropdown is shown.
    pub expanded: bool,
    /// Scroll offset in visible rows.
    pub scroll_top: usize,
    /// ARIA attributes.
    pub attributes: Attributes,
    /// Every row, hidden ones included, in option order.
    pub rows: Vec<RowNode>,
}

/// One row element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowNode {
    /// Element id.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Whether the row is displayed.
    pub visible: bool,
    /// Whether the row is the highlighted one.
    pub selected: bool,
    /// ARIA attributes.
    pub attributes: Attributes,
}

/// The complete render tree of a combobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    /// Component id.
    pub id: String,
    /// The input element.
    pub input: InputNode,
    /// The list element.
    pub list: ListNode,
}

/// Attributes of the input element.
///
/// `active_descendant` is the id of the highlighted row, or `None` after a
/// commit or when nothing is highlighted.
#[must_use]
pub fn input_attributes(id: &str, expanded: bool, active_descendant: Option<&str>) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("type", "text".to_string());
    attrs.insert("class", "input".to_string());
    attrs.insert("role", "combobox".to_string());
    attrs.insert("aria-haspopup", "listbox".to_string());
    attrs.insert("aria-expanded", expanded.to_string());
    attrs.insert("aria-autocomplete", "list".to_string());
    attrs.insert("aria-owns", format!("{id}-list"));
    attrs.insert("aria-describedby", format!("{id}-instructions"));
    attrs.insert(
        "aria-activedescendant",
        active_descendant.unwrap_or_default().to_string(),
    );
    attrs.insert("autocomplete", "off".to_string());
    attrs.insert("spellcheck", "false".to_string());
    attrs.insert("tabindex", "0".to_string());
    attrs
}

/// Attributes of the list element.
#[must_use]
pub fn list_attributes(id: &str) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("id", format!("{id}-list"));
    attrs.insert("class", "list".to_string());
    attrs.insert("role", "listbox".to_string());
    attrs.insert("aria-labelledby", format!("{id}-label"));
    attrs
}

/// Attributes of a row element.
#[must_use]
pub fn row_attributes(row: &Row, selected: bool) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("id", row.id.clone());
    attrs.insert(
        "class",
        if selected { "option selected" } else { "option" }.to_string(),
    );
    attrs.insert("role", "option".to_string());
    attrs.insert("aria-selected", selected.to_string());
    attrs
}

/// Truncates text to a display width, marking the cut with an ellipsis.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pads text with spaces to a display width.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let used: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ids() {
        let row = Row::new("fruit", 2, "Cherry");
        assert_eq!(row.id, "fruit-option-2");
        assert!(row.visible);
    }

    #[test]
    fn test_input_attributes() {
        let attrs = input_attributes("fruit", true, Some("fruit-option-1"));
        assert_eq!(attrs["role"], "combobox");
        assert_eq!(attrs["aria-expanded"], "true");
        assert_eq!(attrs["aria-owns"], "fruit-list");
        assert_eq!(attrs["aria-describedby"], "fruit-instructions");
        assert_eq!(attrs["aria-activedescendant"], "fruit-option-1");

        let attrs = input_attributes("fruit", false, None);
        assert_eq!(attrs["aria-expanded"], "false");
        assert_eq!(attrs["aria-activedescendant"], "");
    }

    #[test]
    fn test_row_attributes() {
        let row = Row::new("fruit", 0, "Apple");
        assert_eq!(row_attributes(&row, true)["aria-selected"], "true");
        assert_eq!(row_attributes(&row, true)["class"], "option selected");
        assert_eq!(row_attributes(&row, false)["class"], "option");
    }

    #[test]
    fn test_list_attributes() {
        let attrs = list_attributes("fruit");
        assert_eq!(attrs["id"], "fruit-list");
        assert_eq!(attrs["aria-labelledby"], "fruit-label");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Banana", 10), "Banana");
        assert_eq!(truncate("Banana", 4), "Ban…");
        assert_eq!(truncate("Banana", 0), "");
        assert_eq!(truncate("日本語", 4), "日…");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
