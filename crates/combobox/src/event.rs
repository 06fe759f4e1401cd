//! Notifications the combobox sends to its host.

use serde::{Deserialize, Serialize};

/// Name of the notification fired when a value is committed.
pub const CHANGE_EVENT: &str = "change";

/// Payload of the `change` notification.
///
/// Serializes as `{"value": "<label>"}`.
///
/// ```rust
/// use combobox::event::ChangeEvent;
///
/// let event = ChangeEvent::new("Banana");
/// assert_eq!(serde_json::to_string(&event).unwrap(), r#"{"value":"Banana"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// The committed option label.
    pub value: String,
}

impl ChangeEvent {
    /// Creates a change event for a committed label.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A host callback for `change` notifications.
pub type ChangeListener = Box<dyn FnMut(&ChangeEvent) + Send>;

/// What a handler did with a native event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventResult {
    /// The binding should suppress the native default action
    /// (page scroll on arrow keys, focus loss on pointer press).
    pub prevent_default: bool,
    /// The value committed by this event, if any.
    pub change: Option<ChangeEvent>,
}

impl EventResult {
    /// The event was not acted on.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The event was handled and its default action must be suppressed.
    #[must_use]
    pub fn prevented() -> Self {
        Self {
            prevent_default: true,
            change: None,
        }
    }

    /// Attaches a committed value.
    #[must_use]
    pub fn with_change(mut self, change: Option<ChangeEvent>) -> Self {
        self.change = change;
        self
    }
}
