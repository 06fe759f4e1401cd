//! Message types delivered to a combobox.
//!
//! Bindings translate their native events (terminal input, DOM events) into
//! messages. Every state change of the component is the result of handling
//! exactly one message.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Message::new`] to create
/// a message and [`Message::downcast`] to retrieve the original type.
///
/// # Example
///
/// ```rust
/// use combobox::Message;
/// use combobox::message::HoverMsg;
///
/// let msg = Message::new(HoverMsg(2));
/// assert_eq!(msg.downcast_ref::<HoverMsg>(), Some(&HoverMsg(2)));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    ///
    /// Returns `Some(T)` if the message is of type `T`, otherwise `None`.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// The text field gained focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMsg;

/// The text field lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurMsg;

/// The host replaced the text value, as a browser `input` event would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMsg(pub String);

/// The host replaced the option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOptionsMsg(pub Vec<String>);

/// The pointer moved over the row at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverMsg(pub usize);

/// The pointer was pressed on the row at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressMsg(pub usize);
