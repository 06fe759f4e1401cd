//! Commands for side effects.
//!
//! Handlers stay pure: anything the host should observe after an update
//! (the change notification) is returned as a lazy [`Cmd`] that the
//! binding executes.

use crate::message::Message;

/// A command that produces a message when executed.
///
/// Commands are lazy - they don't execute until the binding runs them.
///
/// # Example
///
/// ```rust
/// use combobox::{Cmd, Message};
/// use combobox::event::ChangeEvent;
///
/// let cmd = Cmd::new(|| Message::new(ChangeEvent::new("Banana")));
/// let msg = cmd.execute().unwrap();
/// assert!(msg.is::<ChangeEvent>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_new() {
        let cmd = Cmd::new(|| Message::new(42i32));
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 42);
    }

    #[test]
    fn test_cmd_none() {
        assert!(Cmd::none().is_none());
        assert!(Cmd::new_optional(|| None).execute().is_none());
    }
}
