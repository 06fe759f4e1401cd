//! The Model trait: the seam between a component and the binding that
//! drives it.

use crate::command::Cmd;
use crate::message::Message;

/// A message-driven UI component.
///
/// Bindings feed every native event in as a [`Message`], run the returned
/// [`Cmd`] and redraw from [`Model::view`]. Each call runs to completion
/// before the next message is delivered.
///
/// # Example
///
/// ```rust
/// use combobox::{Cmd, Message, Model};
///
/// struct Counter { count: i32 }
///
/// impl Model for Counter {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.count += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("Count: {}", self.count)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    ///
    /// This is called once when the binding starts.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// This should be a pure function with no side effects.
    fn view(&self) -> String;
}
