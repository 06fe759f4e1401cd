#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Combobox
//!
//! A searchable dropdown component: a text field over a filterable list of
//! options, with keyboard and pointer selection and a `change` notification
//! when a value is committed.
//!
//! The component is a plain state machine with no rendering environment of
//! its own. Bindings feed it native events and draw what it describes:
//! - **terminal** - [`Combobox::view`] plus crossterm key and mouse
//!   conversion (the `terminal` feature, on by default)
//! - **browser** - [`Combobox::render_tree`] mirrored into the DOM
//!
//! Modules:
//! - **combobox** - the component
//! - **options** - option sets and their JSON attribute form
//! - **filter** - case-insensitive substring filtering
//! - **navigation** - cursor movement and the navigation policy
//! - **viewport** - bottom-aligned list scrolling
//! - **text_field** - single-line editing for terminal bindings
//! - **keymap** - key bindings and matching
//! - **render** - render tree and ARIA attributes
//! - **style** - colors and text styles
//! - **registry** - explicit element registration
//! - **simulator** - headless driver for tests and scripts
//!
//! ## Example
//!
//! ```rust
//! use combobox::{Combobox, KeyMsg, KeyType};
//!
//! let mut combo = Combobox::new("fruit");
//! combo.set_options(["Apple", "Banana", "Cherry"]);
//! combo.on_focus();
//!
//! combo.on_keydown(&KeyMsg::from_type(KeyType::Up));
//! assert_eq!(combo.selected_label(), Some("Cherry"));
//! ```

pub mod combobox;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod key;
pub mod keymap;
pub mod message;
pub mod model;
pub mod mouse;
pub mod navigation;
pub mod options;
pub mod registry;
pub mod render;
pub mod simulator;
pub mod style;
pub mod text_field;
pub mod viewport;

pub use crate::combobox::Combobox;
pub use command::Cmd;
pub use config::ComboboxConfig;
pub use error::{Error, Result};
pub use event::{CHANGE_EVENT, ChangeEvent, EventResult};
pub use key::{KeyMsg, KeyType};
pub use message::Message;
pub use model::Model;
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use navigation::{Cursor, NavigationPolicy};
pub use options::OptionSet;
pub use registry::{DEFAULT_TAG, Registry};
pub use render::RenderTree;

#[cfg(feature = "terminal")]
pub use key::from_crossterm_key;
#[cfg(feature = "terminal")]
pub use mouse::from_crossterm_mouse;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::combobox::Combobox;
    pub use crate::command::Cmd;
    pub use crate::config::ComboboxConfig;
    pub use crate::error::{Error, Result};
    pub use crate::event::{ChangeEvent, EventResult};
    pub use crate::key::{KeyMsg, KeyType};
    pub use crate::keymap::{Binding, KeyMap, matches};
    pub use crate::message::{
        BlurMsg, FocusMsg, HoverMsg, InputMsg, Message, PressMsg, SetOptionsMsg,
    };
    pub use crate::model::Model;
    pub use crate::mouse::{MouseAction, MouseButton, MouseMsg};
    pub use crate::navigation::{Cursor, NavigationPolicy};
    pub use crate::options::OptionSet;
    pub use crate::registry::Registry;
    pub use crate::simulator::ProgramSimulator;
    pub use crate::style::Styles;
}
