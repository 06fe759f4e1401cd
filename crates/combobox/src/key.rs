//! Keyboard input handling.
//!
//! [`KeyMsg`] is the binding-neutral key event the component understands.
//! Terminal bindings convert crossterm events with [`from_crossterm_key`];
//! browser bindings convert `KeyboardEvent.key` strings with
//! [`KeyMsg::from_dom_key`].

use std::fmt;

/// Keyboard key event message.
///
/// # Example
///
/// ```rust
/// use combobox::{KeyMsg, KeyType};
///
/// fn handle_key(key: KeyMsg) {
///     match key.key_type {
///         KeyType::Enter => println!("Enter pressed"),
///         KeyType::Runes => println!("Typed: {:?}", key.runes),
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For KeyType::Runes, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether this came from a paste operation.
    pub paste: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
            paste: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
            paste: false,
        }
    }

    /// Create a new key message from multiple characters (e.g., from IME).
    pub fn from_runes(runes: Vec<char>) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes,
            alt: false,
            paste: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Set the paste flag.
    pub fn with_paste(mut self) -> Self {
        self.paste = true;
        self
    }

    /// Convert a DOM `KeyboardEvent.key` value.
    ///
    /// Named keys map to their key type; a single printable character maps to
    /// [`KeyType::Runes`]. Returns `None` for keys the component has no use
    /// for (modifiers alone, function keys, dead keys).
    ///
    /// ```rust
    /// use combobox::{KeyMsg, KeyType};
    ///
    /// assert_eq!(KeyMsg::from_dom_key("ArrowDown").unwrap().key_type, KeyType::Down);
    /// assert_eq!(KeyMsg::from_dom_key("a").unwrap().runes, vec!['a']);
    /// assert!(KeyMsg::from_dom_key("Shift").is_none());
    /// ```
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let key_type = match key {
            "ArrowUp" | "Up" => KeyType::Up,
            "ArrowDown" | "Down" => KeyType::Down,
            "ArrowLeft" | "Left" => KeyType::Left,
            "ArrowRight" | "Right" => KeyType::Right,
            "Enter" => KeyType::Enter,
            "Escape" | "Esc" => KeyType::Esc,
            "Backspace" => KeyType::Backspace,
            "Delete" | "Del" => KeyType::Delete,
            "Tab" => KeyType::Tab,
            "Home" => KeyType::Home,
            "End" => KeyType::End,
            "PageUp" => KeyType::PgUp,
            "PageDown" => KeyType::PgDown,
            " " | "Spacebar" => KeyType::Space,
            _ => {
                let mut chars = key.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(Self::from_char(c)),
                    _ => None,
                };
            }
        };
        Some(Self::from_type(key_type))
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            if self.paste {
                write!(f, "[")?;
            }
            for c in &self.runes {
                write!(f, "{}", c)?;
            }
            if self.paste {
                write!(f, "]")?;
            }
        } else {
            write!(f, "{}", self.key_type)?;
        }
        Ok(())
    }
}

/// Key type enumeration.
///
/// Only the keys a single-line combobox reacts to are distinguished; anything
/// else arrives as [`KeyType::Runes`] with no characters and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Ctrl+A.
    CtrlA,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Ctrl+E.
    CtrlE,
    /// Ctrl+K.
    CtrlK,
    /// Ctrl+N.
    CtrlN,
    /// Ctrl+P.
    CtrlP,
    /// Ctrl+U.
    CtrlU,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Enter.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete key.
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Right arrow.
    Right,
    /// Left arrow.
    Left,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Space key.
    Space,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::CtrlA => "ctrl+a",
            KeyType::CtrlC => "ctrl+c",
            KeyType::CtrlE => "ctrl+e",
            KeyType::CtrlK => "ctrl+k",
            KeyType::CtrlN => "ctrl+n",
            KeyType::CtrlP => "ctrl+p",
            KeyType::CtrlU => "ctrl+u",
            KeyType::Tab => "tab",
            KeyType::ShiftTab => "shift+tab",
            KeyType::Enter => "enter",
            KeyType::Esc => "esc",
            KeyType::Backspace => "backspace",
            KeyType::Delete => "delete",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Right => "right",
            KeyType::Left => "left",
            KeyType::Home => "home",
            KeyType::End => "end",
            KeyType::PgUp => "pgup",
            KeyType::PgDown => "pgdown",
            KeyType::Space => " ",
        };
        write!(f, "{}", name)
    }
}

/// Convert a crossterm key event to a [`KeyMsg`].
#[cfg(feature = "terminal")]
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> KeyMsg {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl => {
            let kt = match c.to_ascii_lowercase() {
                'a' => KeyType::CtrlA,
                'c' => KeyType::CtrlC,
                'e' => KeyType::CtrlE,
                'k' => KeyType::CtrlK,
                'n' => KeyType::CtrlN,
                'p' => KeyType::CtrlP,
                'u' => KeyType::CtrlU,
                'm' => KeyType::Enter,
                'i' => KeyType::Tab,
                _ => KeyType::Runes,
            };
            (kt, Vec::new())
        }
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => (KeyType::Runes, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
        paste: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_msg_display() {
        let key = KeyMsg::from_type(KeyType::Enter);
        assert_eq!(key.to_string(), "enter");

        let key = KeyMsg::from_char('a');
        assert_eq!(key.to_string(), "a");

        let key = KeyMsg::from_char('a').with_alt();
        assert_eq!(key.to_string(), "alt+a");

        let key = KeyMsg::from_runes(vec!['h', 'e', 'l', 'l', 'o']).with_paste();
        assert_eq!(key.to_string(), "[hello]");
    }

    #[test]
    fn test_key_type_display() {
        assert_eq!(KeyType::Down.to_string(), "down");
        assert_eq!(KeyType::CtrlN.to_string(), "ctrl+n");
        assert_eq!(KeyType::Esc.to_string(), "esc");
    }

    #[test]
    fn test_from_dom_key_named() {
        assert_eq!(KeyMsg::from_dom_key("ArrowUp").unwrap().key_type, KeyType::Up);
        assert_eq!(KeyMsg::from_dom_key("Enter").unwrap().key_type, KeyType::Enter);
        assert_eq!(KeyMsg::from_dom_key("Escape").unwrap().key_type, KeyType::Esc);
        assert_eq!(KeyMsg::from_dom_key(" ").unwrap().key_type, KeyType::Space);
    }

    #[test]
    fn test_from_dom_key_chars_and_unknown() {
        let key = KeyMsg::from_dom_key("é").unwrap();
        assert_eq!(key.key_type, KeyType::Runes);
        assert_eq!(key.runes, vec!['é']);

        assert!(KeyMsg::from_dom_key("Control").is_none());
        assert!(KeyMsg::from_dom_key("F5").is_none());
        assert!(KeyMsg::from_dom_key("").is_none());
    }

    #[cfg(feature = "terminal")]
    #[test]
    fn test_from_crossterm_key() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let key = from_crossterm_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Down);

        let key = from_crossterm_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlN);

        let key = from_crossterm_key(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(key.runes, vec!['x']);
        assert!(key.alt);
    }
}
