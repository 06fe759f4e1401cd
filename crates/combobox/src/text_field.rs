//! Single-line text field holding the combobox's current text value.

use crate::key::{KeyMsg, KeyType};

/// A minimal single-line editor.
///
/// Edits come from [`TextField::handle_key`]; hosts that own a native text
/// box replace the whole value with [`TextField::set_value`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

impl TextField {
    /// Creates an empty, unfocused field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value as a string.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, s: &str) {
        self.value = sanitize(s.chars());
        self.pos = self.value.len();
    }

    /// Returns the cursor position in characters.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the field has focus.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus from the field.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Applies an editing key. Returns `true` if the value changed.
    ///
    /// Cursor-only keys move the cursor and return `false`. Keys with no
    /// editing meaning are ignored.
    pub fn handle_key(&mut self, key: &KeyMsg) -> bool {
        match key.key_type {
            KeyType::Runes if !key.alt => self.insert(&key.runes),
            KeyType::Space => self.insert(&[' ']),
            KeyType::Backspace => {
                if self.pos == 0 {
                    return false;
                }
                self.pos -= 1;
                self.value.remove(self.pos);
                true
            }
            KeyType::Delete => {
                if self.pos >= self.value.len() {
                    return false;
                }
                self.value.remove(self.pos);
                true
            }
            KeyType::CtrlU => {
                if self.pos == 0 {
                    return false;
                }
                self.value.drain(..self.pos);
                self.pos = 0;
                true
            }
            KeyType::CtrlK => {
                if self.pos >= self.value.len() {
                    return false;
                }
                self.value.truncate(self.pos);
                true
            }
            KeyType::Left => {
                self.pos = self.pos.saturating_sub(1);
                false
            }
            KeyType::Right => {
                self.pos = (self.pos + 1).min(self.value.len());
                false
            }
            KeyType::Home | KeyType::CtrlA => {
                self.pos = 0;
                false
            }
            KeyType::End | KeyType::CtrlE => {
                self.pos = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, runes: &[char]) -> bool {
        let clean = sanitize(runes.iter().copied());
        if clean.is_empty() {
            return false;
        }
        let count = clean.len();
        self.value.splice(self.pos..self.pos, clean);
        self.pos += count;
        true
    }
}

/// A single-line form of `text` for drawing.
pub(crate) fn single_line(text: &str) -> String {
    sanitize(text.chars()).into_iter().collect()
}

/// Strips line breaks and other control characters; tabs become spaces.
fn sanitize(chars: impl Iterator<Item = char>) -> Vec<char> {
    chars
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
