//! Mouse input handling.
//!
//! Terminal bindings deliver [`MouseMsg`] with cell coordinates; the component
//! hit-tests them against its rendered rows and turns motion into hover and
//! presses into commits.

use std::fmt;

/// Mouse event message.
///
/// # Example
///
/// ```rust
/// use combobox::{MouseAction, MouseButton, MouseMsg};
///
/// fn handle_mouse(mouse: MouseMsg) {
///     if mouse.button == MouseButton::Left && mouse.action == MouseAction::Press {
///         println!("Left click at ({}, {})", mouse.x, mouse.y);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMsg {
    /// X coordinate (column), 0-indexed.
    pub x: u16,
    /// Y coordinate (row), 0-indexed.
    pub y: u16,
    /// The action that occurred.
    pub action: MouseAction,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseMsg {
    /// A left-button press at the given cell.
    pub fn press(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
        }
    }

    /// Pointer motion to the given cell.
    pub fn motion(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Motion,
            button: MouseButton::None,
        }
    }

    /// Check if this is a wheel event.
    pub fn is_wheel(&self) -> bool {
        matches!(self.button, MouseButton::WheelUp | MouseButton::WheelDown)
    }
}

impl Default for MouseMsg {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            action: MouseAction::Press,
            button: MouseButton::None,
        }
    }
}

impl fmt::Display for MouseMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.button == MouseButton::None {
            write!(f, "{}", self.action)
        } else if self.is_wheel() || self.action == MouseAction::Press {
            write!(f, "{}", self.button)
        } else {
            write!(f, "{} {}", self.button, self.action)
        }
    }
}

/// Mouse action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseAction {
    /// Mouse button pressed.
    #[default]
    Press,
    /// Mouse button released.
    Release,
    /// Mouse moved.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseAction::Press => "press",
            MouseAction::Release => "release",
            MouseAction::Motion => "motion",
        };
        write!(f, "{}", name)
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (motion only).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::None => "none",
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::WheelUp => "wheel up",
            MouseButton::WheelDown => "wheel down",
        };
        write!(f, "{}", name)
    }
}

/// Convert a crossterm mouse event to our MouseMsg.
#[cfg(feature = "terminal")]
pub fn from_crossterm_mouse(event: crossterm::event::MouseEvent) -> MouseMsg {
    use crossterm::event::{MouseButton as CtButton, MouseEventKind};

    let action = match event.kind {
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Motion,
        _ => MouseAction::Press,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        _ => MouseButton::None,
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_msg_display() {
        assert_eq!(MouseMsg::press(3, 4).to_string(), "left");
        assert_eq!(MouseMsg::motion(3, 4).to_string(), "motion");

        let release = MouseMsg {
            action: MouseAction::Release,
            button: MouseButton::Left,
            ..Default::default()
        };
        assert_eq!(release.to_string(), "left release");
    }

    #[test]
    fn test_mouse_is_wheel() {
        let mouse = MouseMsg {
            button: MouseButton::WheelUp,
            ..Default::default()
        };
        assert!(mouse.is_wheel());
        assert!(!MouseMsg::press(0, 0).is_wheel());
    }

    #[cfg(feature = "terminal")]
    #[test]
    fn test_from_crossterm_mouse() {
        use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

        let event = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 2,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(from_crossterm_mouse(event), MouseMsg::motion(2, 5));

        let event = MouseEvent {
            kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 1,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(from_crossterm_mouse(event), MouseMsg::press(1, 3));
    }
}
