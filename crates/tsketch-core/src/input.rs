//! Input event types for pointer, wheel and keyboard events.

use crate::vector::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier the host assigns to an active pointer.
pub type PointerId = i64;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Map a DOM-style `button` index (0 left, 1 middle, 2 right).
    pub fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// Bit mask of currently held buttons, DOM `buttons` layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons(pub u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const LEFT: Buttons = Buttons(1);
    pub const RIGHT: Buttons = Buttons(2);
    pub const MIDDLE: Buttons = Buttons(4);

    pub fn contains(self, button: MouseButton) -> bool {
        let bit = match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        };
        self.0 & bit.0 != 0
    }

    pub fn with(self, button: MouseButton) -> Self {
        let bit = match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        };
        Buttons(self.0 | bit.0)
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    /// Anything else; such events are ignored.
    Unknown,
}

impl From<&str> for PointerKind {
    fn from(s: &str) -> Self {
        match s {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Unknown,
        }
    }
}

/// Lifecycle stage of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
    Out,
    Leave,
}

impl PointerPhase {
    /// Up, cancel, out and leave all end the pointer's interaction.
    pub fn is_release(self) -> bool {
        matches!(
            self,
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Out | PointerPhase::Leave
        )
    }
}

/// A pointer event as delivered by the host, in global (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub position: Vector2,
    /// Button whose state changed, for down and up events.
    pub button: Option<MouseButton>,
    /// Buttons held while the event fired.
    pub buttons: Buttons,
    /// Normalized pressure in `[0, 1]`.
    pub pressure: f64,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, kind: PointerKind, phase: PointerPhase, position: Vector2) -> Self {
        Self {
            pointer_id,
            kind,
            phase,
            position,
            button: None,
            buttons: Buttons::NONE,
            pressure: 0.0,
            modifiers: Modifiers::default(),
        }
    }

    /// Mouse event for the single mouse pointer.
    pub fn mouse(phase: PointerPhase, position: Vector2) -> Self {
        Self::new(1, PointerKind::Mouse, phase, position)
    }

    pub fn touch(pointer_id: PointerId, phase: PointerPhase, position: Vector2) -> Self {
        Self::new(pointer_id, PointerKind::Touch, phase, position)
    }

    pub fn pen(phase: PointerPhase, position: Vector2, pressure: f64) -> Self {
        Self::new(2, PointerKind::Pen, phase, position).with_pressure(pressure)
    }

    /// Set the changed button and, for down events, mark it as held.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        if self.phase == PointerPhase::Down {
            self.buttons = self.buttons.with(button);
        }
        self
    }

    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A wheel or trackpad scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Pointer position in global coordinates.
    pub position: Vector2,
    pub delta: Vector2,
    /// Pinch-to-zoom trackpads report ctrl as held.
    pub ctrl: bool,
}

/// Keyboard event type, carrying the key code (`"Escape"`, `"ShiftLeft"`...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Tracks which keys are held.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed_keys: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key event. Returns true for a fresh press (not auto-repeat).
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        match event {
            KeyEvent::Pressed(key) => self.pressed_keys.insert(key.clone()),
            KeyEvent::Released(key) => {
                self.pressed_keys.remove(key);
                false
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Drop all held keys, e.g. when the host window loses focus.
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_kind_parse() {
        assert_eq!(PointerKind::from("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from("eye-tracker"), PointerKind::Unknown);
    }

    #[test]
    fn test_release_phases() {
        assert!(!PointerPhase::Down.is_release());
        assert!(!PointerPhase::Move.is_release());
        for phase in [
            PointerPhase::Up,
            PointerPhase::Cancel,
            PointerPhase::Out,
            PointerPhase::Leave,
        ] {
            assert!(phase.is_release());
        }
    }

    #[test]
    fn test_buttons_mask() {
        let b = Buttons::NONE.with(MouseButton::Left).with(MouseButton::Middle);
        assert!(b.contains(MouseButton::Left));
        assert!(b.contains(MouseButton::Middle));
        assert!(!b.contains(MouseButton::Right));
        assert_eq!(b, Buttons(5));
    }

    #[test]
    fn test_button_index() {
        assert_eq!(MouseButton::from_index(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_index(1), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_index(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_index(3), None);
    }

    #[test]
    fn test_with_button_marks_held_on_down() {
        let down = PointerEvent::mouse(PointerPhase::Down, Vector2::ZERO).with_button(MouseButton::Left);
        assert!(down.buttons.contains(MouseButton::Left));
        let up = PointerEvent::mouse(PointerPhase::Up, Vector2::ZERO).with_button(MouseButton::Left);
        assert!(!up.buttons.contains(MouseButton::Left));
    }

    #[test]
    fn test_key_state() {
        let mut keys = KeyState::new();
        assert!(keys.handle_key_event(&KeyEvent::Pressed("Space".into())));
        // Auto-repeat
        assert!(!keys.handle_key_event(&KeyEvent::Pressed("Space".into())));
        assert!(keys.is_key_pressed("Space"));
        keys.handle_key_event(&KeyEvent::Released("Space".into()));
        assert!(!keys.is_key_pressed("Space"));
    }
}
