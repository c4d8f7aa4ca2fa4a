//! Keyboard keys the controllers react to, decoded from `KeyboardEvent.key`.

/// A decoded keyboard key. Anything the controllers ignore is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Space,
    Other,
}

impl Key {
    /// Decode the DOM `KeyboardEvent.key` string.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            " " => Key::Space,
            _ => Key::Other,
        }
    }

    /// Enter and Space activate buttons-like widgets.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}
