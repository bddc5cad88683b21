/// Keys the viewer distinguishes. Character keys are stored lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
}

impl Key {
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::Char(c.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Windowing-layer input, already decoupled from any backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Cursor motion in pixels since the previous event.
    MouseMotion { dx: f64, dy: f64 },
    /// Wheel movement in lines; positive is away from the user.
    Scroll { lines: f64 },
    FocusLost,
    /// A key or control the backend reported but the viewer has no name for,
    /// carrying its native code where one exists.
    Unknown(u32),
}
