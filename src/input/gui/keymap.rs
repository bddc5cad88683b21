//! Translation from winit window events to backend-free [`InputEvent`]s.

use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey, NativeKeyCode, PhysicalKey};

use crate::core::controls::events::{InputEvent, Key, MouseButton};

// pixel-precise wheels report distance; treat this much as one line
const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

#[must_use]
pub fn map_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        WinitKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        WinitKey::Named(NamedKey::ArrowUp) => Some(Key::ArrowUp),
        WinitKey::Named(NamedKey::ArrowDown) => Some(Key::ArrowDown),
        WinitKey::Character(text) => text.chars().next().map(Key::char),
        _ => None,
    }
}

/// Platform scancode of a key the viewer has no name for; zero when winit
/// identified the key itself.
#[must_use]
pub fn native_code(key: &PhysicalKey) -> u32 {
    match key {
        PhysicalKey::Unidentified(NativeKeyCode::Xkb(code) | NativeKeyCode::Android(code)) => {
            *code
        }
        PhysicalKey::Unidentified(NativeKeyCode::Windows(code) | NativeKeyCode::MacOS(code)) => {
            u32::from(*code)
        }
        _ => 0,
    }
}

#[must_use]
pub fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(code) => MouseButton::Other(code),
    }
}

#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
    }
}

/// Buffers input between frames and turns absolute cursor positions into
/// motion deltas.
#[derive(Debug, Default)]
pub struct InputCollector {
    pending: Vec<InputEvent>,
    last_cursor: Option<(f64, f64)>,
}

impl InputCollector {
    pub fn handle(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                match (map_key(&event.logical_key), event.state) {
                    (Some(key), ElementState::Pressed) if !event.repeat => {
                        self.pending.push(InputEvent::KeyDown(key));
                    }
                    (Some(key), ElementState::Released) => {
                        self.pending.push(InputEvent::KeyUp(key));
                    }
                    (None, ElementState::Pressed) if !event.repeat => {
                        self.pending
                            .push(InputEvent::Unknown(native_code(&event.physical_key)));
                    }
                    _ => {}
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_mouse_button(*button);
                self.pending.push(match state {
                    ElementState::Pressed => InputEvent::MouseDown(button),
                    ElementState::Released => InputEvent::MouseUp(button),
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.last_cursor = None,
            WindowEvent::MouseWheel { delta, .. } => {
                self.pending.push(InputEvent::Scroll {
                    lines: scroll_lines(*delta),
                });
            }
            WindowEvent::Focused(false) => {
                self.last_cursor = None;
                self.pending.push(InputEvent::FocusLost);
            }
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.pending.push(InputEvent::MouseMotion {
                dx: x - last_x,
                dy: y - last_y,
            });
        }
        self.last_cursor = Some((x, y));
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
