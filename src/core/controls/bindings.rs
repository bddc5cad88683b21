use std::collections::HashMap;

use crate::core::controls::events::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    IncreaseIterations,
    DecreaseIterations,
    ResetView,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<Key, ControlAction>,
}

impl KeyBindings {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: Key, action: ControlAction) -> Option<ControlAction> {
        self.bindings.insert(key, action)
    }

    #[must_use]
    pub fn action_for(&self, key: Key) -> Option<ControlAction> {
        self.bindings.get(&key).copied()
    }

}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        for (key, action) in [
            (Key::ArrowLeft, ControlAction::PanLeft),
            (Key::ArrowRight, ControlAction::PanRight),
            (Key::ArrowUp, ControlAction::PanUp),
            (Key::ArrowDown, ControlAction::PanDown),
            (Key::char('x'), ControlAction::ZoomIn),
            (Key::char('z'), ControlAction::ZoomOut),
            (Key::char('c'), ControlAction::IncreaseIterations),
            (Key::char('v'), ControlAction::DecreaseIterations),
            (Key::char('r'), ControlAction::ResetView),
            (Key::char('w'), ControlAction::Quit),
        ] {
            bindings.bind(key, action);
        }

        bindings
    }
}
