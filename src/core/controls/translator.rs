use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::budget::policy::IterationBudgetPolicy;
use crate::core::controls::bindings::{ControlAction, KeyBindings};
use crate::core::controls::events::{InputEvent, Key, MouseButton};
use crate::core::data::resolution::Resolution;
use crate::core::viewport::delta::ViewportDelta;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Fraction of the view half-width panned per tick while a key is held.
    pub key_pan_fraction: f64,
    /// Relative scale change per tick while a zoom key is held.
    pub key_zoom_rate: f64,
    /// Zoom multiplier per scroll line.
    pub scroll_zoom_base: f64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            key_pan_fraction: 0.05,
            key_zoom_rate: 0.01,
            scroll_zoom_base: 1.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateContext {
    pub resolution: Resolution,
    pub max_iterations: u32,
}

/// Folds one tick of input events into a [`ViewportDelta`].
///
/// Held keys and the drag button persist between ticks; everything else is
/// consumed by the tick that receives it.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    bindings: KeyBindings,
    settings: InputSettings,
    held: HashSet<Key>,
    dragging: bool,
}

impl InputTranslator {
    #[must_use]
    pub fn new(bindings: KeyBindings, settings: InputSettings) -> Self {
        Self {
            bindings,
            settings,
            held: HashSet::new(),
            dragging: false,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn translate(&mut self, events: &[InputEvent], ctx: TranslateContext) -> ViewportDelta {
        let mut delta = ViewportDelta::default();
        let mut drag = [0.0, 0.0];

        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    // one-shot actions fire on the press, not while held
                    if self.held.insert(key) {
                        match self.bindings.action_for(key) {
                            Some(ControlAction::ResetView) => delta.reset_requested = true,
                            Some(ControlAction::Quit) => delta.quit_requested = true,
                            _ => {}
                        }
                    }
                }
                InputEvent::KeyUp(key) => {
                    self.held.remove(&key);
                }
                InputEvent::MouseDown(MouseButton::Left) => self.dragging = true,
                InputEvent::MouseUp(MouseButton::Left) => self.dragging = false,
                InputEvent::MouseMotion { dx, dy } => {
                    if self.dragging && dx.is_finite() && dy.is_finite() {
                        drag[0] -= dx;
                        drag[1] -= dy;
                    }
                }
                InputEvent::Scroll { lines } => {
                    let factor = self.settings.scroll_zoom_base.powf(-lines);
                    if factor.is_finite() && factor > 0.0 {
                        delta.zoom_factor *= factor;
                    }
                }
                InputEvent::FocusLost => {
                    self.held.clear();
                    self.dragging = false;
                }
                InputEvent::MouseDown(_) | InputEvent::MouseUp(_) | InputEvent::Unknown(_) => {}
            }
        }

        let key_pan = self.key_pan(ctx.resolution);
        delta.pan_pixels = [key_pan[0] + drag[0], key_pan[1] + drag[1]];

        let zoom_in = self.is_active(ControlAction::ZoomIn);
        let zoom_out = self.is_active(ControlAction::ZoomOut);
        if zoom_in != zoom_out {
            let rate = self.settings.key_zoom_rate;
            delta.zoom_factor *= if zoom_in { 1.0 - rate } else { 1.0 + rate };
        }

        let more = self.is_active(ControlAction::IncreaseIterations);
        let fewer = self.is_active(ControlAction::DecreaseIterations);
        if more != fewer {
            let step = i64::from(IterationBudgetPolicy::manual_step(ctx.max_iterations));
            delta.iteration_delta = if more { step } else { -step };
        }

        delta
    }

    fn is_active(&self, action: ControlAction) -> bool {
        self.held
            .iter()
            .any(|&key| self.bindings.action_for(key) == Some(action))
    }

    fn key_pan(&self, resolution: Resolution) -> [f64; 2] {
        let mut direction = [0.0_f64, 0.0_f64];

        for (action, x, y) in [
            (ControlAction::PanLeft, -1.0, 0.0),
            (ControlAction::PanRight, 1.0, 0.0),
            (ControlAction::PanUp, 0.0, -1.0),
            (ControlAction::PanDown, 0.0, 1.0),
        ] {
            if self.is_active(action) {
                direction[0] += x;
                direction[1] += y;
            }
        }

        let length = direction[0].hypot(direction[1]);
        if length == 0.0 {
            return [0.0, 0.0];
        }

        let distance = self.settings.key_pan_fraction * f64::from(resolution.width()) / 2.0;
        [
            direction[0] / length * distance,
            direction[1] / length * distance,
        ]
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(KeyBindings::default(), InputSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TranslateContext {
        TranslateContext {
            resolution: Resolution::new(800, 600).unwrap(),
            max_iterations: 1_000,
        }
    }

    #[test]
    fn no_events_is_identity() {
        let mut translator = InputTranslator::default();

        assert!(translator.translate(&[], ctx()).is_identity());
    }

    #[test]
    fn held_key_pans_every_tick_until_released() {
        let mut translator = InputTranslator::default();

        let first = translator.translate(&[InputEvent::KeyDown(Key::ArrowRight)], ctx());
        let second = translator.translate(&[], ctx());
        let released = translator.translate(&[InputEvent::KeyUp(Key::ArrowRight)], ctx());

        // 5% of the 400px half-width
        assert_eq!(first.pan_pixels, [20.0, 0.0]);
        assert_eq!(second.pan_pixels, [20.0, 0.0]);
        assert_eq!(released.pan_pixels, [0.0, 0.0]);
    }

    #[test]
    fn diagonal_pan_is_no_faster_than_axial() {
        let mut axial = InputTranslator::default();
        let mut diagonal = InputTranslator::default();

        let a = axial.translate(&[InputEvent::KeyDown(Key::ArrowUp)], ctx());
        let d = diagonal.translate(
            &[
                InputEvent::KeyDown(Key::ArrowUp),
                InputEvent::KeyDown(Key::ArrowLeft),
            ],
            ctx(),
        );

        let axial_length = a.pan_pixels[0].hypot(a.pan_pixels[1]);
        let diagonal_length = d.pan_pixels[0].hypot(d.pan_pixels[1]);
        assert!((axial_length - diagonal_length).abs() < 1e-9);
        assert!(d.pan_pixels[0] < 0.0 && d.pan_pixels[1] < 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut translator = InputTranslator::default();

        let delta = translator.translate(
            &[
                InputEvent::KeyDown(Key::ArrowLeft),
                InputEvent::KeyDown(Key::ArrowRight),
                InputEvent::KeyDown(Key::char('x')),
                InputEvent::KeyDown(Key::char('z')),
            ],
            ctx(),
        );

        assert_eq!(delta.pan_pixels, [0.0, 0.0]);
        assert_eq!(delta.zoom_factor, 1.0);
    }

    #[test]
    fn drag_pans_by_negated_motion() {
        let mut translator = InputTranslator::default();

        let delta = translator.translate(
            &[
                InputEvent::MouseMotion { dx: 50.0, dy: 50.0 },
                InputEvent::MouseDown(MouseButton::Left),
                InputEvent::MouseMotion { dx: 12.0, dy: -4.0 },
                InputEvent::MouseMotion { dx: 3.0, dy: 1.0 },
            ],
            ctx(),
        );

        assert_eq!(delta.pan_pixels, [-15.0, 3.0]);
        assert!(translator.is_dragging());
    }

    #[test]
    fn scroll_and_zoom_keys_multiply() {
        let mut translator = InputTranslator::default();

        let delta = translator.translate(
            &[
                InputEvent::Scroll { lines: 1.0 },
                InputEvent::Scroll { lines: 1.0 },
                InputEvent::KeyDown(Key::char('x')),
            ],
            ctx(),
        );

        let expected = 1.1_f64.powf(-1.0) * 1.1_f64.powf(-1.0) * 0.99;
        assert!((delta.zoom_factor - expected).abs() < 1e-12);
    }

    #[test]
    fn iteration_keys_use_manual_step() {
        let mut translator = InputTranslator::default();

        let up = translator.translate(&[InputEvent::KeyDown(Key::char('c'))], ctx());
        let down = translator.translate(
            &[
                InputEvent::KeyUp(Key::char('c')),
                InputEvent::KeyDown(Key::char('v')),
            ],
            ctx(),
        );

        assert_eq!(up.iteration_delta, 5);
        assert_eq!(down.iteration_delta, -5);
    }

    #[test]
    fn reset_fires_once_per_press() {
        let mut translator = InputTranslator::default();

        let pressed = translator.translate(&[InputEvent::KeyDown(Key::char('r'))], ctx());
        let repeated = translator.translate(&[InputEvent::KeyDown(Key::char('r'))], ctx());

        assert!(pressed.reset_requested);
        assert!(!repeated.reset_requested);
    }

    #[test]
    fn quit_key_requests_exit_once() {
        let mut translator = InputTranslator::default();

        let pressed = translator.translate(&[InputEvent::KeyDown(Key::char('W'))], ctx());
        let held = translator.translate(&[], ctx());

        assert!(pressed.quit_requested);
        assert!(!held.quit_requested);
        assert_eq!(pressed.pan_pixels, [0.0, 0.0]);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut translator = InputTranslator::default();
        translator.translate(
            &[
                InputEvent::KeyDown(Key::ArrowDown),
                InputEvent::MouseDown(MouseButton::Left),
            ],
            ctx(),
        );

        let delta = translator.translate(
            &[
                InputEvent::FocusLost,
                InputEvent::MouseMotion { dx: 10.0, dy: 10.0 },
            ],
            ctx(),
        );

        assert!(delta.is_identity());
        assert!(!translator.is_dragging());
    }

    #[test]
    fn unknown_and_non_finite_events_are_ignored() {
        let mut translator = InputTranslator::default();

        let delta = translator.translate(
            &[
                InputEvent::Unknown(77),
                InputEvent::KeyDown(Key::char('q')),
                InputEvent::MouseDown(MouseButton::Left),
                InputEvent::MouseMotion {
                    dx: f64::NAN,
                    dy: 1.0,
                },
                InputEvent::Scroll {
                    lines: f64::INFINITY,
                },
            ],
            ctx(),
        );

        assert!(delta.is_identity());
    }
}
