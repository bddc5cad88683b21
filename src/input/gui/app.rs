//! Main GUI application loop.

use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, trace};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::controllers::interactive::cadence::FrameCadence;
use crate::controllers::interactive::session::ExplorerSession;
use crate::core::palette::kinds::PaletteStyleKind;
use crate::errors::ResourceError;
use crate::input::gui::keymap::InputCollector;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// What the overlay shows about the last frame.
#[derive(Debug, Default)]
struct OverlayState {
    center: [f64; 2],
    scale: f64,
    max_iterations: u32,
    render_duration: Option<Duration>,
    palette_style: PaletteStyleKind,
    message: Option<String>,
}

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    session: ExplorerSession,
    collector: InputCollector,
    cadence: FrameCadence,
    last_poll: Instant,
    overlay: OverlayState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        session: ExplorerSession,
        cadence: FrameCadence,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );
        let overlay = OverlayState {
            palette_style: session
                .renderer()
                .palette()
                .style()
                .unwrap_or_default(),
            ..OverlayState::default()
        };

        Self {
            window,
            presenter,
            session,
            collector: InputCollector::default(),
            cadence,
            last_poll: Instant::now(),
            overlay,
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), ResourceError> {
        let window = self.window;

        event_loop
            .run(move |event, elwt| match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    let response = self.egui_state.on_window_event(window, &event);

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => self.resize(size.width, size.height),
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            self.egui_ctx.set_pixels_per_point(scale_factor as f32);
                            let size = window.inner_size();
                            self.resize(size.width, size.height);
                        }
                        WindowEvent::RedrawRequested => {
                            if let Err(err) = self.redraw() {
                                error!("render failed: {}", err);
                                elwt.exit();
                            }
                            if self.session.quit_requested() {
                                elwt.exit();
                            }
                        }
                        other => {
                            if !response.consumed {
                                self.collector.handle(&other);
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    let tick = self.cadence.advance(now - self.last_poll);
                    self.last_poll = now;

                    if tick.dropped > 0 {
                        trace!("dropped {} frame ticks", tick.dropped);
                    }
                    if tick.should_render {
                        window.request_redraw();
                    }

                    elwt.set_control_flow(ControlFlow::WaitUntil(
                        now + self.cadence.time_until_next(),
                    ));
                }
                _ => {}
            })
            .map_err(|err| ResourceError::Window {
                message: err.to_string(),
            })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.session.resize(width, height).is_err() {
            // minimised or oversized; keep the last view until a usable size arrives
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("{}", err);
        }
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        let events = self.collector.drain();

        match self.session.run_tick(&events, &mut self.presenter) {
            Ok(frame) => {
                self.overlay.center = frame.uniforms.center;
                self.overlay.scale = frame.uniforms.scale;
                self.overlay.max_iterations = frame.uniforms.max_iterations;
                self.overlay.render_duration = Some(frame.render_duration);
                self.overlay.message = None;
            }
            Err(err) => self.overlay.message = Some(err.to_string()),
        }

        let previous_style = self.overlay.palette_style;
        let output = self.update_ui();
        self.egui_state
            .handle_platform_output(self.window, output.platform_output);

        if self.overlay.palette_style != previous_style {
            if let Err(err) = self.session.set_palette_style(self.overlay.palette_style) {
                self.overlay.message = Some(err.to_string());
            }
        }

        self.presenter
            .render(output.shapes, output.textures_delta, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let overlay = &mut self.overlay;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal Viewer")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Center: {:.6} {:+.6}i",
                        overlay.center[0], overlay.center[1]
                    ));
                    ui.label(format!("Scale: {:.3e}", overlay.scale));
                    ui.label(format!("Iterations: {}", overlay.max_iterations));
                    if let Some(duration) = overlay.render_duration {
                        ui.label(format!("Frame: {} ms", duration.as_millis()));
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        egui::ComboBox::from_id_source("palette_style")
                            .selected_text(overlay.palette_style.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PaletteStyleKind::ALL {
                                    ui.selectable_value(
                                        &mut overlay.palette_style,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.label("Arrows or drag: pan");
                    ui.label("X/Z or wheel: zoom   C/V: iterations");
                    ui.label("R: reset   W: quit");

                    if let Some(message) = &overlay.message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
