use std::time::Instant;

use log::{debug, error, info, trace, warn};

use crate::config::errors::ConfigError;
use crate::config::explorer_config::{ExplorerConfig, PaletteConfig, RenderConfig};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenter;
use crate::core::actions::render_frame::frame_renderer::{FrameRenderer, FrameSnapshot};
use crate::core::budget::policy::IterationBudgetPolicy;
use crate::core::controls::bindings::KeyBindings;
use crate::core::controls::events::InputEvent;
use crate::core::controls::translator::{InputTranslator, TranslateContext};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::palette::kinds::PaletteStyleKind;
use crate::core::viewport::controller::{ViewportController, ViewportWarning};
use crate::errors::{ResourceError, StartupError};

/// One viewer's state plus the per-tick pipeline:
/// input -> viewport -> budget -> render -> present.
pub struct ExplorerSession {
    viewport: ViewportController,
    budget: IterationBudgetPolicy,
    translator: InputTranslator,
    renderer: FrameRenderer,
    render: RenderConfig,
    palette_config: PaletteConfig,
    frame_index: u64,
    last_warning: Option<ViewportWarning>,
    quit_requested: bool,
}

impl ExplorerSession {
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let viewport = ViewportController::new(config.viewport_state()?, config.view.limits)
            .map_err(ConfigError::from)?;
        let budget = IterationBudgetPolicy::new(config.budget).map_err(ConfigError::from)?;
        let palette = config.palette.build()?;

        info!(
            "session {}x{} center ({}, {}) scale {} power {} budget {} palette {} x{}",
            config.window.width,
            config.window.height,
            config.view.center.real,
            config.view.center.imag,
            config.view.scale,
            config.render.power,
            config.budget.growth.name(),
            palette
                .style()
                .map_or("file", PaletteStyleKind::display_name),
            palette.len()
        );

        Ok(Self {
            viewport,
            budget,
            translator: InputTranslator::new(KeyBindings::default(), config.input),
            renderer: FrameRenderer::new(palette, config.render.execution),
            render: config.render,
            palette_config: config.palette.clone(),
            frame_index: 0,
            last_warning: None,
            quit_requested: false,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> &IterationBudgetPolicy {
        &self.budget
    }

    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[must_use]
    pub fn last_warning(&self) -> Option<ViewportWarning> {
        self.last_warning
    }

    /// Set once the quit key has been pressed; the event loop owner decides
    /// when to stop.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Applies one tick of input and renders exactly one frame.
    pub fn tick(&mut self, events: &[InputEvent]) -> FrameData {
        let state = self.viewport.state();
        let delta = self.translator.translate(
            events,
            TranslateContext {
                resolution: state.resolution(),
                max_iterations: self.budget.current(),
            },
        );

        if delta.quit_requested {
            info!("quit requested");
            self.quit_requested = true;
        }

        if delta.reset_requested {
            self.viewport.reset();
            self.budget.reset_manual();
            debug!("view reset");
        }

        let report = self.viewport.update(&delta);
        if report.warning != self.last_warning {
            if let Some(warning) = report.warning {
                warn!("viewport update refused: {:?}", warning);
            }
            self.last_warning = report.warning;
        }

        if delta.iteration_delta != 0 {
            self.budget.apply_manual(delta.iteration_delta);
        }

        let state = self.viewport.state();
        let max_iterations = self.budget.recompute(state.scale());
        let snapshot = FrameSnapshot {
            viewport: state,
            params: self.render.parameters(max_iterations),
        };

        let start = Instant::now();
        let pixel_buffer = self.renderer.render(&snapshot);
        let render_duration = start.elapsed();

        self.frame_index += 1;
        trace!(
            "frame {} rendered in {:?} at {} iterations",
            self.frame_index, render_duration, max_iterations
        );

        FrameData {
            frame_index: self.frame_index,
            pixel_buffer,
            render_duration,
            snapshot,
            uniforms: self.renderer.uniforms(&snapshot),
        }
    }

    /// [`Self::tick`] followed by handing the frame to `presenter`.
    pub fn run_tick<P: FramePresenter>(
        &mut self,
        events: &[InputEvent],
        presenter: &mut P,
    ) -> Result<FrameData, P::Error> {
        let frame = self.tick(events);

        if let Err(err) = presenter.present(&frame) {
            error!("failed to present frame {}: {}", frame.frame_index, err);
            return Err(err);
        }

        Ok(frame)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResolutionError> {
        let resolution = Resolution::new(width, height).inspect_err(|err| {
            debug!("resize rejected: {}", err);
        })?;

        self.viewport.resize(resolution);
        Ok(())
    }

    pub fn set_palette_style(&mut self, style: PaletteStyleKind) -> Result<(), ResourceError> {
        let palette = self.palette_config.build_style(style)?;
        self.renderer.set_palette(palette);

        info!("palette style set to {}", style);
        Ok(())
    }
}
