use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::interactive::cadence::FrameCadence;
use crate::controllers::interactive::session::ExplorerSession;
use crate::errors::{ResourceError, StartupError};
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), StartupError> {
        let mut session = ExplorerSession::from_config(&self.config)?;

        let event_loop = EventLoop::new().map_err(|err| ResourceError::Window {
            message: err.to_string(),
        })?;

        // pixels needs a 'static surface owner for the life of the process
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.window.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .map_err(|err| ResourceError::Window {
                    message: err.to_string(),
                })?,
        ));

        // the physical size differs from the configured logical size on HiDPI screens
        let size = window.inner_size();
        if session.resize(size.width, size.height).is_err() {
            return Err(ResourceError::Window {
                message: format!("window opened with empty size {}x{}", size.width, size.height),
            }
            .into());
        }

        let presenter = PixelsPresenter::new(window)?;
        let cadence = FrameCadence::new(self.config.window.frame_rate_hz);
        let app = GuiApp::new(window, &event_loop, presenter, session, cadence);

        Ok(app.run(event_loop)?)
    }
}
