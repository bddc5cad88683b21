use std::path::Path;

use log::info;

use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::session::ExplorerSession;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::errors::{ResourceError, StartupError};

/// Renders the configured home view once and writes it through a file presenter.
pub struct RenderCommand<P: FilePresenterPort> {
    config: ExplorerConfig,
    presenter: P,
}

impl<P: FilePresenterPort> RenderCommand<P> {
    pub fn new(config: ExplorerConfig, presenter: P) -> Self {
        Self { config, presenter }
    }

    pub fn execute(&self, output: &Path) -> Result<FrameData, StartupError> {
        let mut session = ExplorerSession::from_config(&self.config)?;
        let frame = session.tick(&[]);

        self.presenter
            .present(&frame.pixel_buffer, output)
            .map_err(|source| ResourceError::Output {
                path: output.to_path_buf(),
                source,
            })?;

        info!(
            "wrote {}x{} frame to {} ({} iterations, {:?})",
            frame.uniforms.resolution[0],
            frame.uniforms.resolution[1],
            output.display(),
            frame.uniforms.max_iterations,
            frame.render_duration
        );

        Ok(frame)
    }
}
