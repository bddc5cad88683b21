use std::error::Error;

use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives each completed frame, in order, on the control loop thread.
pub trait FramePresenter {
    type Error: Error;

    fn present(&mut self, frame: &FrameData) -> Result<(), Self::Error>;
}
