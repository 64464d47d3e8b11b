//! Video frame acquisition.

use crate::Result;
use log::{info, warn};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};

/// Video source type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// Provider of successive BGR frames
///
/// `read_frame` returns `Ok(None)` once the source is exhausted. A failed
/// camera read counts as exhaustion, not as an error.
pub trait FrameSource {
    /// Read the next frame, or `None` when the source has no more frames
    fn read_frame(&mut self) -> Result<Option<Mat>>;
}

/// `OpenCV` capture over a camera device or a video file
pub struct CameraSource {
    capture: VideoCapture,
}

impl CameraSource {
    /// Open the given video source
    ///
    /// # Errors
    ///
    /// Returns an error if the `OpenCV` capture backend fails. A source that
    /// opens but produces no frames is not an error; the stream just ends.
    pub fn open(source: &VideoSource) -> Result<Self> {
        let capture = match source {
            VideoSource::Camera(index) => {
                info!("Opening camera {index}");
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                // Keep only the most recent frame for lower latency
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {path}");
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };

        if !capture.is_opened()? {
            warn!("Video source did not open; the capture loop will end immediately");
        }

        Ok(Self { capture })
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        // A single failed or empty read ends the stream, no retry
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }

        Ok(Some(frame))
    }
}
