use crate::{
    constants::{HAND_MODEL_INPUT_SIZE, LANDMARK_COORDS, NUM_HAND_LANDMARKS},
    landmarks::HandLandmarks,
    utils::safe_cast::usize_to_i32,
    Result,
};
use ndarray::{Array4, CowArray};
use opencv::core::{Mat, Point2f, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Provider of hand landmarks for a frame
///
/// Returns at most one hand per frame; `Ok(None)` means no hand was found.
pub trait LandmarkProvider {
    /// Detect the landmarks of the most prominent hand in a BGR frame
    fn detect(&mut self, frame: &Mat) -> Result<Option<HandLandmarks>>;
}

/// Hand landmark detector using `ONNX` Runtime
///
/// Runs a `MediaPipe` hand landmark network over the whole frame. The model
/// reports 21 landmark positions, a presence score, and a handedness score;
/// frames whose presence score falls below the configured threshold yield no
/// hand.
pub struct HandLandmarkDetector {
    session: Session,
    #[allow(dead_code)] // Reserved for future named tensor support
    input_name: String,
    #[allow(dead_code)] // Reserved for future named tensor support
    output_name: String,
    input_size: i32,
    presence_threshold: f32,
}

impl HandLandmarkDetector {
    /// Create a new hand landmark detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The model has an unexpected structure
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(model_path: P, presence_threshold: f32) -> Result<Self> {
        log::info!(
            "Initializing HandLandmarkDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("hand_landmarks")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        // Get model input/output metadata
        let input_meta = session
            .inputs
            .first()
            .ok_or_else(|| crate::error::Error::ModelInputError("Model has no inputs".to_string()))?;

        let input_name = input_meta.name.clone();
        let input_shape = &input_meta.dimensions;

        // Extract input size from shape [batch, channels, height, width]
        #[allow(clippy::cast_possible_truncation)] // Model input sizes are small
        let input_size = if input_shape.len() >= 4 {
            input_shape[2].map_or(HAND_MODEL_INPUT_SIZE, |dim| dim as i32)
        } else {
            HAND_MODEL_INPUT_SIZE
        };

        let output_name = session
            .outputs
            .first()
            .ok_or_else(|| crate::error::Error::ModelOutputError("Model has no outputs".to_string()))?
            .name
            .clone();

        Ok(Self {
            session,
            input_name,
            output_name,
            input_size,
            presence_threshold,
        })
    }

    /// Preprocess a frame for the model
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let size = self.input_size as usize;
        let channels = 3;

        // Resize to the model input size
        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        // Convert BGR to RGB
        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        // Convert to f32 and normalize to [0, 1]
        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                for ch in 0..channels {
                    let pixel = float_image
                        .at_2d::<opencv::core::Vec3f>(usize_to_i32(row)?, usize_to_i32(col)?)?[ch];
                    data[(row * size + col) * channels + ch] = pixel;
                }
            }
        }

        // Build NHWC and transpose to the NCHW layout the model expects
        let array = Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| crate::error::Error::ModelDataFormatError(format!("Failed to create array: {e}")))?;

        Ok(array.permuted_axes([0, 3, 1, 2]))
    }

    /// Run forward pass through the model
    ///
    /// Returns the raw landmark coordinates, the presence score, and the
    /// handedness score when the model provides one.
    fn forward(&self, inputs: Array4<f32>) -> Result<(Vec<f32>, f32, Option<f32>)> {
        // Create ONNX input
        let cow_array = CowArray::from(inputs.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        // Run inference
        let outputs = self.session.run(vec![input_tensor])?;

        if outputs.len() < 2 {
            return Err(crate::error::Error::ModelOutputError(format!(
                "Expected landmark and presence outputs, got {} outputs",
                outputs.len()
            )));
        }

        let coords = Self::tensor_values(&outputs[0])?;
        let presence = Self::tensor_values(&outputs[1])?
            .first()
            .copied()
            .ok_or_else(|| crate::error::Error::ModelOutputError("Empty presence output".to_string()))?;
        let handedness = match outputs.get(2) {
            Some(output) => Self::tensor_values(output)?.first().copied(),
            None => None,
        };

        Ok((coords, presence, handedness))
    }

    /// Copy an output tensor into a flat value list
    fn tensor_values(output: &Value) -> Result<Vec<f32>> {
        let tensor = output.try_extract::<f32>()?;
        let view = tensor.view();
        let data = view
            .as_slice()
            .ok_or_else(|| crate::error::Error::ModelOutputError("Failed to get output data".to_string()))?;

        Ok(data.to_vec())
    }

    /// Convert raw model coordinates to normalized landmark points
    ///
    /// The model emits (x, y, z) triplets in pixels of its own input; x and y
    /// are rescaled to `[0, 1]`, depth is dropped.
    #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for pixel coordinates
    fn normalize_landmarks(&self, coords: &[f32]) -> Result<Vec<Point2f>> {
        let expected = NUM_HAND_LANDMARKS * LANDMARK_COORDS;
        if coords.len() != expected {
            return Err(crate::error::Error::ModelDataFormatError(format!(
                "Expected {expected} landmark values, got {}",
                coords.len()
            )));
        }

        let scale = self.input_size as f32;
        Ok(coords
            .chunks_exact(LANDMARK_COORDS)
            .map(|xyz| Point2f::new(xyz[0] / scale, xyz[1] / scale))
            .collect())
    }
}

impl LandmarkProvider for HandLandmarkDetector {
    fn detect(&mut self, frame: &Mat) -> Result<Option<HandLandmarks>> {
        if frame.empty() {
            return Ok(None);
        }

        let inputs = self.preprocess(frame)?;
        let (coords, presence, handedness) = self.forward(inputs)?;

        if presence < self.presence_threshold {
            log::debug!(
                "No hand: presence {presence:.3} below threshold {}",
                self.presence_threshold
            );
            return Ok(None);
        }
        if let Some(handedness) = handedness {
            log::debug!("Hand detected: presence {presence:.3}, handedness {handedness:.3}");
        }

        let points = self.normalize_landmarks(&coords)?;
        Ok(Some(HandLandmarks::from_points(points, presence)?))
    }
}
