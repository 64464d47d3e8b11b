//! Constants used throughout the application

/// Number of landmarks produced by the hand landmark model
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Hand landmark model input edge length in pixels
pub const HAND_MODEL_INPUT_SIZE: i32 = 224;

/// Values per landmark in the model output (x, y, z)
pub const LANDMARK_COORDS: usize = 3;

/// Default minimum presence score for accepting a detected hand
pub const DEFAULT_PRESENCE_THRESHOLD: f32 = 0.7;

/// Joint angle above which a finger counts as extended (degrees)
pub const EXTENDED_THRESHOLD_DEG: f64 = 120.0;

/// Joint angle below which a finger counts as curled (degrees)
pub const CURLED_THRESHOLD_DEG: f64 = 60.0;

/// Default webcam device index
pub const DEFAULT_CAMERA_INDEX: i32 = 0;

/// Default hand landmark model path
pub const DEFAULT_HAND_MODEL_PATH: &str = "assets/hand_landmarks.onnx";

/// Camera window title
pub const WINDOW_NAME: &str = "Gesture Controls";

/// Key that exits the main loop
pub const QUIT_KEY: u8 = b'q';

/// Per-frame GUI poll interval in milliseconds
pub const FRAME_WAIT_MS: i32 = 1;
