//! Gesture control library for driving mouse clicks with hand gestures.
//!
//! This library watches a webcam, measures how far the index and middle
//! fingers are bent, and fires synthetic mouse clicks when the fingers form
//! one of two gestures. It uses:
//! - `ONNX` Runtime for hand landmark inference
//! - `OpenCV` for video capture and display
//! - The X11 `XTEST` extension for click injection
//!
//! The per-frame pipeline consists of:
//! 1. Frame acquisition (mirrored for a natural on-screen view)
//! 2. Hand landmark detection (21 points plus a presence score)
//! 3. Finger joint angle calculation for the index and middle fingers
//! 4. Threshold classification into left click, right click, or nothing
//! 5. Click dispatch, at most one click per frame
//!
//! # Examples
//!
//! ## Classifying Finger Angles
//!
//! ```
//! use gesture_control::angles::FingerAngles;
//! use gesture_control::gesture::{classify, Gesture};
//!
//! // Extended index finger, curled middle finger
//! let angles = FingerAngles {
//!     index: 150.0,
//!     middle: 30.0,
//! };
//! assert_eq!(classify(angles), Gesture::LeftClick);
//!
//! // Neither finger in a click pose
//! let angles = FingerAngles {
//!     index: 90.0,
//!     middle: 90.0,
//! };
//! assert_eq!(classify(angles), Gesture::None);
//! ```
//!
//! ## Detecting a Hand in an Image
//!
//! ```no_run
//! use gesture_control::angles::finger_angles;
//! use gesture_control::gesture::classify;
//! use gesture_control::hand_detection::{HandLandmarkDetector, LandmarkProvider};
//! use opencv::imgcodecs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut detector = HandLandmarkDetector::new("assets/hand_landmarks.onnx", 0.7)?;
//! let image = imgcodecs::imread("hand.jpg", imgcodecs::IMREAD_COLOR)?;
//!
//! if let Some(hand) = detector.detect(&image)? {
//!     let angles = finger_angles(&hand);
//!     println!("Index: {:.1}, Middle: {:.1}", angles.index, angles.middle);
//!     println!("Gesture: {:?}", classify(angles));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Complete Application
//!
//! ```no_run
//! use gesture_control::app::{AppConfig, GestureApp, GuiMode};
//! use gesture_control::capture::{CameraSource, VideoSource};
//! use gesture_control::click_control::{ClickController, ClickDispatcher, DebounceMode};
//! use gesture_control::hand_detection::HandLandmarkDetector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Build the capabilities explicitly; tests can swap in fakes
//! let frames = CameraSource::open(&VideoSource::Camera(0))?;
//! let hands = HandLandmarkDetector::new("assets/hand_landmarks.onnx", 0.7)?;
//! let clicks = ClickDispatcher::new(Box::new(ClickController::new()?), DebounceMode::EveryFrame);
//!
//! let config = AppConfig {
//!     gui_mode: GuiMode::Camera,
//!     mirror: true,
//! };
//! let mut app = GestureApp::new(config, Box::new(frames), Box::new(hands), clicks)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Video frame acquisition from cameras and video files
pub mod capture;

/// Hand landmark detection using `ONNX` Runtime
pub mod hand_detection;

/// Hand landmark data types and the `MediaPipe` hand topology
pub mod landmarks;

/// Finger joint angle calculation
pub mod angles;

/// Gesture classification from finger angles
pub mod gesture;

/// Synthetic mouse click injection for X11 systems
pub mod click_control;

/// Utility functions for safe numeric conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
