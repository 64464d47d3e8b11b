//! Main application module for gesture-driven mouse control.

use crate::{
    angles::{finger_angles, FingerAngles},
    capture::FrameSource,
    click_control::ClickDispatcher,
    constants::{FRAME_WAIT_MS, NUM_HAND_LANDMARKS, QUIT_KEY, WINDOW_NAME},
    error::Result,
    gesture::{classify, Gesture},
    hand_detection::LandmarkProvider,
    landmarks::{HandLandmarks, HAND_CONNECTIONS},
};
use log::{debug, info};
use opencv::{
    core::{Mat, Point, Scalar},
    highgui::{self, WINDOW_NORMAL},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// GUI display mode
    pub gui_mode: GuiMode,
    /// Mirror the frame horizontally before processing
    pub mirror: bool,
}

/// GUI display mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiMode {
    /// Show the camera window
    Camera,
    /// No GUI (headless)
    None,
}

/// Result of processing a single frame
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    /// The detected hand, if any
    pub hand: Option<HandLandmarks>,
    /// Finger angles, when a hand was detected
    pub angles: Option<FingerAngles>,
    /// Gesture classification for the frame
    pub gesture: Gesture,
    /// Whether a click was dispatched
    pub clicked: bool,
}

/// Main application struct
///
/// The frame source, landmark provider, and click dispatcher are supplied by
/// the caller, so alternative implementations (a video file, a fake detector,
/// a recording click sink) can stand in for the real devices.
pub struct GestureApp {
    config: AppConfig,
    frames: Box<dyn FrameSource>,
    hands: Box<dyn LandmarkProvider>,
    clicks: ClickDispatcher,
}

impl GestureApp {
    /// Create a new gesture control application over the given capabilities
    pub fn new(
        config: AppConfig,
        frames: Box<dyn FrameSource>,
        hands: Box<dyn LandmarkProvider>,
        clicks: ClickDispatcher,
    ) -> Result<Self> {
        info!("Initializing gesture control application");

        // Create the GUI window if needed
        if config.gui_mode == GuiMode::Camera {
            highgui::named_window(WINDOW_NAME, WINDOW_NORMAL)?;
        }

        Ok(Self {
            config,
            frames,
            hands,
            clicks,
        })
    }

    /// Run the main application loop
    ///
    /// Processes frames until the video source is exhausted or the quit key
    /// is pressed. A failed camera read ends the loop without an error.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Read frame from the video source
            let mut frame = match self.frames.read_frame()? {
                Some(frame) => frame,
                None => {
                    info!("Video source exhausted");
                    break;
                }
            };

            // Mirror for a natural on-screen view
            if self.config.mirror {
                let temp = frame.clone();
                opencv::core::flip(&temp, &mut frame, 1)?;
            }

            // Process frame
            let outcome = self.process_frame(&frame)?;

            // Display results
            if self.config.gui_mode != GuiMode::None {
                self.display_results(&mut frame, &outcome)?;

                // Check for exit
                let key = highgui::wait_key(FRAME_WAIT_MS)?;
                if key == i32::from(QUIT_KEY) {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        if self.config.gui_mode != GuiMode::None {
            highgui::destroy_all_windows()?;
        }

        info!("Application shutting down");
        Ok(())
    }

    /// Process a single frame: detect, measure, classify, dispatch
    ///
    /// The dispatcher sees every frame's classification, including the
    /// `Gesture::None` of a frame without a hand, so a debounced gesture
    /// re-arms when the hand leaves the view.
    pub fn process_frame(&mut self, frame: &Mat) -> Result<FrameOutcome> {
        let hand = match self.hands.detect(frame)? {
            Some(hand) => hand,
            None => {
                // A no-hand frame releases any held gesture
                let clicked = self.clicks.dispatch(Gesture::None)?;
                return Ok(FrameOutcome {
                    hand: None,
                    angles: None,
                    gesture: Gesture::None,
                    clicked,
                });
            }
        };

        let angles = finger_angles(&hand);
        let gesture = classify(angles);
        let clicked = self.clicks.dispatch(gesture)?;

        debug!(
            "Index {:.1}, middle {:.1}, gesture {:?}, clicked {}",
            angles.index, angles.middle, gesture, clicked
        );

        Ok(FrameOutcome {
            hand: Some(hand),
            angles: Some(angles),
            gesture,
            clicked,
        })
    }

    /// Draw annotations and show the frame
    fn display_results(&self, frame: &mut Mat, outcome: &FrameOutcome) -> Result<()> {
        if let Some(angles) = outcome.angles {
            let index_text = format!("Index: {}°", angles.index as i32);
            imgproc::put_text(
                frame,
                &index_text,
                Point::new(50, 40),
                FONT_HERSHEY_SIMPLEX,
                0.7,
                Scalar::new(255.0, 255.0, 255.0, 0.0), // White
                1,
                LINE_8,
                false,
            )?;

            let middle_text = format!("Middle: {}°", angles.middle as i32);
            imgproc::put_text(
                frame,
                &middle_text,
                Point::new(50, 70),
                FONT_HERSHEY_SIMPLEX,
                0.7,
                Scalar::new(255.0, 255.0, 255.0, 0.0), // White
                1,
                LINE_8,
                false,
            )?;
        }

        if let Some(label) = outcome.gesture.label() {
            let color = if outcome.gesture == Gesture::LeftClick {
                Scalar::new(0.0, 255.0, 0.0, 0.0) // Green
            } else {
                Scalar::new(0.0, 0.0, 255.0, 0.0) // Red
            };
            imgproc::put_text(
                frame,
                label,
                Point::new(50, 80),
                FONT_HERSHEY_SIMPLEX,
                1.0,
                color,
                2,
                LINE_8,
                false,
            )?;
        }

        if let Some(hand) = &outcome.hand {
            self.draw_hand(frame, hand)?;
        }

        highgui::imshow(WINDOW_NAME, frame)?;

        Ok(())
    }

    /// Draw the hand skeleton overlay
    fn draw_hand(&self, frame: &mut Mat, hand: &HandLandmarks) -> Result<()> {
        let width = frame.cols();
        let height = frame.rows();

        for &(a, b) in &HAND_CONNECTIONS {
            if let (Some(from), Some(to)) =
                (hand.pixel(a, width, height), hand.pixel(b, width, height))
            {
                imgproc::line(
                    frame,
                    from,
                    to,
                    Scalar::new(0.0, 255.0, 0.0, 0.0), // Green
                    2,
                    LINE_8,
                    0,
                )?;
            }
        }

        for center in (0..NUM_HAND_LANDMARKS).filter_map(|i| hand.pixel(i, width, height)) {
            imgproc::circle(
                frame,
                center,
                3,
                Scalar::new(0.0, 0.0, 255.0, 0.0), // Red
                -1,
                LINE_8,
                0,
            )?;
        }

        Ok(())
    }
}
