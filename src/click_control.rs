//! Synthetic mouse click injection for X11-based systems.
//!
//! This module turns classified gestures into button events. The concrete
//! implementation sends press/release pairs through the X11 XTEST extension;
//! a null sink stands in when click injection is disabled or unavailable.

use crate::{
    error::{AppError, Result},
    gesture::Gesture,
};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::{
        xproto::{Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::ConnectionExt,
    },
    rust_connection::RustConnection,
};

/// Mouse button to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

impl MouseButton {
    /// X11 core protocol button detail
    #[must_use]
    pub const fn detail(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 3,
        }
    }
}

/// Destination for synthetic clicks
pub trait ClickSink {
    /// Press and release the given button at the current pointer position
    fn click(&mut self, button: MouseButton) -> Result<()>;
}

/// Click injection implementation for X11
pub struct ClickController {
    connection: RustConnection,
    screen: Screen,
}

impl ClickController {
    /// Create a new click controller
    pub fn new() -> Result<Self> {
        info!("Initializing X11 click controller");

        // Connect to X11 server
        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::ClickControl(format!("Failed to connect to X11: {e}")))?;

        // Get screen information
        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::ClickControl("Failed to get screen".to_string()))?
            .clone();

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen.width_in_pixels, screen.height_in_pixels
        );

        Ok(Self { connection, screen })
    }

    /// Send a single XTEST button event at the current pointer position
    fn fake_button(&self, event_type: u8, detail: u8) -> Result<()> {
        self.connection
            .xtest_fake_input(
                event_type,
                detail,
                x11rb::CURRENT_TIME,
                self.screen.root,
                0,
                0,
                0,
            )
            .map_err(|e| AppError::ClickControl(format!("Failed to send button event: {e}")))?;

        Ok(())
    }
}

impl ClickSink for ClickController {
    fn click(&mut self, button: MouseButton) -> Result<()> {
        debug!("Injecting {button:?} click");

        self.fake_button(BUTTON_PRESS_EVENT, button.detail())?;
        self.fake_button(BUTTON_RELEASE_EVENT, button.detail())?;

        self.connection
            .flush()
            .map_err(|e| AppError::ClickControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }
}

/// Sink that logs clicks without injecting them
#[derive(Debug, Default)]
pub struct NullClickSink;

impl ClickSink for NullClickSink {
    fn click(&mut self, button: MouseButton) -> Result<()> {
        info!("Click suppressed: {button:?}");
        Ok(())
    }
}

/// Click repetition policy across consecutive frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceMode {
    /// A held gesture clicks again on every frame
    #[default]
    EveryFrame,
    /// A held gesture clicks only on the frame it first appears
    EdgeTriggered,
}

/// Maps classified gestures to clicks, at most one per frame
pub struct ClickDispatcher {
    sink: Box<dyn ClickSink>,
    mode: DebounceMode,
    last: Gesture,
}

impl ClickDispatcher {
    /// Create a dispatcher over the given sink
    #[must_use]
    pub fn new(sink: Box<dyn ClickSink>, mode: DebounceMode) -> Self {
        Self {
            sink,
            mode,
            last: Gesture::None,
        }
    }

    /// Dispatch the click for one frame's gesture classification
    ///
    /// Returns whether a click was issued.
    ///
    /// # Errors
    ///
    /// Propagates sink failures (for example a broken X11 connection).
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<bool> {
        let held = self.mode == DebounceMode::EdgeTriggered && gesture == self.last;
        self.last = gesture;

        if held {
            return Ok(false);
        }

        let button = match gesture {
            Gesture::None => return Ok(false),
            Gesture::LeftClick => MouseButton::Left,
            Gesture::RightClick => MouseButton::Right,
        };

        self.sink.click(button)?;
        Ok(true)
    }
}
