//! Hand landmark data types and the `MediaPipe` hand topology.
//!
//! The landmark model emits 21 points per hand in a fixed order. The index
//! constants below name the anatomical points; the connection table lists the
//! skeleton edges used for the overlay drawing.

use crate::{constants::NUM_HAND_LANDMARKS, utils::safe_cast::f32_to_i32_clamp, Error, Result};
use opencv::core::{Point, Point2f};

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Skeleton edges between landmarks, for drawing the hand overlay
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    // Palm
    (WRIST, THUMB_CMC),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    // Thumb
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    // Index finger
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    // Middle finger
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    // Ring finger
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    // Pinky
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// A single detected hand
///
/// Holds the 21 landmark positions normalized to `[0, 1]` relative to the
/// frame, together with the model's presence score. Read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    points: [Point2f; NUM_HAND_LANDMARKS],
    /// Model confidence that a hand is actually present
    pub presence: f32,
}

impl HandLandmarks {
    /// Build a landmark set from a full list of normalized points
    ///
    /// # Errors
    ///
    /// Returns an error if `points` does not contain exactly 21 entries
    pub fn from_points(points: Vec<Point2f>, presence: f32) -> Result<Self> {
        let points: [Point2f; NUM_HAND_LANDMARKS] = points.try_into().map_err(|v: Vec<Point2f>| {
            Error::InvalidInput(format!(
                "Expected {NUM_HAND_LANDMARKS} hand landmarks, got {}",
                v.len()
            ))
        })?;

        Ok(Self { points, presence })
    }

    /// Normalized position of a landmark by topology index
    ///
    /// Returns `None` for indices outside the 21-point topology.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point2f> {
        self.points.get(index).copied()
    }

    /// All normalized landmark positions in topology order
    #[must_use]
    pub const fn points(&self) -> &[Point2f; NUM_HAND_LANDMARKS] {
        &self.points
    }

    /// Pixel position of a landmark on a frame of the given dimensions
    ///
    /// Coordinates are clamped to the frame so that off-frame landmarks
    /// still draw at the border. Returns `None` for indices outside the
    /// topology.
    #[must_use]
    pub fn pixel(&self, index: usize, frame_width: i32, frame_height: i32) -> Option<Point> {
        let p = self.point(index)?;
        Some(Point::new(
            f32_to_i32_clamp(p.x * frame_width as f32, 0, frame_width - 1),
            f32_to_i32_clamp(p.y * frame_height as f32, 0, frame_height - 1),
        ))
    }
}
