//! Finger joint angle calculation.
//!
//! The angle at a finger's PIP joint is the absolute difference between the
//! direction from the joint to the fingertip and the direction from the joint
//! to the knuckle. A straight finger measures 180 degrees, a fully curled one
//! close to 0.

use crate::landmarks::{
    HandLandmarks, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP,
};
use opencv::core::Point2f;

/// Joint angles of the two gesture fingers, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerAngles {
    /// Index finger PIP angle
    pub index: f64,
    /// Middle finger PIP angle
    pub middle: f64,
}

/// Angle at `joint` between the directions towards `tip` and towards `base`
///
/// Computed as the absolute difference of the two-argument arctangents of the
/// joint-to-tip and joint-to-base vectors, converted to degrees. The
/// difference is not angle-wrapped, so results lie in `[0, 360)` rather than
/// `[0, 180]`; collinear points measure exactly 0 or 180.
#[must_use]
pub fn joint_angle(base: Point2f, joint: Point2f, tip: Point2f) -> f64 {
    let tip_dir = f64::atan2(
        f64::from(tip.y) - f64::from(joint.y),
        f64::from(tip.x) - f64::from(joint.x),
    );
    let base_dir = f64::atan2(
        f64::from(base.y) - f64::from(joint.y),
        f64::from(base.x) - f64::from(joint.x),
    );

    (tip_dir - base_dir).to_degrees().abs()
}

/// Compute the index and middle finger joint angles of a detected hand
#[must_use]
pub fn finger_angles(hand: &HandLandmarks) -> FingerAngles {
    let p = hand.points();
    FingerAngles {
        index: joint_angle(p[INDEX_MCP], p[INDEX_PIP], p[INDEX_TIP]),
        middle: joint_angle(p[MIDDLE_MCP], p[MIDDLE_PIP], p[MIDDLE_TIP]),
    }
}
