//! Gesture classification from finger joint angles.

use crate::{
    angles::FingerAngles,
    constants::{CURLED_THRESHOLD_DEG, EXTENDED_THRESHOLD_DEG},
};

/// Recognized hand gesture for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No actionable gesture
    #[default]
    None,
    /// Index finger extended, middle finger curled
    LeftClick,
    /// Middle finger extended, index finger curled
    RightClick,
}

impl Gesture {
    /// On-screen label for the gesture, if any
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::LeftClick => Some("LEFT CLICK"),
            Self::RightClick => Some("RIGHT CLICK"),
        }
    }
}

/// Classify one frame's finger angles into a gesture
///
/// First matching rule wins: an extended index with a curled middle finger is
/// a left click, an extended middle with a curled index is a right click,
/// anything else is no gesture. Angles exactly at a threshold do not match.
#[must_use]
pub fn classify(angles: FingerAngles) -> Gesture {
    if angles.index > EXTENDED_THRESHOLD_DEG && angles.middle < CURLED_THRESHOLD_DEG {
        Gesture::LeftClick
    } else if angles.middle > EXTENDED_THRESHOLD_DEG && angles.index < CURLED_THRESHOLD_DEG {
        Gesture::RightClick
    } else {
        Gesture::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn angles(index: f64, middle: f64) -> FingerAngles {
        FingerAngles { index, middle }
    }

    #[test]
    fn test_left_click_gesture() {
        assert_eq!(classify(angles(150.0, 10.0)), Gesture::LeftClick);
    }

    #[test]
    fn test_right_click_gesture() {
        assert_eq!(classify(angles(10.0, 150.0)), Gesture::RightClick);
    }

    #[test]
    fn test_ambiguous_angles_are_no_gesture() {
        assert_eq!(classify(angles(90.0, 90.0)), Gesture::None);
        // Both fingers extended
        assert_eq!(classify(angles(170.0, 170.0)), Gesture::None);
        // Both fingers curled
        assert_eq!(classify(angles(10.0, 10.0)), Gesture::None);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        assert_eq!(classify(angles(120.0, 10.0)), Gesture::None);
        assert_eq!(classify(angles(150.0, 60.0)), Gesture::None);
        assert_eq!(classify(angles(10.0, 120.0)), Gesture::None);
        assert_eq!(classify(angles(60.0, 150.0)), Gesture::None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Gesture::None.label(), None);
        assert_eq!(Gesture::LeftClick.label(), Some("LEFT CLICK"));
        assert_eq!(Gesture::RightClick.label(), Some("RIGHT CLICK"));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Gesture::default(), Gesture::None);
    }

    proptest! {
        #[test]
        fn prop_classification_is_pure(index in 0.0f64..360.0, middle in 0.0f64..360.0) {
            let a = angles(index, middle);
            prop_assert_eq!(classify(a), classify(a));
        }

        #[test]
        fn prop_click_implies_thresholds(index in 0.0f64..360.0, middle in 0.0f64..360.0) {
            match classify(angles(index, middle)) {
                Gesture::LeftClick => {
                    prop_assert!(index > EXTENDED_THRESHOLD_DEG);
                    prop_assert!(middle < CURLED_THRESHOLD_DEG);
                }
                Gesture::RightClick => {
                    prop_assert!(middle > EXTENDED_THRESHOLD_DEG);
                    prop_assert!(index < CURLED_THRESHOLD_DEG);
                }
                Gesture::None => {}
            }
        }
    }
}
