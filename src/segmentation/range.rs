//! Fixed-rule HSV range classification
//!
//! Labels each pixel by testing all three HSV channels against inclusive
//! windows. Intentionally raw: no smoothing, no morphology, no
//! connected-component filtering.
//!
//! Algorithm tag: `algo-hsv-window-threshold`

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::color::{Hsv8, HsvImage};
use crate::mask::SELECTED;
use crate::target::Target;

/// Inclusive per-channel windows in 8-bit HSV space
///
/// The classifier does not validate the min/max ordering; an inverted
/// window simply matches no pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvBounds {
    pub hue_min: u8,
    pub hue_max: u8,
    pub sat_min: u8,
    pub sat_max: u8,
    pub val_min: u8,
    pub val_max: u8,
}

impl HsvBounds {
    /// Whether a pixel falls inside all three windows
    pub fn contains(&self, pixel: Hsv8) -> bool {
        let [hue, sat, val] = pixel;
        self.hue_min <= hue
            && hue <= self.hue_max
            && self.sat_min <= sat
            && sat <= self.sat_max
            && self.val_min <= val
            && val <= self.val_max
    }
}

/// Range classifier over an HSV view of an image
///
/// Purely pointwise: order-independent, deterministic and idempotent for a
/// fixed set of bounds.
#[derive(Debug, Clone, Copy)]
pub struct RangeClassifier {
    bounds: HsvBounds,
}

impl RangeClassifier {
    /// Create a classifier with explicit channel windows
    pub fn new(bounds: HsvBounds) -> Self {
        Self { bounds }
    }

    /// Create a classifier with the calibrated default windows of a target
    pub fn for_target(target: Target) -> Self {
        Self {
            bounds: target.profile().bounds,
        }
    }

    /// The channel windows in use
    pub fn bounds(&self) -> HsvBounds {
        self.bounds
    }

    /// Label every pixel of `hsv`, producing a fresh binary mask
    ///
    /// The mask has the same dimensions as the input and contains only the
    /// two sentinel values. An all-unselected result is valid output.
    pub fn segment(&self, hsv: &HsvImage) -> GrayImage {
        let (width, height) = hsv.dimensions();
        let mut mask = GrayImage::new(width, height);
        for (pixel, cell) in hsv.pixels().iter().zip(mask.pixels_mut()) {
            if self.bounds.contains(*pixel) {
                cell.0[0] = SELECTED;
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{self, UNSELECTED};

    fn two_by_two() -> HsvImage {
        HsvImage::from_raw(
            2,
            2,
            vec![[60, 200, 200], [60, 200, 200], [0, 0, 0], [0, 0, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_green_default_bounds_select_green_half() {
        let mask = RangeClassifier::for_target(Target::Green).segment(&two_by_two());

        assert_eq!(mask.dimensions(), (2, 2));
        assert_eq!(mask.get_pixel(0, 0).0[0], SELECTED);
        assert_eq!(mask.get_pixel(1, 0).0[0], SELECTED);
        assert_eq!(mask.get_pixel(0, 1).0[0], UNSELECTED);
        assert_eq!(mask.get_pixel(1, 1).0[0], UNSELECTED);
        assert!((mask::coverage(&mask) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mask_contains_only_sentinels() {
        let mask = RangeClassifier::for_target(Target::Blue).segment(&two_by_two());
        assert!(mask
            .pixels()
            .all(|p| p.0[0] == SELECTED || p.0[0] == UNSELECTED));
    }

    #[test]
    fn test_idempotent() {
        let hsv = two_by_two();
        let classifier = RangeClassifier::for_target(Target::Green);
        let first = classifier.segment(&hsv);
        let second = classifier.segment(&hsv);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_widening_bounds_never_deselects() {
        let hsv = HsvImage::from_raw(
            3,
            1,
            vec![[40, 60, 60], [70, 120, 200], [100, 255, 255]],
        )
        .unwrap();
        let narrow = HsvBounds {
            hue_min: 50,
            hue_max: 80,
            sat_min: 100,
            sat_max: 255,
            val_min: 100,
            val_max: 255,
        };
        let mut wide = narrow;
        wide.hue_min = 30;
        wide.hue_max = 110;
        wide.sat_min = 50;
        wide.val_min = 50;

        let narrow_count = mask::selected_count(&RangeClassifier::new(narrow).segment(&hsv));
        let wide_count = mask::selected_count(&RangeClassifier::new(wide).segment(&hsv));
        assert!(wide_count >= narrow_count);
        assert_eq!(narrow_count, 1);
        assert_eq!(wide_count, 3);
    }

    #[test]
    fn test_inverted_window_yields_empty_mask() {
        let inverted = HsvBounds {
            hue_min: 100,
            hue_max: 50,
            sat_min: 0,
            sat_max: 255,
            val_min: 0,
            val_max: 255,
        };
        let mask = RangeClassifier::new(inverted).segment(&two_by_two());
        assert_eq!(mask::selected_count(&mask), 0);
    }

    #[test]
    fn test_explicit_window_overrides_target_hue() {
        // A window far from green still works through the same classifier
        let bounds = HsvBounds {
            hue_min: 0,
            hue_max: 10,
            sat_min: 0,
            sat_max: 255,
            val_min: 0,
            val_max: 255,
        };
        let mask = RangeClassifier::new(bounds).segment(&two_by_two());
        // Only the black pixels (hue 0) fall in the red-ish window
        assert_eq!(mask.get_pixel(0, 0).0[0], UNSELECTED);
        assert_eq!(mask.get_pixel(0, 1).0[0], SELECTED);
    }
}
