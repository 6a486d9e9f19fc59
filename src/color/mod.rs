//! Color representation and conversion module
//!
//! This module handles the projection of device RGB images into the
//! 8-bit HSV analysis space used by both classifiers.

pub mod conversion;

pub use conversion::{hsv_from_rgb, rgb_to_hsv8, Hsv8, HsvImage};
