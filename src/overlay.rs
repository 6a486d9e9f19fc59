//! Overlay compositing
//!
//! Blends a solid highlight color into the selected regions of the
//! original frame. Unselected cells are copied through byte-identical, so
//! an empty mask reproduces the input exactly.

use image::{GrayImage, Rgb, RgbImage};

use crate::constants::blend::{HIGHLIGHT_WEIGHT, SOURCE_WEIGHT};
use crate::error::{Result, SegmentError};
use crate::mask::UNSELECTED;

/// Render the highlight overlay for a mask
///
/// # Arguments
///
/// * `image` - original frame; never mutated
/// * `mask` - binary selection, must match the frame dimensions
/// * `highlight` - solid highlight color in the frame's encoding
///
/// # Errors
///
/// Returns `SegmentError::DimensionMismatch` when mask and image
/// dimensions differ; this is a caller contract violation, not a
/// user-facing condition.
pub fn render_overlay(image: &RgbImage, mask: &GrayImage, highlight: Rgb<u8>) -> Result<RgbImage> {
    if image.dimensions() != mask.dimensions() {
        let (image_width, image_height) = image.dimensions();
        let (mask_width, mask_height) = mask.dimensions();
        return Err(SegmentError::DimensionMismatch {
            image_width,
            image_height,
            mask_width,
            mask_height,
        });
    }

    let mut blended = image.clone();
    for (cell, pixel) in mask.pixels().zip(blended.pixels_mut()) {
        if cell.0[0] == UNSELECTED {
            continue;
        }
        for channel in 0..3 {
            pixel.0[channel] = blend_channel(pixel.0[channel], highlight.0[channel]);
        }
    }
    Ok(blended)
}

/// Weighted blend of one source channel with the highlight channel
fn blend_channel(source: u8, highlight: u8) -> u8 {
    let value = SOURCE_WEIGHT * source as f32 + HIGHLIGHT_WEIGHT * highlight as f32;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use crate::mask::SELECTED;

    #[test]
    fn test_empty_mask_returns_identical_image() {
        let image = RgbImage::from_pixel(3, 3, Rgb([17, 130, 240]));
        let mask = GrayImage::new(3, 3);
        let overlay = render_overlay(&image, &mask, Rgb([0, 255, 0])).unwrap();
        assert_eq!(overlay.as_raw(), image.as_raw());
    }

    #[test]
    fn test_selected_cells_are_blended() {
        let image = RgbImage::from_pixel(1, 1, Rgb([100, 100, 100]));
        let mask = GrayImage::from_pixel(1, 1, Luma([SELECTED]));
        let overlay = render_overlay(&image, &mask, Rgb([0, 255, 0])).unwrap();
        // 0.6 * 100 = 60, 0.6 * 100 + 0.4 * 255 = 162
        assert_eq!(overlay.get_pixel(0, 0).0, [60, 162, 60]);
    }

    #[test]
    fn test_input_image_is_not_mutated() {
        let image = RgbImage::from_pixel(2, 2, Rgb([200, 10, 10]));
        let before = image.clone();
        let mask = GrayImage::from_pixel(2, 2, Luma([SELECTED]));
        let _ = render_overlay(&image, &mask, Rgb([0, 0, 255])).unwrap();
        assert_eq!(image.as_raw(), before.as_raw());
    }

    #[test]
    fn test_mixed_mask_only_touches_selected_cells() {
        let image = RgbImage::from_pixel(2, 1, Rgb([80, 80, 80]));
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(1, 0, Luma([SELECTED]));
        let overlay = render_overlay(&image, &mask, Rgb([255, 0, 0])).unwrap();
        assert_eq!(overlay.get_pixel(0, 0).0, [80, 80, 80]);
        // 0.6 * 80 + 0.4 * 255 = 150, 0.6 * 80 = 48
        assert_eq!(overlay.get_pixel(1, 0).0, [150, 48, 48]);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let image = RgbImage::new(2, 2);
        let mask = GrayImage::new(3, 2);
        let result = render_overlay(&image, &mask, Rgb([0, 255, 0]));
        assert!(matches!(
            result,
            Err(SegmentError::DimensionMismatch { .. })
        ));
    }
}
