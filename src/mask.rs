//! Binary mask sentinels and statistics
//!
//! A mask is a single-channel image the same size as its source frame,
//! holding only the two sentinel values below. Stored as a `GrayImage` so
//! persistence can write it directly as a black/white image.

use image::GrayImage;

/// Sentinel value of a selected mask cell
pub const SELECTED: u8 = 255;

/// Sentinel value of an unselected mask cell
pub const UNSELECTED: u8 = 0;

/// Number of selected cells in a mask
pub fn selected_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p.0[0] != UNSELECTED).count()
}

/// Fraction of selected cells, in [0, 1]
///
/// A mask with no cells reports zero coverage.
pub fn coverage(mask: &GrayImage) -> f64 {
    let total = mask.width() as u64 * mask.height() as u64;
    if total == 0 {
        return 0.0;
    }
    selected_count(mask) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_coverage_empty_mask() {
        let mask = GrayImage::new(4, 4);
        assert_eq!(selected_count(&mask), 0);
        assert_eq!(coverage(&mask), 0.0);
    }

    #[test]
    fn test_coverage_full_mask() {
        let mask = GrayImage::from_pixel(4, 4, Luma([SELECTED]));
        assert_eq!(selected_count(&mask), 16);
        assert_eq!(coverage(&mask), 1.0);
    }

    #[test]
    fn test_coverage_half_mask() {
        let mut mask = GrayImage::new(2, 2);
        mask.put_pixel(0, 0, Luma([SELECTED]));
        mask.put_pixel(1, 0, Luma([SELECTED]));
        assert!((coverage(&mask) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_zero_area() {
        let mask = GrayImage::new(0, 0);
        assert_eq!(coverage(&mask), 0.0);
    }
}
