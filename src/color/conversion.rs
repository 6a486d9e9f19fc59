//! Color space conversion from device RGB to 8-bit HSV
//!
//! Projects an image into a hue-aligned representation so the classifiers
//! can separate color identity from brightness. The output follows the
//! OpenCV 8-bit HSV convention: hue in [0, 179] (degrees halved), saturation
//! and value in [0, 255].

use image::RgbImage;
use palette::{FromColor, Hsv, Srgb};

/// One pixel in 8-bit HSV: `[hue, saturation, value]`
pub type Hsv8 = [u8; 3];

/// A dense HSV view of an image, same dimensions, row-major
///
/// Derived and ephemeral: produced per classification call and dropped
/// when the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    data: Vec<Hsv8>,
}

impl HsvImage {
    /// Build an HSV image from raw row-major pixels
    ///
    /// Returns `None` when the pixel count does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<Hsv8>) -> Option<Self> {
        if data.len() as u64 != width as u64 * height as u64 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Hsv8] {
        &self.data
    }

    /// Pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are outside the image.
    pub fn get(&self, x: u32, y: u32) -> Hsv8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[(y * self.width + x) as usize]
    }
}

/// Convert a full RGB image into its HSV view
///
/// Pure and deterministic; output dimensions equal input dimensions.
pub fn hsv_from_rgb(image: &RgbImage) -> HsvImage {
    let (width, height) = image.dimensions();
    let data = image.pixels().map(|pixel| rgb_to_hsv8(pixel.0)).collect();
    HsvImage {
        width,
        height,
        data,
    }
}

/// Convert a single RGB pixel to 8-bit HSV
///
/// The hue angle is halved and rounded into [0, 179]; a rounded value of
/// 180 wraps back to 0. Saturation and value are scaled to [0, 255].
pub fn rgb_to_hsv8(rgb: [u8; 3]) -> Hsv8 {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let hsv: Hsv = Hsv::from_color(srgb);

    let degrees = hsv.hue.into_positive_degrees();
    let hue = ((degrees / 2.0).round() as u16 % 180) as u8;
    let sat = (hsv.saturation * 255.0).round() as u8;
    let val = (hsv.value * 255.0).round() as u8;
    [hue, sat, val]
}
