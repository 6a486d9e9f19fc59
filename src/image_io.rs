//! Image acquisition and output persistence
//!
//! The file-system boundary around the core: decoding an input frame to
//! RGB, and writing the mask and overlay images produced by a run. The
//! classifiers themselves never touch the file system.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageReader, RgbImage};

use crate::error::{Result, SegmentError};

/// File extensions accepted for input frames
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi", "hdr", "exr",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Load an input frame and convert it to 8-bit RGB
///
/// # Errors
///
/// Returns `SegmentError` if:
/// - The extension is missing or unsupported
/// - The file cannot be opened or decoded
/// - The decoded frame has no pixels
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let recognized = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_extension);
    if !recognized {
        return Err(SegmentError::ImageLoad {
            message: format!("Unsupported image format: {}", path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        SegmentError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    let decoded = reader.decode().map_err(|e| {
        SegmentError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(SegmentError::EmptyFrame { width, height });
    }
    Ok(rgb)
}

/// Locations the two result images were written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub mask: PathBuf,
    pub overlay: PathBuf,
}

/// Persist the mask and overlay images for one run
///
/// Creates `output_dir` if needed and writes `<stem>_mask.png` (the mask
/// as a single-channel black/white image) and `<stem>_overlay.png`.
///
/// # Errors
///
/// Returns `SegmentError::ImageSave` if the directory cannot be created
/// or either image cannot be encoded and written.
pub fn save_outputs(
    output_dir: &Path,
    stem: &str,
    mask: &GrayImage,
    overlay: &RgbImage,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|e| {
        SegmentError::image_save(
            format!("Failed to create output directory: {}", output_dir.display()),
            e,
        )
    })?;

    let mask_path = output_dir.join(format!("{}_mask.png", stem));
    mask.save(&mask_path).map_err(|e| {
        SegmentError::image_save(format!("Failed to save mask: {}", mask_path.display()), e)
    })?;

    let overlay_path = output_dir.join(format!("{}_overlay.png", stem));
    overlay.save(&overlay_path).map_err(|e| {
        SegmentError::image_save(
            format!("Failed to save overlay: {}", overlay_path.display()),
            e,
        )
    })?;

    Ok(OutputPaths {
        mask: mask_path,
        overlay: overlay_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(!is_supported_extension("docx"));
        assert!(!is_supported_extension("mp4"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = load_image(Path::new("frame.mp4"));
        assert!(matches!(result, Err(SegmentError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_missing_extension() {
        let result = load_image(Path::new("frame"));
        assert!(matches!(result, Err(SegmentError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("definitely_not_here.png"));
        assert!(matches!(result, Err(SegmentError::ImageLoad { .. })));
    }
}
