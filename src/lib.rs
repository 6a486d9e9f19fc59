//! # huemask
//!
//! A Rust crate for extracting binary region-of-interest masks from color
//! images by target hue.
//!
//! This library segments a single frame by:
//! - Projecting it into 8-bit HSV space, where hue isolates color identity
//!   from lighting variation
//! - Classifying pixels with fixed calibrated channel windows, or by
//!   k-means clustering of the frame's color distribution with the cluster
//!   nearest a reference color kept
//! - Rendering the selection as a black/white mask and a semi-transparent
//!   colored overlay
//!
//! ## Example
//!
//! ```rust,no_run
//! use huemask::{segment_path, Method, SegmentationConfig, Target};
//! use std::path::Path;
//!
//! let config = SegmentationConfig::new(Method::Hsv, Target::Green);
//! let output = segment_path(Path::new("photo.jpg"), &config)?;
//! println!("coverage: {:.2}%", output.coverage * 100.0);
//! # Ok::<(), huemask::SegmentError>(())
//! ```

use std::path::Path;

use image::{GrayImage, Rgb, RgbImage};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_io;
pub mod mask;
pub mod overlay;
pub mod segmentation;
pub mod target;

pub use config::{Method, SegmentationConfig};
pub use error::{Result, SegmentError};
pub use segmentation::{HsvBounds, KmeansClassifier, RangeClassifier};
pub use target::{Target, TargetProfile};

use crate::color::{hsv_from_rgb, Hsv8};

/// Complete result of one segmentation run
#[derive(Debug, Clone)]
pub struct SegmentationOutput {
    /// Classifier that produced the mask
    pub method: Method,
    /// Target color that was isolated
    pub target: Target,
    /// Binary selection mask, same dimensions as the input
    pub mask: GrayImage,
    /// Input frame with the highlight blended into selected regions
    pub overlay: RgbImage,
    /// Fraction of selected pixels, in [0, 1]
    pub coverage: f64,
    /// Rounded cluster centroids (kmeans method only)
    pub centroids: Option<Vec<Hsv8>>,
    /// Index of the target-matched centroid (kmeans method only)
    pub selected_cluster: Option<usize>,
}

/// Segment a decoded frame
///
/// This is the main entry point. It validates the configuration, projects
/// the frame into HSV space, runs the configured classifier and derives
/// the coverage statistic and highlight overlay from the mask.
///
/// # Arguments
///
/// * `image` - decoded input frame; never mutated
/// * `config` - validated run parameters
///
/// # Errors
///
/// Returns `SegmentError` if:
/// - The configuration fails validation
/// - The frame has no pixels
pub fn segment_image(image: &RgbImage, config: &SegmentationConfig) -> Result<SegmentationOutput> {
    config.validate()?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SegmentError::EmptyFrame { width, height });
    }

    let hsv = hsv_from_rgb(image);
    let (mask, centroids, selected_cluster) = match config.method {
        Method::Hsv => {
            let classifier = match config.bounds {
                Some(bounds) => RangeClassifier::new(bounds),
                None => RangeClassifier::for_target(config.target),
            };
            (classifier.segment(&hsv), None, None)
        }
        Method::Kmeans => {
            let mut classifier = KmeansClassifier::new(config.clusters);
            if let Some(seed) = config.seed {
                classifier = classifier.with_seed(seed);
            }
            let clustered = classifier.segment(&hsv, config.target)?;
            (
                clustered.mask,
                Some(clustered.centroids),
                Some(clustered.selected),
            )
        }
    };

    let coverage = mask::coverage(&mask);
    let highlight = Rgb(config.target.profile().highlight);
    let overlay = overlay::render_overlay(image, &mask, highlight)?;

    Ok(SegmentationOutput {
        method: config.method,
        target: config.target,
        mask,
        overlay,
        coverage,
        centroids,
        selected_cluster,
    })
}

/// Load a frame from disk and segment it
///
/// Convenience wrapper over [`image_io::load_image`] and
/// [`segment_image`].
///
/// # Errors
///
/// Returns `SegmentError` if acquisition fails or the run itself fails.
pub fn segment_path(path: &Path, config: &SegmentationConfig) -> Result<SegmentationOutput> {
    let image = image_io::load_image(path)?;
    segment_image(&image, config)
}
