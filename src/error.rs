//! Error types for the huemask library

use thiserror::Error;

/// Result type alias for huemask operations
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Error types for segmentation operations
///
/// Every failure is local and non-retryable: the pipeline is a single-pass
/// transform with no partial-result or recovery model.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Mask or overlay image could not be written
    #[error("Failed to save image: {message}")]
    ImageSave {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Acquired frame has no pixels
    #[error("Empty image frame ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Mask dimensions do not match the image handed to the compositor
    #[error("Mask dimensions {mask_width}x{mask_height} do not match image dimensions {image_width}x{image_height}")]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },
}

impl SegmentError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image save error with context
    pub fn image_save<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageSave {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            SegmentError::ImageLoad { .. } => {
                "Could not load the image. Please check the path and file format.".to_string()
            }
            SegmentError::ImageSave { .. } => {
                "Could not write the output images. Please check the output directory permissions."
                    .to_string()
            }
            SegmentError::EmptyFrame { .. } => {
                "The input frame contains no pixels. Please supply a non-empty image.".to_string()
            }
            SegmentError::InvalidParameter { parameter, .. } => {
                format!(
                    "The value given for '{}' is not usable. Check --help for valid ranges.",
                    parameter
                )
            }
            SegmentError::Config { .. } => {
                "The configuration file could not be used. Please check its syntax and values."
                    .to_string()
            }
            SegmentError::DimensionMismatch { .. } => {
                "Internal contract violation: mask and image dimensions differ.".to_string()
            }
        }
    }
}
