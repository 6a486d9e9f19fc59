//! Configuration for the segmentation pipeline
//!
//! All parameters a run needs, validated at this boundary so the
//! classifiers can assume well-formed inputs. Configurations can be
//! constructed programmatically or loaded from JSON files:
//!
//! ```no_run
//! use huemask::{Method, SegmentationConfig, Target};
//! use std::path::Path;
//!
//! // Load from file
//! let config = SegmentationConfig::from_json_file(Path::new("run.json"))?;
//!
//! // Or build directly
//! let config = SegmentationConfig::new(Method::Kmeans, Target::Blue);
//! # Ok::<(), huemask::SegmentError>(())
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::channels::HUE_MAX;
use crate::constants::kmeans::DEFAULT_CLUSTERS;
use crate::error::{Result, SegmentError};
use crate::segmentation::HsvBounds;
use crate::target::Target;

/// Segmentation method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Fixed-rule channel-window classification
    Hsv,
    /// Data-driven cluster classification
    Kmeans,
}

impl Method {
    /// Lowercase name as used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            Method::Hsv => "hsv",
            Method::Kmeans => "kmeans",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SegmentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hsv" => Ok(Method::Hsv),
            "kmeans" => Ok(Method::Kmeans),
            other => Err(SegmentError::invalid_parameter("method", other)),
        }
    }
}

/// Complete configuration for one segmentation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Classifier to run
    pub method: Method,

    /// Target color to isolate
    pub target: Target,

    /// Explicit channel windows for the range classifier
    ///
    /// `None` falls back to the target's calibrated windows. Ignored by
    /// the kmeans method.
    #[serde(default)]
    pub bounds: Option<HsvBounds>,

    /// Cluster count for the kmeans method
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// RNG seed for reproducible clustering
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_clusters() -> usize {
    DEFAULT_CLUSTERS
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self::new(Method::Hsv, Target::Green)
    }
}

impl SegmentationConfig {
    /// Create a configuration with default bounds, cluster count and seed
    pub fn new(method: Method, target: Target) -> Self {
        Self {
            method,
            target,
            bounds: None,
            clusters: DEFAULT_CLUSTERS,
            seed: None,
        }
    }

    /// Reject configurations the classifiers are not required to detect
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::InvalidParameter` for a zero cluster count,
    /// inverted channel windows, or a hue window beyond the hue range.
    pub fn validate(&self) -> Result<()> {
        if self.clusters == 0 {
            return Err(SegmentError::invalid_parameter("clusters", 0));
        }
        if let Some(bounds) = self.bounds {
            if bounds.hue_min > bounds.hue_max {
                return Err(SegmentError::invalid_parameter(
                    "hue window",
                    format!("{}-{}", bounds.hue_min, bounds.hue_max),
                ));
            }
            if bounds.hue_max > HUE_MAX {
                return Err(SegmentError::invalid_parameter("hue_max", bounds.hue_max));
            }
            if bounds.sat_min > bounds.sat_max {
                return Err(SegmentError::invalid_parameter(
                    "saturation window",
                    format!("{}-{}", bounds.sat_min, bounds.sat_max),
                ));
            }
            if bounds.val_min > bounds.val_max {
                return Err(SegmentError::invalid_parameter(
                    "value window",
                    format!("{}-{}", bounds.val_min, bounds.val_max),
                ));
            }
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SegmentError::config(format!("Failed to read config file: {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SegmentError::config(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save a configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            SegmentError::config("Failed to serialize configuration".to_string(), e)
        })?;
        std::fs::write(path, json).map_err(|e| {
            SegmentError::config(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })?;
        Ok(())
    }
}
