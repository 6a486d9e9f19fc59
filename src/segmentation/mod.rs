//! Pixel classification module
//!
//! This module holds the two classifiers that turn an HSV view of an image
//! into a binary region-of-interest mask: a fixed-rule channel-window
//! classifier and a data-driven k-means cluster classifier.

pub mod kmeans;
pub mod range;

pub use kmeans::{ClusterSegmentation, KmeansClassifier};
pub use range::{HsvBounds, RangeClassifier};
