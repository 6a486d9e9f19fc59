//! Data-driven cluster classification
//!
//! Partitions the image's HSV distribution into k clusters with Lloyd-style
//! k-means, then keeps the cluster whose centroid lies closest to the
//! requested target's reference color. Initial centroid placement is
//! random, so the full procedure is restarted several times and the
//! lowest-distortion attempt wins. Cluster IDs may differ between runs;
//! the resulting binary mask is stable in practice because it tracks the
//! dominant color blob, and a fixed seed pins the outcome exactly.
//!
//! Algorithm tag: `algo-kmeans-target-match`

use image::GrayImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{Hsv8, HsvImage};
use crate::constants::kmeans::{ATTEMPTS, CONVERGENCE_EPSILON, MAX_ITERATIONS};
use crate::error::{Result, SegmentError};
use crate::mask::SELECTED;
use crate::target::Target;

/// Cluster segmentation result
#[derive(Debug, Clone)]
pub struct ClusterSegmentation {
    /// Binary mask of the target-matched cluster
    pub mask: GrayImage,
    /// Cluster centroids rounded to 8-bit HSV, in cluster-id order
    pub centroids: Vec<Hsv8>,
    /// Index into `centroids` of the cluster matched to the target
    pub selected: usize,
}

/// One converged clustering attempt, before centroid rounding
struct KmeansFit {
    centroids: Vec<[f32; 3]>,
    assignments: Vec<usize>,
    distortion: f64,
}

/// K-means cluster classifier
///
/// The caller is responsible for choosing a usable cluster count; `k = 0`
/// is rejected, while k exceeding the number of distinct colors simply
/// degenerates into duplicate or empty clusters.
#[derive(Debug, Clone, Copy)]
pub struct KmeansClassifier {
    clusters: usize,
    attempts: usize,
    max_iterations: usize,
    epsilon: f32,
    seed: Option<u64>,
}

impl KmeansClassifier {
    /// Create a classifier with default termination parameters
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters,
            attempts: ATTEMPTS,
            max_iterations: MAX_ITERATIONS,
            epsilon: CONVERGENCE_EPSILON,
            seed: None,
        }
    }

    /// Create a classifier with custom termination parameters
    pub fn with_params(clusters: usize, attempts: usize, max_iterations: usize, epsilon: f32) -> Self {
        Self {
            clusters,
            attempts,
            max_iterations,
            epsilon,
            seed: None,
        }
    }

    /// Pin the random number generator for reproducible clustering
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster the image and keep the cluster nearest the target reference
    ///
    /// # Arguments
    ///
    /// * `hsv` - HSV view of the frame to segment
    /// * `target` - target whose reference color picks the cluster
    ///
    /// # Returns
    ///
    /// `ClusterSegmentation` with the binary mask (row-major, same
    /// dimensions as the input), the rounded centroids and the index of
    /// the selected one.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError` if the cluster count is zero or the image
    /// has no pixels.
    pub fn segment(&self, hsv: &HsvImage, target: Target) -> Result<ClusterSegmentation> {
        if self.clusters == 0 {
            return Err(SegmentError::invalid_parameter("clusters", 0));
        }
        let (width, height) = hsv.dimensions();
        if hsv.pixels().is_empty() {
            return Err(SegmentError::EmptyFrame { width, height });
        }

        let samples: Vec<[f32; 3]> = hsv
            .pixels()
            .iter()
            .map(|&[h, s, v]| [h as f32, s as f32, v as f32])
            .collect();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut best = self.run_attempt(&samples, &mut rng);
        for _ in 1..self.attempts {
            let fit = self.run_attempt(&samples, &mut rng);
            if fit.distortion < best.distortion {
                best = fit;
            }
        }

        let centroids: Vec<Hsv8> = best.centroids.iter().map(|c| round_centroid(*c)).collect();
        let reference = target.profile().reference;
        let selected = nearest_to_reference(&centroids, reference);

        let mut mask = GrayImage::new(width, height);
        for (&cluster, cell) in best.assignments.iter().zip(mask.pixels_mut()) {
            if cluster == selected {
                cell.0[0] = SELECTED;
            }
        }

        Ok(ClusterSegmentation {
            mask,
            centroids,
            selected,
        })
    }

    /// One full Lloyd run from a fresh random initialization
    fn run_attempt(&self, samples: &[[f32; 3]], rng: &mut StdRng) -> KmeansFit {
        let mut centroids: Vec<[f32; 3]> = (0..self.clusters)
            .map(|_| samples[rng.random_range(0..samples.len())])
            .collect();
        let mut assignments = vec![0usize; samples.len()];

        for _ in 0..self.max_iterations {
            assign_to_nearest(samples, &centroids, &mut assignments);

            let mut sums = vec![[0.0f64; 3]; self.clusters];
            let mut counts = vec![0usize; self.clusters];
            for (sample, &cluster) in samples.iter().zip(assignments.iter()) {
                sums[cluster][0] += sample[0] as f64;
                sums[cluster][1] += sample[1] as f64;
                sums[cluster][2] += sample[2] as f64;
                counts[cluster] += 1;
            }

            let mut movement = 0.0f32;
            for cluster in 0..self.clusters {
                // An empty cluster keeps its centroid for the next round
                if counts[cluster] == 0 {
                    continue;
                }
                let count = counts[cluster] as f64;
                let next = [
                    (sums[cluster][0] / count) as f32,
                    (sums[cluster][1] / count) as f32,
                    (sums[cluster][2] / count) as f32,
                ];
                movement = movement.max(squared_distance(centroids[cluster], next).sqrt());
                centroids[cluster] = next;
            }
            if movement < self.epsilon {
                break;
            }
        }

        // Final pass so the labels correspond to the returned centroids
        assign_to_nearest(samples, &centroids, &mut assignments);
        let distortion = samples
            .iter()
            .zip(assignments.iter())
            .map(|(sample, &cluster)| squared_distance(*sample, centroids[cluster]) as f64)
            .sum();

        KmeansFit {
            centroids,
            assignments,
            distortion,
        }
    }
}

/// Assign every sample to its nearest centroid; ties keep the lowest id
fn assign_to_nearest(samples: &[[f32; 3]], centroids: &[[f32; 3]], assignments: &mut [usize]) {
    for (sample, slot) in samples.iter().zip(assignments.iter_mut()) {
        let mut best = 0usize;
        let mut best_dist = squared_distance(*sample, centroids[0]);
        for (id, centroid) in centroids.iter().enumerate().skip(1) {
            let dist = squared_distance(*sample, *centroid);
            if dist < best_dist {
                best = id;
                best_dist = dist;
            }
        }
        *slot = best;
    }
}

/// Index of the centroid nearest the reference color; ties keep the
/// first-encountered index
fn nearest_to_reference(centroids: &[Hsv8], reference: Hsv8) -> usize {
    let mut best = 0usize;
    let mut best_dist = reference_distance(centroids[0], reference);
    for (id, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = reference_distance(*centroid, reference);
        if dist < best_dist {
            best = id;
            best_dist = dist;
        }
    }
    best
}

/// Euclidean distance between a rounded centroid and a reference color
///
/// Hue is treated as a plain scalar with no wrap handling at the top of
/// its range, so references near the wrap boundary may match the far side
/// poorly.
pub fn reference_distance(centroid: Hsv8, reference: Hsv8) -> f32 {
    let a = [centroid[0] as f32, centroid[1] as f32, centroid[2] as f32];
    let b = [
        reference[0] as f32,
        reference[1] as f32,
        reference[2] as f32,
    ];
    squared_distance(a, b).sqrt()
}

fn squared_distance(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dh = a[0] - b[0];
    let ds = a[1] - b[1];
    let dv = a[2] - b[2];
    dh * dh + ds * ds + dv * dv
}

fn round_centroid(centroid: [f32; 3]) -> Hsv8 {
    [
        centroid[0].round().clamp(0.0, 255.0) as u8,
        centroid[1].round().clamp(0.0, 255.0) as u8,
        centroid[2].round().clamp(0.0, 255.0) as u8,
    ]
}
