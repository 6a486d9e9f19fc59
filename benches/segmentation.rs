use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};

use huemask::color::hsv_from_rgb;
use huemask::{KmeansClassifier, RangeClassifier, Target};

/// Synthetic frame mixing a green-ish and a blue-ish population
fn synthetic_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x + y) % 3 == 0 {
            Rgb([20, 200, 40])
        } else {
            Rgb([10, 20, 200])
        }
    })
}

fn benchmark_range_classifier(c: &mut Criterion) {
    let frame = synthetic_frame(256, 256);
    let hsv = hsv_from_rgb(&frame);
    let classifier = RangeClassifier::for_target(Target::Green);

    c.bench_function("range_classifier_256x256", |b| {
        b.iter(|| black_box(classifier.segment(&hsv)))
    });
}

fn benchmark_kmeans_classifier(c: &mut Criterion) {
    let frame = synthetic_frame(64, 64);
    let hsv = hsv_from_rgb(&frame);
    let classifier = KmeansClassifier::new(3).with_seed(7);

    c.bench_function("kmeans_classifier_64x64", |b| {
        b.iter(|| black_box(classifier.segment(&hsv, Target::Green).unwrap()))
    });
}

fn benchmark_conversion(c: &mut Criterion) {
    let frame = synthetic_frame(256, 256);

    c.bench_function("hsv_from_rgb_256x256", |b| {
        b.iter(|| black_box(hsv_from_rgb(&frame)))
    });
}

criterion_group!(
    benches,
    benchmark_conversion,
    benchmark_range_classifier,
    benchmark_kmeans_classifier
);
criterion_main!(benches);
