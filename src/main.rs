//! Command-line interface for huemask
//!
//! Loads one frame, runs the configured classifier, writes the mask and
//! overlay images and prints a short report. All validation happens here
//! or in `SegmentationConfig::validate`, before the core runs.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use huemask::constants::{bounds, kmeans};
use huemask::{
    image_io, segment_image, HsvBounds, Method, Result, SegmentError, SegmentationConfig, Target,
};

#[derive(Parser, Debug)]
#[command(
    name = "huemask",
    version,
    about = "Extract a color-region mask from an image and render it as an overlay"
)]
struct Args {
    /// Path to the input image
    #[arg(long)]
    input: PathBuf,

    /// Segmentation method (hsv | kmeans); not needed with --config
    #[arg(long, conflicts_with = "config")]
    method: Option<Method>,

    /// Target color to isolate (green | blue)
    #[arg(long, default_value = "green")]
    target: Target,

    /// Lower hue bound (0-179); enables an explicit window with --hmax
    #[arg(long, requires = "hmax")]
    hmin: Option<u8>,

    /// Upper hue bound (0-179); enables an explicit window with --hmin
    #[arg(long, requires = "hmin")]
    hmax: Option<u8>,

    /// Lower saturation bound for explicit windows
    #[arg(long, default_value_t = bounds::DEFAULT_SAT_MIN)]
    smin: u8,

    /// Upper saturation bound for explicit windows
    #[arg(long, default_value_t = bounds::DEFAULT_SAT_MAX)]
    smax: u8,

    /// Lower value bound for explicit windows
    #[arg(long, default_value_t = bounds::DEFAULT_VAL_MIN)]
    vmin: u8,

    /// Upper value bound for explicit windows
    #[arg(long, default_value_t = bounds::DEFAULT_VAL_MAX)]
    vmax: u8,

    /// Number of clusters for the kmeans method
    #[arg(long, default_value_t = kmeans::DEFAULT_CLUSTERS)]
    k: usize,

    /// RNG seed for reproducible clustering
    #[arg(long)]
    seed: Option<u64>,

    /// Load the full run configuration from a JSON file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the mask and overlay images
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    if let Err(error) = run(&args, start) {
        eprintln!("[ERROR] {}", error);
        eprintln!("[ERROR] {}", error.user_message());
        process::exit(1);
    }
}

fn run(args: &Args, start: Instant) -> Result<()> {
    let config = build_config(args)?;
    let image = image_io::load_image(&args.input)?;
    let output = segment_image(&image, &config)?;

    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let paths = image_io::save_outputs(&args.output_dir, stem, &output.mask, &output.overlay)?;

    let elapsed = start.elapsed();
    println!("[INFO] Method: {}", output.method.name().to_uppercase());
    println!("[INFO] Target color: {}", output.target);
    println!("[INFO] Segmented pixels: {:.2}%", output.coverage * 100.0);
    println!("[INFO] Mask saved to: {}", paths.mask.display());
    println!("[INFO] Overlay saved to: {}", paths.overlay.display());
    println!("[INFO] Total time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn build_config(args: &Args) -> Result<SegmentationConfig> {
    if let Some(path) = &args.config {
        return SegmentationConfig::from_json_file(path);
    }

    let method = args.method.ok_or_else(|| {
        SegmentError::invalid_parameter("method", "missing (pass --method or --config)")
    })?;

    let bounds = match (args.hmin, args.hmax) {
        (Some(hue_min), Some(hue_max)) => Some(HsvBounds {
            hue_min,
            hue_max,
            sat_min: args.smin,
            sat_max: args.smax,
            val_min: args.vmin,
            val_max: args.vmax,
        }),
        _ => None,
    };

    let config = SegmentationConfig {
        method,
        target: args.target,
        bounds,
        clusters: args.k,
        seed: args.seed,
    };
    config.validate()?;
    Ok(config)
}
