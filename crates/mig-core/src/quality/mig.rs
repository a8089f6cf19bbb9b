use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;
use rayon::prelude::*;
use tracing::info;

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::Result;
use crate::frame::{Frame, ImageFileRef};
use crate::io::image_io::load_grayscale;

use super::sobel::{gradient_magnitude, sobel_x, sobel_y};

/// Mean Intensity Gradient of raw intensity data.
///
/// Magnitudes are summed over every pixel, borders included, then divided by
/// rows * cols. An empty array scores 0.0.
pub fn mean_intensity_gradient_array(data: &Array2<f32>) -> f64 {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return 0.0;
    }

    let magnitude = gradient_magnitude(&sobel_x(data), &sobel_y(data));
    let total: f64 = magnitude.iter().map(|&m| m as f64).sum();
    total / (h * w) as f64
}

/// Mean Intensity Gradient of a frame. Higher = sharper.
pub fn mean_intensity_gradient(frame: &Frame) -> f64 {
    mean_intensity_gradient_array(&frame.data)
}

/// Decode one image and compute its MIG.
pub fn frame_mig(path: &Path) -> Result<f64> {
    info!(path = %path.display(), "Processing frame");
    let frame = load_grayscale(path)?;
    Ok(mean_intensity_gradient(&frame))
}

/// Compute the MIG of every file, keeping the input order in the output.
///
/// With `parallel` set and enough files, frames are decoded and scored on the
/// Rayon pool. With `fail_fast`, scoring stops at the first failure and that
/// failure is the last entry; in parallel mode no new frames are started once
/// one has failed, and the result is that single error.
/// Calls `on_progress(items_done)` as each frame finishes.
pub fn score_files(
    files: &[ImageFileRef],
    parallel: bool,
    fail_fast: bool,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Vec<Result<f64>> {
    let done = AtomicUsize::new(0);
    let score = |file: &ImageFileRef| {
        let result = frame_mig(&file.path);
        on_progress(done.fetch_add(1, Ordering::Relaxed) + 1);
        result
    };

    if parallel && files.len() >= PARALLEL_FRAME_THRESHOLD {
        if !fail_fast {
            return files.par_iter().map(score).collect();
        }
        return match files.par_iter().map(score).collect::<Result<Vec<f64>>>() {
            Ok(scores) => scores.into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        };
    }

    let mut scores = Vec::with_capacity(files.len());
    for file in files {
        let result = score(file);
        let failed = result.is_err();
        scores.push(result);
        if failed && fail_fast {
            break;
        }
    }
    scores
}
