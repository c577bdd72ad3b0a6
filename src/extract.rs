//! Canny line extraction: decode, detect, encode.
//!
//! Gradient computation, non-maximum suppression and hysteresis all happen
//! inside [`imageproc::edges::canny`]. Pixels with gradient magnitude above
//! `upper` are edges, below `lower` are not, and anything in between is kept
//! only when connected to a strong edge. The result holds only `0` and `255`.
//!
//! Thresholds are picked empirically; `upper` around two to three times
//! `lower` is a common starting point. Nothing here enforces that.
//!
//! The output path is deterministic, so two concurrent runs on the same
//! input and thresholds write the same file and the last writer wins.
use crate::diagnostics::{traced, TimingBreakdown};
use crate::error::Result;
use crate::image::io::{load_grayscale_image, save_edge_map};
use crate::output::OutputLocation;
use crate::validate::{Thresholds, ValidatedRequest};
use image::GrayImage;
use imageproc::edges::canny;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Value written for edge pixels; everything else is zero.
pub const EDGE_VALUE: u8 = 255;

/// Outcome of one extraction, suitable for a JSON report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub thresholds: Thresholds,
    pub edge_pixel_count: usize,
    pub timings: TimingBreakdown,
}

/// Binary edge map of `gray` using double-threshold hysteresis.
pub fn detect_edges(gray: &GrayImage, thresholds: Thresholds) -> GrayImage {
    canny(gray, thresholds.lower as f32, thresholds.upper as f32)
}

pub fn count_edge_pixels(edges: &GrayImage) -> usize {
    edges.as_raw().iter().filter(|&&v| v == EDGE_VALUE).count()
}

/// Extract edges from `input` and write them under `location`.
///
/// Does not check that `input` exists; run the validator first.
pub fn extract_edges(
    input: &Path,
    thresholds: Thresholds,
    location: &OutputLocation,
) -> Result<PathBuf> {
    extract_edges_with_summary(input, thresholds, location).map(|summary| summary.output)
}

pub fn extract_edges_with_summary(
    input: &Path,
    thresholds: Thresholds,
    location: &OutputLocation,
) -> Result<EdgeSummary> {
    let total = Instant::now();
    let mut timings = TimingBreakdown::default();

    let stage = Instant::now();
    let gray = load_grayscale_image(input)?;
    timings.push_since("decode", stage);

    let stage = Instant::now();
    let edges = detect_edges(&gray, thresholds);
    timings.push_since("canny", stage);

    let output = location.output_file_path(input, thresholds)?;

    let stage = Instant::now();
    save_edge_map(&edges, &output)?;
    timings.push_since("encode", stage);

    timings.total_ms = total.elapsed().as_secs_f64() * 1000.0;
    for s in &timings.stages {
        debug!("extract_edges stage {} took {:.3} ms", s.label, s.elapsed_ms);
    }

    Ok(EdgeSummary {
        input: input.to_path_buf(),
        output,
        width: edges.width(),
        height: edges.height(),
        thresholds,
        edge_pixel_count: count_edge_pixels(&edges),
        timings,
    })
}

/// [`extract_edges`] wrapped in the call trace.
pub fn extract_edges_traced(
    request: &ValidatedRequest,
    location: &OutputLocation,
) -> Result<PathBuf> {
    let args = (
        &request.input,
        request.thresholds.lower,
        request.thresholds.upper,
    );
    traced("extract_edges", &args, || {
        extract_edges(&request.input, request.thresholds, location)
    })
}
