//! I/O helpers for mask frames, overlays and JSON.
//!
//! - `list_frames`: resolve a frame source (single image or directory) into
//!   an ordered list of image paths.
//! - `numbered_frames`: attach 1-based frame numbers.
//! - `load_mask`: read an image into a binary 8-bit mask (non-zero → 255).
//! - `load_hsv`: read a three-channel image whose channels hold H, S, V.
//! - `process_frame_file`: load one frame in the configured format and run
//!   the detector on it.
//! - `save_rgb`: write an RGB overlay to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::config::RuntimeConfig;
use crate::detector::ArmorDetector;
use crate::diagnostics::DetectionReport;
use crate::segmentation::{dilate_mask, FrameFormat};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "pgm", "ppm"];

/// Resolve `source` into frame paths. A file yields itself; a directory
/// yields its image files sorted by file name.
pub fn list_frames(source: &Path) -> Result<Vec<PathBuf>, String> {
    let meta = fs::metadata(source)
        .map_err(|e| format!("Failed to open frame source {}: {e}", source.display()))?;
    if meta.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }

    let entries = fs::read_dir(source)
        .map_err(|e| format!("Failed to list {}: {e}", source.display()))?;
    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", source.display()))?
            .path();
        if path.is_file() && has_frame_extension(&path) {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(frames)
}

/// Pair each frame with its 1-based frame number.
pub fn numbered_frames(frames: &[PathBuf]) -> impl Iterator<Item = (usize, &Path)> + '_ {
    (1..).zip(frames.iter().map(PathBuf::as_path))
}

fn has_frame_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            FRAME_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load an image from disk as a binary mask: any non-zero luma becomes 255.
pub fn load_mask(path: &Path) -> Result<GrayImage, String> {
    let mut mask = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    for px in mask.pixels_mut() {
        if px.0[0] != 0 {
            px.0[0] = 255;
        }
    }
    Ok(mask)
}

/// Load a three-channel frame as-is. Channels are read as H, S and V.
pub fn load_hsv(path: &Path) -> Result<RgbImage, String> {
    image::open(path)
        .map(|img| img.into_rgb8())
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Load the frame at `path` according to `config.frame_format` and run the
/// detector on it. Returns the mask the contours were taken from.
pub fn process_frame_file(
    detector: &ArmorDetector,
    config: &RuntimeConfig,
    path: &Path,
) -> Result<(GrayImage, DetectionReport), String> {
    match config.frame_format {
        FrameFormat::Mask => {
            let mask = dilate_mask(&load_mask(path)?, config.dilate_radius);
            let report = detector.process_mask(&mask);
            Ok((mask, report))
        }
        FrameFormat::Hsv => {
            let hsv = load_hsv(path)?;
            Ok(detector.process_hsv(&hsv, config.light_color, config.dilate_radius))
        }
    }
}

/// Save an RGB image, creating parent directories.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), String> {
    create_parent_dirs(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Stream `value` as pretty JSON into `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_parent_dirs(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))?;
    writer
        .flush()
        .map_err(|e| format!("Failed to flush {}: {e}", path.display()))
}

fn create_parent_dirs(path: &Path) -> Result<(), String> {
    match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display())),
        None => Ok(()),
    }
}
