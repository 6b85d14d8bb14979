use armor_detector::config::{load_config, RuntimeConfig};
use armor_detector::io::{
    list_frames, numbered_frames, process_frame_file, save_rgb, write_json_file,
};
use armor_detector::overlay::render_overlay;
use armor_detector::{ArmorDetector, DetectionReport};
use log::{debug, info};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameEntry {
    frame: usize,
    source: PathBuf,
    report: DetectionReport,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let frames = list_frames(&config.video_path)?;
    info!(
        "armor_detector: {} frame(s) from {} format={:?} color={}",
        frames.len(),
        config.video_path.display(),
        config.frame_format,
        config.light_color
    );

    let detector = ArmorDetector::new(config.params.clone());
    let mut entries = Vec::new();
    for (frame, path) in numbered_frames(&frames) {
        let report = process_frame(&detector, &config, frame, path)?;
        if config.output.json_out.is_some() {
            entries.push(FrameEntry {
                frame,
                source: path.to_path_buf(),
                report,
            });
        }
    }

    if let Some(json_out) = &config.output.json_out {
        write_json_file(json_out, &entries)?;
        println!("Saved report to {}", json_out.display());
    }
    Ok(())
}

fn process_frame(
    detector: &ArmorDetector,
    config: &RuntimeConfig,
    frame: usize,
    path: &Path,
) -> Result<DetectionReport, String> {
    let (mask, report) = process_frame_file(detector, config, path)?;
    debug!(
        "frame {frame}: lights={} armors={} total_ms={:.3}",
        report.detections.lights.len(),
        report.detections.armors.len(),
        report.trace.timings.total_ms
    );

    if report.detections.is_empty() {
        println!("frame {frame}: no armor");
    }
    for armor in &report.detections.armors {
        println!(
            "frame {frame}: armor center=({:.1}, {:.1}) angle={:.2} area={:.1}",
            armor.center.x, armor.center.y, armor.angle, armor.area
        );
    }

    if let Some(dir) = &config.output.debug_dir {
        let overlay = render_overlay(&mask, &report.detections, config.light_color);
        save_rgb(&overlay, &dir.join(format!("frame_{frame:05}.png")))?;
    }
    Ok(report)
}

fn usage() -> String {
    "Usage: armor_detector <config.json>".to_string()
}
