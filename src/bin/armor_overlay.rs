//! Render a single frame with its detected lights and armors.
//!
//! Usage: `armor_overlay <config.json> <frame> <out.png>`
//!
//! The frame is read in the config's `frame_format` (binary mask or HSV).
use armor_detector::config::load_config;
use armor_detector::io::{process_frame_file, save_rgb};
use armor_detector::overlay::render_overlay;
use armor_detector::ArmorDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let config_path = args.next().ok_or_else(usage)?;
    let frame_path = args.next().ok_or_else(usage)?;
    let out_path = args.next().ok_or_else(usage)?;

    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let detector = ArmorDetector::new(config.params.clone());
    let (mask, report) = process_frame_file(&detector, &config, Path::new(&frame_path))?;

    let overlay = render_overlay(&mask, &report.detections, config.light_color);
    save_rgb(&overlay, Path::new(&out_path))?;
    println!(
        "lights={} armors={} -> {}",
        report.detections.lights.len(),
        report.detections.armors.len(),
        out_path
    );
    Ok(())
}

fn usage() -> String {
    "Usage: armor_overlay <config.json> <frame> <out.png>".to_string()
}
