use super::ConfigError;
use crate::detector::params::{ArmorParams, DetectorParams, LightFilterParams, PairingParams};
use crate::segmentation::{FrameFormat, LightColor, DEFAULT_DILATE_RADIUS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional report destinations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Per-frame JSON report (an array with one entry per frame).
    pub json_out: Option<PathBuf>,
    /// Directory receiving overlay PNGs.
    pub debug_dir: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Frame source: an image or a directory of images.
    pub video_path: PathBuf,
    /// Whether frames are binary masks or HSV images to threshold.
    pub frame_format: FrameFormat,
    pub light_color: LightColor,
    pub dilate_radius: u8,
    pub params: DetectorParams,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    video_path: PathBuf,
    light_color: String,

    light_min_area: f32,
    light_max_angle: f32,
    light_max_ratio: f32,
    light_min_ratio: f32,
    light_contour_min_solidity: f32,
    light_extend_ratio: f32,

    lights_angle_differ: f32,
    lights_height_diff_ratio: f32,
    lights_max_y_diff_ratio: f32,
    lights_min_x_diff_ratio: f32,

    armor_max_ratio: f32,
    armor_min_ratio: f32,
    armor_angle_limit: f32,

    #[serde(default)]
    frame_format: FrameFormat,
    #[serde(default = "default_dilate_radius")]
    dilate_radius: u8,
    #[serde(default)]
    output: OutputConfig,
}

fn default_dilate_radius() -> u8 {
    DEFAULT_DILATE_RADIUS
}

impl RuntimeConfig {
    /// Parse and validate a JSON document. `origin` names the source in
    /// error messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        raw.validate()
    }
}

impl RawConfig {
    fn validate(self) -> Result<RuntimeConfig, ConfigError> {
        let light_color: LightColor = self
            .light_color
            .parse()
            .map_err(|_| ConfigError::UnknownColor(self.light_color.clone()))?;

        let non_negative = [
            ("light_min_area", self.light_min_area),
            ("light_max_angle", self.light_max_angle),
            ("light_max_ratio", self.light_max_ratio),
            ("light_min_ratio", self.light_min_ratio),
            ("light_contour_min_solidity", self.light_contour_min_solidity),
            ("light_extend_ratio", self.light_extend_ratio),
            ("lights_angle_differ", self.lights_angle_differ),
            ("lights_height_diff_ratio", self.lights_height_diff_ratio),
            ("lights_max_y_diff_ratio", self.lights_max_y_diff_ratio),
            ("lights_min_x_diff_ratio", self.lights_min_x_diff_ratio),
            ("armor_max_ratio", self.armor_max_ratio),
            ("armor_min_ratio", self.armor_min_ratio),
            ("armor_angle_limit", self.armor_angle_limit),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() {
                return Err(invalid(key, format!("{value} is not a finite number")));
            }
            if value < 0.0 {
                return Err(invalid(key, format!("{value} is negative")));
            }
        }
        if self.light_extend_ratio <= 0.0 {
            return Err(invalid("light_extend_ratio", "must be positive".to_string()));
        }
        if self.light_min_ratio > self.light_max_ratio {
            return Err(invalid(
                "light_min_ratio",
                format!(
                    "{} exceeds light_max_ratio {}",
                    self.light_min_ratio, self.light_max_ratio
                ),
            ));
        }
        if self.armor_min_ratio > self.armor_max_ratio {
            return Err(invalid(
                "armor_min_ratio",
                format!(
                    "{} exceeds armor_max_ratio {}",
                    self.armor_min_ratio, self.armor_max_ratio
                ),
            ));
        }

        let params = DetectorParams {
            light: LightFilterParams {
                min_area: self.light_min_area,
                max_angle_deg: self.light_max_angle,
                min_ratio: self.light_min_ratio,
                max_ratio: self.light_max_ratio,
                min_solidity: self.light_contour_min_solidity,
                extend_ratio: self.light_extend_ratio,
            },
            pairing: PairingParams {
                max_angle_diff_deg: self.lights_angle_differ,
                max_height_diff_ratio: self.lights_height_diff_ratio,
                max_y_diff_ratio: self.lights_max_y_diff_ratio,
                min_x_diff_ratio: self.lights_min_x_diff_ratio,
                min_distance_ratio: self.armor_min_ratio,
                max_distance_ratio: self.armor_max_ratio,
            },
            armor: ArmorParams {
                angle_limit_deg: self.armor_angle_limit,
            },
        };

        Ok(RuntimeConfig {
            video_path: self.video_path,
            frame_format: self.frame_format,
            light_color,
            dilate_radius: self.dilate_radius,
            params,
            output: self.output,
        })
    }
}

fn invalid(key: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { key, reason }
}

/// Read, parse and validate the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    RuntimeConfig::from_json_str(&data, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample() -> Value {
        json!({
            "video_path": "frames/",
            "light_color": "blue",
            "light_min_area": 10.0,
            "light_max_angle": 45.0,
            "light_max_ratio": 15.0,
            "light_min_ratio": 1.5,
            "light_contour_min_solidity": 0.5,
            "light_extend_ratio": 1.1,
            "lights_angle_differ": 10.0,
            "lights_height_diff_ratio": 0.3,
            "lights_max_y_diff_ratio": 0.5,
            "lights_min_x_diff_ratio": 0.5,
            "armor_max_ratio": 3.0,
            "armor_min_ratio": 1.0,
            "armor_angle_limit": 20.0
        })
    }

    fn parse(value: &Value) -> Result<RuntimeConfig, ConfigError> {
        RuntimeConfig::from_json_str(&value.to_string(), "test")
    }

    #[test]
    fn parses_flat_key_layout() {
        let cfg = parse(&sample()).expect("valid config");
        assert_eq!(cfg.light_color, LightColor::Blue);
        assert_eq!(cfg.video_path, PathBuf::from("frames/"));
        assert_eq!(cfg.dilate_radius, DEFAULT_DILATE_RADIUS);
        assert_eq!(cfg.frame_format, FrameFormat::Mask);
        assert_eq!(cfg.params.light.min_ratio, 1.5);
        assert_eq!(cfg.params.pairing.max_distance_ratio, 3.0);
        assert_eq!(cfg.params.armor.angle_limit_deg, 20.0);
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn missing_threshold_is_fatal() {
        let mut v = sample();
        v.as_object_mut()
            .expect("object")
            .remove("lights_min_x_diff_ratio");
        match parse(&v) {
            Err(ConfigError::Parse { message, .. }) => {
                assert!(message.contains("lights_min_x_diff_ratio"), "{message}")
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_threshold_is_fatal() {
        let mut v = sample();
        v["armor_angle_limit"] = json!("twenty");
        assert!(matches!(parse(&v), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_color_is_fatal() {
        let mut v = sample();
        v["light_color"] = json!("green");
        assert_eq!(
            parse(&v),
            Err(ConfigError::UnknownColor("green".to_string()))
        );
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut v = sample();
        v["light_min_ratio"] = json!(20.0);
        assert!(matches!(
            parse(&v),
            Err(ConfigError::InvalidValue {
                key: "light_min_ratio",
                ..
            })
        ));

        let mut v = sample();
        v["armor_min_ratio"] = json!(4.0);
        assert!(matches!(
            parse(&v),
            Err(ConfigError::InvalidValue {
                key: "armor_min_ratio",
                ..
            })
        ));

        let mut v = sample();
        v["light_extend_ratio"] = json!(0.0);
        assert!(matches!(
            parse(&v),
            Err(ConfigError::InvalidValue {
                key: "light_extend_ratio",
                ..
            })
        ));
    }

    #[test]
    fn optional_sections_are_read() {
        let mut v = sample();
        v["dilate_radius"] = json!(3);
        v["output"] = json!({ "json_out": "out/report.json" });
        let cfg = parse(&v).expect("valid config");
        assert_eq!(cfg.dilate_radius, 3);
        assert_eq!(cfg.output.json_out, Some(PathBuf::from("out/report.json")));
        assert!(cfg.output.debug_dir.is_none());
    }

    #[test]
    fn frame_format_selects_hsv_input() {
        let mut v = sample();
        v["frame_format"] = json!("hsv");
        let cfg = parse(&v).expect("valid config");
        assert_eq!(cfg.frame_format, FrameFormat::Hsv);

        v["frame_format"] = json!("video");
        match parse(&v) {
            Err(ConfigError::Parse { message, .. }) => {
                assert!(message.contains("video"), "{message}")
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("not/here.json"));
    }
}
