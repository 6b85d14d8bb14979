//! Runtime configuration loaded once at startup.
//!
//! The file is flat JSON using the historical key names (`light_min_area`,
//! `lights_angle_differ`, ...). Every threshold is required: a missing or
//! non-numeric value, an unknown `light_color` or an inconsistent range is a
//! [`ConfigError`] and no frame is processed.

mod error;
mod runtime;

pub use error::ConfigError;
pub use runtime::{load_config, OutputConfig, RuntimeConfig};
