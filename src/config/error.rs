use std::fmt;
use std::path::PathBuf;

/// Fatal configuration problems, reported before any frame is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse { origin: String, message: String },
    UnknownColor(String),
    InvalidValue { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read config {}: {message}", path.display())
            }
            Self::Parse { origin, message } => {
                write!(f, "failed to parse config {origin}: {message}")
            }
            Self::UnknownColor(name) => write!(
                f,
                "unknown light_color {name:?} (expected \"red\" or \"blue\")"
            ),
            Self::InvalidValue { key, reason } => write!(f, "invalid {key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
