//! Application settings loaded from a RON file.
//!
//! ```ron
//! (
//!     title: "sgl",
//!     width: 800,
//!     height: 600,
//!     camera: (fov: 70.0, position: (x: 0.0, y: 0.0, z: -1.0)),
//! )
//! ```
//!
//! Every field is optional; anything missing takes its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::colors;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// ARGB8888 word the target is cleared to before each frame.
    pub clear_color: u32,
    pub camera: Camera,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "sgl".to_string(),
            width: 640,
            height: 480,
            clear_color: colors::BLACK,
            camera: Camera::default(),
            target_fps: 60,
        }
    }
}

impl Config {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_ron_str("()").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.clear_color, 0xFF000000);
    }

    #[test]
    fn partial_camera_keeps_other_defaults() {
        let config = Config::from_ron_str(
            "(width: 800, camera: (fov: 70.0, position: (x: 0.0, y: 1.0, z: 0.0)))",
        )
        .unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert_relative_eq!(config.camera.fov, 70.0);
        assert_relative_eq!(config.camera.near, 0.1);
        assert_relative_eq!(config.camera.position.y, 1.0);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(matches!(
            Config::from_ron_str("(width: \"wide\")"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Config::load("/no/such/config.ron"),
            Err(ConfigError::Io(_))
        ));
    }
}
