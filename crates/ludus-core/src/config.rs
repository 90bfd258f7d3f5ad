// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Game configuration.
//!
//! A [`GameConfig`] is consumed once, when the loop controller is built, and is
//! never mutated afterwards. It can be built in code or loaded from JSON:
//!
//! ```json
//! { "width": 800, "height": 600, "target_fps": 30 }
//! ```
//!
//! Missing fields fall back to the defaults (640x480 at 60 fps), and `fps` is
//! accepted as an alias for `target_fps`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// An error produced while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A surface dimension was zero.
    #[error("config field '{field}' must be greater than zero")]
    ZeroDimension {
        /// The offending field name.
        field: &'static str,
    },
    /// The target frame rate was zero.
    #[error("config field 'target_fps' must be greater than zero")]
    ZeroFrameRate,
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config source was not valid JSON for a `GameConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable settings for one run of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the display surface in logical pixels.
    pub width: u32,
    /// Height of the display surface in logical pixels.
    pub height: u32,
    /// Desired frames per second. Accepted and reported, never enforced by the loop.
    #[serde(alias = "fps")]
    pub target_fps: u32,
}

impl GameConfig {
    /// Creates a config from explicit values. Call [`GameConfig::validate`] before use.
    pub const fn new(width: u32, height: u32, target_fps: u32) -> Self {
        Self {
            width,
            height,
            target_fps,
        }
    }

    /// Checks that every field is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { field: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { field: "height" });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading game config from '{}'", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(640, 480, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::new(640, 480, 60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_fields_are_rejected() {
        assert!(matches!(
            GameConfig::new(0, 480, 60).validate(),
            Err(ConfigError::ZeroDimension { field: "width" })
        ));
        assert!(matches!(
            GameConfig::new(640, 0, 60).validate(),
            Err(ConfigError::ZeroDimension { field: "height" })
        ));
        assert!(matches!(
            GameConfig::new(640, 480, 0).validate(),
            Err(ConfigError::ZeroFrameRate)
        ));
    }

    #[test]
    fn json_accepts_fps_alias_and_fills_defaults() {
        let config = GameConfig::from_json_str(r#"{ "width": 800, "fps": 30 }"#)
            .expect("config should parse");
        assert_eq!(config, GameConfig::new(800, 480, 30));
    }

    #[test]
    fn json_is_validated_after_parsing() {
        let result = GameConfig::from_json_str(r#"{ "height": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::ZeroDimension { field: "height" })
        ));

        let result = GameConfig::from_json_str("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "width": 320, "height": 200, "target_fps": 75 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).expect("config should load");
        assert_eq!(config, GameConfig::new(320, 200, 75));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = GameConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
