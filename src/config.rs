//! Configuration management for the gesture control application

use crate::{
    constants::{DEFAULT_HAND_MODEL_PATH, DEFAULT_PRESENCE_THRESHOLD},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model configuration
    pub models: ModelConfig,

    /// Hand detection configuration
    pub detection: DetectionConfig,

    /// Display configuration
    pub display: DisplayConfig,

    /// Click dispatch configuration
    pub clicks: ClickConfig,
}

/// Model file paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the hand landmark ONNX model
    pub hand_landmarks: PathBuf,
}

/// Hand detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum presence score for accepting a hand (0.0-1.0)
    pub presence_threshold: f32,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mirror the frame horizontally before processing
    pub mirror: bool,
}

/// Click dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickConfig {
    /// Enable click injection
    pub enabled: bool,

    /// Only click on gesture changes instead of on every frame
    pub debounce: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: ModelConfig::default(),
            detection: DetectionConfig::default(),
            display: DisplayConfig::default(),
            clicks: ClickConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hand_landmarks: PathBuf::from(DEFAULT_HAND_MODEL_PATH),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            presence_threshold: DEFAULT_PRESENCE_THRESHOLD,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mirror: true }
    }
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error on out-of-range thresholds or missing model files
    pub fn validate(&self) -> Result<()> {
        // Validate thresholds
        if !(0.0..=1.0).contains(&self.detection.presence_threshold) {
            return Err(Error::ConfigError(
                "Presence threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        // Validate model paths exist
        if !self.models.hand_landmarks.exists() {
            return Err(Error::ConfigError(format!(
                "Hand landmark model not found: {}",
                self.models.hand_landmarks.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Control Configuration

# Model paths
models:
  hand_landmarks: "assets/hand_landmarks.onnx"

# Hand detection parameters
detection:
  presence_threshold: 0.7

# Display settings
display:
  mirror: true

# Click dispatch
clicks:
  enabled: true
  debounce: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.models.hand_landmarks, PathBuf::from(DEFAULT_HAND_MODEL_PATH));
        assert!((config.detection.presence_threshold - DEFAULT_PRESENCE_THRESHOLD).abs() < f32::EPSILON);
        assert!(config.display.mirror);
        assert!(config.clicks.enabled);
        assert!(!config.clicks.debounce);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.models.hand_landmarks, Config::default().models.hand_landmarks);
        assert!(config.display.mirror);
        assert!(!config.clicks.debounce);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = Config::default();
        config.detection.presence_threshold = 1.5;
        assert!(config.validate().is_err());

        config.detection.presence_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_model() {
        let mut config = Config::default();
        config.models.hand_landmarks = PathBuf::from("definitely/missing.onnx");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_yaml::from_str("clicks:\n  enabled: true\n  debounce: true\n").unwrap();
        assert!(config.clicks.debounce);
        // Unspecified sections keep their defaults
        assert!(config.display.mirror);
        assert!((config.detection.presence_threshold - DEFAULT_PRESENCE_THRESHOLD).abs() < f32::EPSILON);
    }
}
