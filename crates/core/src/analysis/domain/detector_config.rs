use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{
    DEFAULT_EMOTION_THRESHOLD, DEFAULT_RACE_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be between 0 and 100, got {value}")]
    InvalidConfiguration { name: &'static str, value: f64 },
    #[error("malformed detector configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Whether a worn mask hides an otherwise confident prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskPolicy {
    #[default]
    Suppress,
    Report,
}

/// Validated detector thresholds. Immutable once built.
///
/// Thresholds are confidence percentages in `[0, 100]`; a prediction is
/// reported when its confidence is at or above the threshold. Emotion is
/// always suppressed under a mask, race follows `race_under_mask`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectorConfig {
    emotion_threshold: f64,
    race_threshold: f64,
    race_under_mask: MaskPolicy,
}

impl DetectorConfig {
    pub fn new(
        emotion_threshold: impl Into<f64>,
        race_threshold: impl Into<f64>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            emotion_threshold: validate_threshold("emotion_threshold", emotion_threshold.into())?,
            race_threshold: validate_threshold("race_threshold", race_threshold.into())?,
            race_under_mask: MaskPolicy::default(),
        })
    }

    pub fn with_race_under_mask(mut self, policy: MaskPolicy) -> Self {
        self.race_under_mask = policy;
        self
    }

    /// Parses a JSON configuration; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(Self::new(file.emotion_threshold, file.race_threshold)?
            .with_race_under_mask(file.race_under_mask))
    }

    pub fn emotion_threshold(&self) -> f64 {
        self.emotion_threshold
    }

    pub fn race_threshold(&self) -> f64 {
        self.race_threshold
    }

    pub fn race_under_mask(&self) -> MaskPolicy {
        self.race_under_mask
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            emotion_threshold: DEFAULT_EMOTION_THRESHOLD,
            race_threshold: DEFAULT_RACE_THRESHOLD,
            race_under_mask: MaskPolicy::default(),
        }
    }
}

fn validate_threshold(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidConfiguration { name, value })
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default = "default_emotion_threshold")]
    emotion_threshold: f64,
    #[serde(default = "default_race_threshold")]
    race_threshold: f64,
    #[serde(default)]
    race_under_mask: MaskPolicy,
}

fn default_emotion_threshold() -> f64 {
    DEFAULT_EMOTION_THRESHOLD
}

fn default_race_threshold() -> f64 {
    DEFAULT_RACE_THRESHOLD
}
