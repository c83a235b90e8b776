use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::detection::domain::face_attribute_detector::{DetectionError, FaceAttributeDetector};
use crate::detection::domain::face_observation::RawFaceObservation;

/// Replays pre-computed model output by image path.
///
/// Lets the aggregation layer run against observations captured from a
/// real model run (golden fixtures, offline re-analysis with new thresholds)
/// without loading the model. Lookup tries the full path first, then the
/// bare file name, so recordings stay valid when the image directory moves.
#[derive(Debug, Default)]
pub struct RecordedFaceDetector {
    recordings: HashMap<PathBuf, Vec<RawFaceObservation>>,
}

impl RecordedFaceDetector {
    pub fn new(recordings: HashMap<PathBuf, Vec<RawFaceObservation>>) -> Self {
        Self { recordings }
    }

    /// Parses `{ "<image path>": [observation, ...], ... }`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let recordings: HashMap<PathBuf, Vec<RawFaceObservation>> = serde_json::from_str(json)?;
        Ok(Self::new(recordings))
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, faces: Vec<RawFaceObservation>) {
        self.recordings.insert(path.into(), faces);
    }

    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    fn lookup(&self, image_path: &Path) -> Option<&Vec<RawFaceObservation>> {
        self.recordings.get(image_path).or_else(|| {
            image_path
                .file_name()
                .and_then(|name| self.recordings.get(Path::new(name)))
        })
    }
}

impl FaceAttributeDetector for RecordedFaceDetector {
    fn detect(&mut self, image_path: &Path) -> Result<Vec<RawFaceObservation>, DetectionError> {
        self.lookup(image_path)
            .cloned()
            .ok_or_else(|| DetectionError::ImageNotFound(image_path.to_path_buf()))
    }
}
