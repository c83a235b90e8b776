use thiserror::Error;

use crate::analysis::domain::analysis_request::AnalysisRequest;
use crate::analysis::domain::analysis_result::{AnalysisResult, YesNo};
use crate::analysis::domain::attribute_policy::AttributePolicy;
use crate::analysis::domain::detector_config::{ConfigError, DetectorConfig};
use crate::detection::domain::face_attribute_detector::{DetectionError, FaceAttributeDetector};
use crate::detection::domain::face_observation::RawFaceObservation;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Detection(#[from] DetectionError),
}

/// Single-image face analysis: detect → threshold/mask policy → summary.
///
/// Built once per image. Thresholds are validated before any detection
/// work, and the no-face defaults are available from construction on.
/// Per-image detection failures (missing or undecodable image, no face)
/// yield the defaults; backend failures propagate.
pub struct AnalyseImageUseCase<'a> {
    request: AnalysisRequest,
    detector: Box<dyn FaceAttributeDetector + 'a>,
    policy: AttributePolicy,
    defaults: AnalysisResult,
}

impl<'a> AnalyseImageUseCase<'a> {
    /// Validates both thresholds; either outside `[0, 100]` fails with
    /// [`ConfigError::InvalidConfiguration`].
    pub fn new(
        request: AnalysisRequest,
        detector: Box<dyn FaceAttributeDetector + 'a>,
        emotion_threshold: impl Into<f64>,
        race_threshold: impl Into<f64>,
    ) -> Result<Self, ConfigError> {
        let config = DetectorConfig::new(emotion_threshold, race_threshold)?;
        Ok(Self::with_config(request, detector, config))
    }

    pub fn with_config(
        request: AnalysisRequest,
        detector: Box<dyn FaceAttributeDetector + 'a>,
        config: DetectorConfig,
    ) -> Self {
        Self {
            request,
            detector,
            policy: AttributePolicy::new(config),
            defaults: AnalysisResult::no_face(),
        }
    }

    /// The result reported if analysis finds no face.
    pub fn defaults(&self) -> &AnalysisResult {
        &self.defaults
    }

    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    /// Runs the detector on the requested image and summarises its faces.
    pub fn analyse_image(mut self) -> Result<AnalysisResult, AnalysisError> {
        let path = self.request.filename();
        let faces = match self.detector.detect(path) {
            Ok(faces) => faces,
            Err(e) if e.is_per_image() => {
                log::warn!("{e}; reporting no face for {}", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        if faces.is_empty() {
            log::debug!("No face found in {}", path.display());
            return Ok(self.defaults);
        }

        log::debug!("{} face(s) found in {}", faces.len(), path.display());
        Ok(summarise(&self.policy, &faces))
    }
}

/// Builds the summary for a non-empty face list, one entry per face.
fn summarise(policy: &AttributePolicy, faces: &[RawFaceObservation]) -> AnalysisResult {
    let count = faces.len();
    let mut result = AnalysisResult {
        face: YesNo::Yes,
        multiple_faces: YesNo::from(count >= 2),
        no_faces: count,
        wears_mask: Vec::with_capacity(count),
        age: Vec::with_capacity(count),
        gender: Vec::with_capacity(count),
        race: Vec::with_capacity(count),
        emotion: Vec::with_capacity(count),
        emotion_category: Vec::with_capacity(count),
    };

    for face in faces {
        let resolved = policy.resolve(face);
        result.wears_mask.push(resolved.wears_mask);
        result.age.push(resolved.age);
        result.gender.push(resolved.gender);
        result.race.push(resolved.race);
        result.emotion.push(resolved.emotion);
        result.emotion_category.push(resolved.emotion_category);
    }

    result
}
