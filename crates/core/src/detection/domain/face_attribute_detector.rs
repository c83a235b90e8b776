use std::path::{Path, PathBuf};

use thiserror::Error;

use super::face_observation::RawFaceObservation;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("image not found: {0}")]
    ImageNotFound(PathBuf),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("no face detected in {0}")]
    NoFaceDetected(PathBuf),
    #[error("detection backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DetectionError {
    /// True for failures tied to one image rather than to the capability.
    ///
    /// These collapse into the no-face result; everything else propagates.
    pub fn is_per_image(&self) -> bool {
        !matches!(self, DetectionError::Backend(_))
    }
}

/// Domain interface for the face and attribute model.
///
/// Returns one observation per detected face, in the model's order.
/// Implementations may hold model sessions or caches, hence `&mut self`.
pub trait FaceAttributeDetector: Send {
    fn detect(&mut self, image_path: &Path) -> Result<Vec<RawFaceObservation>, DetectionError>;
}

impl<D: FaceAttributeDetector + ?Sized> FaceAttributeDetector for &mut D {
    fn detect(&mut self, image_path: &Path) -> Result<Vec<RawFaceObservation>, DetectionError> {
        (**self).detect(image_path)
    }
}

impl<D: FaceAttributeDetector + ?Sized> FaceAttributeDetector for Box<D> {
    fn detect(&mut self, image_path: &Path) -> Result<Vec<RawFaceObservation>, DetectionError> {
        (**self).detect(image_path)
    }
}
