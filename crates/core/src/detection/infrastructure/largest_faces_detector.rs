use std::path::Path;

use crate::detection::domain::face_attribute_detector::{DetectionError, FaceAttributeDetector};
use crate::detection::domain::face_observation::RawFaceObservation;

/// Decorator that keeps only the `max_faces` largest faces of each image.
///
/// Kept faces retain the inner detector's order. Faces without a bounding
/// box rank as area zero; ties keep the earlier face.
pub struct LargestFacesDetector<D> {
    inner: D,
    max_faces: usize,
}

impl<D: FaceAttributeDetector> LargestFacesDetector<D> {
    pub fn new(inner: D, max_faces: usize) -> Result<Self, &'static str> {
        if max_faces < 1 {
            return Err("max_faces must be >= 1");
        }
        Ok(Self { inner, max_faces })
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: FaceAttributeDetector> FaceAttributeDetector for LargestFacesDetector<D> {
    fn detect(&mut self, image_path: &Path) -> Result<Vec<RawFaceObservation>, DetectionError> {
        let faces = self.inner.detect(image_path)?;
        if faces.len() <= self.max_faces {
            return Ok(faces);
        }

        let mut ranked: Vec<usize> = (0..faces.len()).collect();
        // Stable sort: equal areas stay in detection order.
        ranked.sort_by(|&a, &b| faces[b].area().cmp(&faces[a].area()));
        let mut keep = vec![false; faces.len()];
        for &i in ranked.iter().take(self.max_faces) {
            keep[i] = true;
        }

        log::debug!(
            "Keeping {} of {} faces in {}",
            self.max_faces,
            faces.len(),
            image_path.display()
        );

        Ok(faces
            .into_iter()
            .zip(keep)
            .filter_map(|(face, kept)| kept.then_some(face))
            .collect())
    }
}
