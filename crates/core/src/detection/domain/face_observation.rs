use serde::{Deserialize, Serialize};

use super::face_attributes::{Emotion, Gender, Race};
use crate::shared::constants::MASK_PROBABILITY_CUTOFF;

/// Face bounding box in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl BoundingBox {
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

/// Mask classifier output: either a hard decision or the mask probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskSignal {
    Flag(bool),
    Probability(f64),
}

impl MaskSignal {
    pub fn indicates_mask(&self) -> bool {
        match *self {
            MaskSignal::Flag(worn) => worn,
            MaskSignal::Probability(p) => p > MASK_PROBABILITY_CUTOFF,
        }
    }
}

impl Default for MaskSignal {
    fn default() -> Self {
        MaskSignal::Flag(false)
    }
}

/// Dominant label of a classifier head with its confidence in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction<L> {
    pub label: L,
    pub confidence: f64,
}

impl<L> Prediction<L> {
    pub fn new(label: L, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Picks the highest-confidence entry of a score distribution.
    ///
    /// NaN scores are skipped. Ties keep the first label seen.
    pub fn dominant<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        scores
            .into_iter()
            .filter(|(_, score)| !score.is_nan())
            .fold(None, |best: Option<Self>, (label, score)| match best {
                Some(b) if b.confidence >= score => Some(b),
                _ => Some(Self::new(label, score)),
            })
    }
}

/// Raw per-face output of the detection capability.
///
/// Heads the model did not run (or could not run on this face) are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFaceObservation {
    #[serde(default)]
    pub facial_area: Option<BoundingBox>,
    #[serde(default)]
    pub mask: MaskSignal,
    #[serde(default)]
    pub emotion: Option<Prediction<Emotion>>,
    #[serde(default)]
    pub race: Option<Prediction<Race>>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<f64>,
}

impl RawFaceObservation {
    pub fn with_facial_area(mut self, x: i32, y: i32, w: u32, h: u32) -> Self {
        self.facial_area = Some(BoundingBox { x, y, w, h });
        self
    }

    pub fn with_mask(mut self, mask: MaskSignal) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_emotion(mut self, label: Emotion, confidence: f64) -> Self {
        self.emotion = Some(Prediction::new(label, confidence));
        self
    }

    pub fn with_race(mut self, label: Race, confidence: f64) -> Self {
        self.race = Some(Prediction::new(label, confidence));
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn wears_mask(&self) -> bool {
        self.mask.indicates_mask()
    }

    /// Bounding-box area, zero when the capability reported no box.
    pub fn area(&self) -> u64 {
        self.facial_area.map_or(0, |b| b.area())
    }
}
